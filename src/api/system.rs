//! ホストメタデータAPI
//!
//! 実行中ホストのCPUアーキテクチャ・OS・現在時刻をリクエストごとに取得して返す。

use axum::Json;
use chrono::Utc;
use serde::Serialize;
use sysinfo::System;

/// `service` フィールドの値。
///
/// 置き換え前のサービスが返していた値をそのまま維持する。
/// 既存のダッシュボードクライアントとのワイヤ互換のため変更しない。
const SERVICE_NAME: &str = "python";

/// ホストメタデータのレスポンスペイロード
///
/// リクエストごとに再計算されるため、リクエスト間で共有する状態は持たない。
#[derive(Debug, Serialize)]
pub struct SystemInfoResponse {
    service: &'static str,
    architecture: String,
    platform: String,
    timestamp: String,
}

/// GET /api （GET / も同一ハンドラー）
///
/// ホストメタデータをリクエストごとに再取得して返す。キャッシュしない。
pub async fn get_system_info() -> Json<SystemInfoResponse> {
    Json(SystemInfoResponse {
        service: SERVICE_NAME,
        architecture: architecture(),
        platform: platform(),
        timestamp: utc_timestamp(),
    })
}

/// ホストのCPUアーキテクチャ（例: `x86_64`）
///
/// 実行時のuname値を優先し、取得できない環境ではコンパイル時の値を使う。
fn architecture() -> String {
    System::cpu_arch().unwrap_or_else(|| std::env::consts::ARCH.to_string())
}

/// ホストのOSファミリー名（例: `Linux`, `Darwin`, `Windows`）
fn platform() -> String {
    match std::env::consts::OS {
        "linux" => "Linux".to_string(),
        "macos" => "Darwin".to_string(),
        "windows" => "Windows".to_string(),
        other => other.to_string(),
    }
}

/// 現在のUTC時刻をマイクロ秒精度のISO-8601文字列で返す
fn utc_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn architecture_is_non_empty() {
        assert!(!architecture().is_empty());
    }

    #[test]
    fn platform_is_an_os_family_name() {
        let platform = platform();
        assert!(!platform.is_empty());
        // 既知OSではファミリー名に正規化される
        if matches!(std::env::consts::OS, "linux" | "macos" | "windows") {
            assert!(["Linux", "Darwin", "Windows"].contains(&platform.as_str()));
        }
    }

    #[test]
    fn utc_timestamp_has_microsecond_precision() {
        let ts = utc_timestamp();
        NaiveDateTime::parse_from_str(&ts, "%Y-%m-%dT%H:%M:%S%.6f")
            .expect("timestamp should be ISO-8601 with microseconds");
        let (_, fraction) = ts.split_once('.').expect("timestamp should have a fraction");
        assert_eq!(fraction.len(), 6);
    }

    #[tokio::test]
    async fn get_system_info_reports_compat_service_name() {
        let Json(info) = get_system_info().await;
        assert_eq!(info.service, "python");
    }

    #[tokio::test]
    async fn response_serializes_with_exactly_four_fields() {
        let Json(info) = get_system_info().await;
        let value = serde_json::to_value(&info).expect("response should serialize");

        let object = value.as_object().expect("response should be a JSON object");
        assert_eq!(object.len(), 4);
        for key in ["service", "architecture", "platform", "timestamp"] {
            assert!(object.contains_key(key), "missing field: {key}");
        }
    }
}
