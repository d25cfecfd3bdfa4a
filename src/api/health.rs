//! ヘルスチェックAPI

/// GET /health
///
/// プロセスが稼働していれば常に 200 と本文 `OK` を返す。
/// 依存先の状態には関与しない純粋な死活確認。
pub async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_check_returns_literal_ok() {
        assert_eq!(health_check().await, "OK");
    }
}
