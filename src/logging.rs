//! ロギング初期化ユーティリティ

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// ログは標準エラー出力へ書き出す。標準出力は起動メッセージ専用。
/// `RUST_LOG` が未設定の場合は `info` レベルを使用する。
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
}
