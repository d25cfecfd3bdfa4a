//! Host Metadata Service Entry Point

use std::io::Write;

use hostmeta::config::ServerConfig;
use hostmeta::{logging, server};

#[tokio::main]
async fn main() {
    logging::init().expect("failed to initialize logging");

    // ポート設定はここで一度だけ解決し、以降は引数として引き回す
    let config = ServerConfig::from_env();

    // 起動メッセージはベストエフォート。書き込み失敗で起動を中断しない
    let _ = writeln!(
        std::io::stdout(),
        "Starting hostmeta service on port {}",
        config.port
    );

    server::run(config).await;
}
