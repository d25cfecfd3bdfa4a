//! Host Metadata Service
//!
//! ホストのメタデータ（CPUアーキテクチャ、OS、現在時刻）と死活確認を返す
//! 小さなHTTPサーバー

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// ロギング初期化ユーティリティ
pub mod logging;

/// axumサーバー起動・シャットダウンハンドリング
pub mod server;
