//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with a
//! default value when unset or unparseable.

/// デフォルトの待ち受けポート
pub const DEFAULT_PORT: u16 = 5000;

/// Get an environment variable, parsing to a specific type
///
/// # Arguments
/// * `name` - The environment variable name
/// * `default` - The default value to return if the variable is unset or
///   parsing fails
///
/// # Returns
/// The parsed environment variable value or the default
pub fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// HTTPサーバー設定
///
/// プロセス起動時に一度だけ構築し、サーバー起動処理へ引数として渡す。
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 待ち受けポート
    pub port: u16,
}

impl ServerConfig {
    /// Load the server configuration from environment variables.
    ///
    /// `PORT` が未設定または不正な値の場合は 5000 を使用する。
    pub fn from_env() -> Self {
        Self {
            port: get_env_parse("PORT", DEFAULT_PORT),
        }
    }

    /// 全ネットワークインターフェースで待ち受けるバインドアドレス
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
