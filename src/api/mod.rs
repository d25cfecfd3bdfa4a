//! REST APIハンドラー
//!
//! ヘルスチェック、ホストメタデータAPI

pub mod health;
pub mod system;

use axum::{http::StatusCode, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

/// APIルーターを作成
///
/// メタデータ系ルート（`/` と `/api`）には任意オリジンを許可するCORSレイヤーを
/// 適用する。ブラウザ上の別オリジンのクライアントから直接呼ばれるため。
pub fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let metadata_routes = Router::new()
        .route("/", get(system::get_system_info))
        .route("/api", get(system::get_system_info))
        .layer(cors);

    Router::new()
        .route("/health", get(health::health_check))
        .merge(metadata_routes)
        .fallback(fallback)
}

/// 未定義ルートは404を返す
async fn fallback() -> StatusCode {
    StatusCode::NOT_FOUND
}
