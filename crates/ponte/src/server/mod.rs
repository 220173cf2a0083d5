mod balance;
mod block;
mod docs;
mod error;
mod rate_limit;
mod transaction;

use std::sync::Arc;

use axum::routing::get;
use axum::{middleware, Json, Router};
use tower_http::trace::TraceLayer;

use ponte_core::rpc::NodeRpc;

// ==============================================================================
// Application State
// ==============================================================================

pub struct AppState {
    pub rpc: Arc<dyn NodeRpc>,
}

type SharedState = Arc<AppState>;

// ==============================================================================
// Router
// ==============================================================================

pub fn build_router(state: AppState) -> Router {
    let limiter = rate_limit::ApiRateLimiter::shared();
    rate_limit::spawn_stale_key_sweeper(&limiter);

    Router::new()
        .route("/health", get(health))
        .route("/block/{height}", get(block::get_block_by_height))
        .route("/transaction/{txid}", get(transaction::get_transaction))
        .route(
            "/address/{address}/balance",
            get(balance::get_address_balance),
        )
        .route("/api-docs", get(docs::swagger_ui))
        .route("/api-docs/openapi.json", get(docs::openapi_document))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(limiter, rate_limit::enforce))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn not_found() -> error::AppError {
    error::AppError::NotFound("route not found".to_string())
}
