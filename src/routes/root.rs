use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::app::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

async fn root() -> &'static str {
    "Quote backend"
}

async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}
