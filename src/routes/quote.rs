use axum::{routing::get, Router};

use crate::app::AppState;
use crate::handler::history::get_history;
use crate::handler::price::get_price;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/price", get(get_price))
        .route("/history", get(get_history))
}
