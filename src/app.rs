use axum::Router;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use crate::routes;
use crate::services::yahoo::MarketDataClient;
use crate::utils::middleware;

#[derive(Clone)]
pub struct AppState {
    pub market: MarketDataClient,
}

pub fn build_app() -> Router {
    let http_client =
        crate::utils::http_client::create_yahoo_client().expect("Failed to create HTTP client");
    let state = AppState {
        market: MarketDataClient::new(http_client),
    };

    routes::build_routes()
        .with_state(state)
        .layer(middleware::cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
