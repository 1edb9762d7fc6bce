use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

/// 允许前端站点跨域调用本 API：生产域名 + 本地开发地址
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("https://www.azizlifinance.com"),
            HeaderValue::from_static("https://azizlifinance.com"),
            HeaderValue::from_static("http://localhost:8000"),
            HeaderValue::from_static("http://127.0.0.1:8000"),
        ])
        .allow_methods(Any)
        .allow_headers(Any)
}
