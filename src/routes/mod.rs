use axum::Router;

use crate::app::AppState;

mod quote;
mod root;

pub fn build_routes() -> Router<AppState> {
    Router::new()
        // 根路径与健康检查
        .merge(root::router())
        // 行情 API 直接挂在根路径下，与前端约定一致
        .merge(quote::router())
}
