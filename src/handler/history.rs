use axum::{
    extract::{Query, State},
    Json,
};

use crate::api_models::history::{HistoryQuery, HistoryResponse};
use crate::app::AppState;
use crate::handler::error::AppError;
use crate::services::history::{map_range, normalize_series};
use crate::services::yahoo::MarketDataError;

/// 查询历史价格序列（供前端画图）
pub async fn get_history(
    State(state): State<AppState>,
    Query(q): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, AppError> {
    let ticker = q.ticker.trim().to_uppercase();

    let (period, interval) = map_range(&q.range);

    let mut series = state
        .market
        .fetch_chart(&ticker, period, interval)
        .await
        .map_err(|e| match e {
            MarketDataError::NoData => AppError::NotFound("No history".to_string()),
            other => {
                tracing::error!("chart fetch failed: {}", other);
                AppError::InternalServerError
            }
        })?;

    if q.normalize {
        normalize_series(&mut series.closes);
    }

    let x = series
        .timestamps
        .iter()
        .map(|ts| ts.to_rfc3339())
        .collect();

    Ok(Json(HistoryResponse {
        ticker,
        x,
        y: series.closes,
        normalized: q.normalize,
    }))
}
