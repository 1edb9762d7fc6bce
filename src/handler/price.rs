use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use chrono_tz::America::New_York;

use crate::api_models::price::{PriceQuery, PriceResponse};
use crate::app::AppState;
use crate::handler::error::AppError;
use crate::services::close::{resolve_close, CloseError};
use crate::services::trading_day::previous_trading_day;
use crate::utils::round::round2;

/// 查询单票收盘报价及相对上一交易日的涨跌
pub async fn get_price(
    State(state): State<AppState>,
    Query(q): Query<PriceQuery>,
) -> Result<Json<PriceResponse>, AppError> {
    let ticker = q.ticker.trim().to_uppercase();
    if ticker.is_empty() {
        return Err(AppError::BadRequest("ticker required".to_string()));
    }

    // 未指定日期时取交易所本地时区的当前日期
    let target = match q.date_str {
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .map_err(|_| AppError::BadRequest("Invalid date format, expected YYYY-MM-DD".to_string()))?,
        None => Utc::now().with_timezone(&New_York).date_naive(),
    };

    let resolved = resolve_close(&state.market, &ticker, target)
        .await
        .map_err(close_error)?;

    // 以实际采用的会话日期为基准回退上一交易日，再取前收
    let prev_day = previous_trading_day(&state.market, resolved.date).await;
    let prev = resolve_close(&state.market, &ticker, prev_day)
        .await
        .map_err(close_error)?;

    let change = resolved.price - prev.price;
    // 前收为 0 时涨跌幅按 0 处理，避免除零
    let pct = if prev.price != 0.0 {
        change / prev.price * 100.0
    } else {
        0.0
    };

    // 名称查询失败时回退为代码本身
    let name = state
        .market
        .fetch_display_name(&ticker)
        .await
        .unwrap_or_else(|| ticker.clone());

    Ok(Json(PriceResponse {
        ticker,
        name,
        price: round2(resolved.price),
        change: round2(change),
        pct: round2(pct),
        basis: "official daily close",
        as_of: resolved.as_of.to_rfc3339(),
    }))
}

fn close_error(e: CloseError) -> AppError {
    match e {
        CloseError::NoDailyData | CloseError::NoQualifyingClose(_) => {
            AppError::NotFound(e.to_string())
        }
        CloseError::Market(e) => {
            tracing::error!("market data fetch failed: {}", e);
            AppError::InternalServerError
        }
    }
}
