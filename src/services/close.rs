use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::America::New_York;
use thiserror::Error;

use crate::services::yahoo::{MarketDataClient, MarketDataError, Session};
use crate::utils::business_day::sub_business_days;

/// 官方收盘时间按交易所惯例固定为 16:00（美东时间）
const CLOSE_HOUR: u32 = 16;

/// 窗口起点向前回退的工作日数，足以覆盖长假
const LOOKBACK_BUSINESS_DAYS: u32 = 20;

#[derive(Debug, Error)]
pub enum CloseError {
    #[error("No daily data")]
    NoDailyData,
    #[error("No close on/before {0}")]
    NoQualifyingClose(NaiveDate),
    #[error("market data error: {0}")]
    Market(MarketDataError),
}

/// 解析结果：收盘价 + 收盘时刻 + 实际采用的会话日期
#[derive(Debug, Clone)]
pub struct ResolvedClose {
    pub price: f64,
    pub as_of: DateTime<Utc>,
    pub date: NaiveDate,
}

/// 查找目标日期（含当日）之前最近的一个日线收盘价
pub async fn resolve_close(
    market: &MarketDataClient,
    ticker: &str,
    target: NaiveDate,
) -> Result<ResolvedClose, CloseError> {
    // 起点按工作日回退以容忍周末，终点 +2 天确保目标当日的会话落在区间内
    let start = sub_business_days(target, LOOKBACK_BUSINESS_DAYS);
    let end = target + Duration::days(2);

    let sessions = market
        .fetch_daily_sessions(ticker, start, end)
        .await
        .map_err(|e| match e {
            MarketDataError::NoData => CloseError::NoDailyData,
            other => CloseError::Market(other),
        })?;

    let session = latest_close_on_or_before(&sessions, target)
        .ok_or(CloseError::NoQualifyingClose(target))?;

    Ok(ResolvedClose {
        price: session.close,
        as_of: close_time_utc(session.date),
        date: session.date,
    })
}

/// 从最近的会话向后扫描，返回第一个日期 ≤ target 的会话
/// 窗口尾部可能带有晚于 target 的会话，会被正确跳过
pub fn latest_close_on_or_before(sessions: &[Session], target: NaiveDate) -> Option<&Session> {
    sessions.iter().rev().find(|s| s.date <= target)
}

/// 会话日期挂上 16:00 美东收盘时间，再换算为 UTC 输出
/// 这是对官方收盘时刻的近似，数据源本身的时间戳不可靠
pub fn close_time_utc(date: NaiveDate) -> DateTime<Utc> {
    match New_York
        .with_ymd_and_hms(date.year(), date.month(), date.day(), CLOSE_HOUR, 0, 0)
        .single()
    {
        Some(dt) => dt.with_timezone(&Utc),
        // 夏令时切换发生在凌晨 2 点，16:00 不会出现歧义；兜底按 EST 固定偏移换算
        None => {
            date.and_time(NaiveTime::MIN).and_utc() + Duration::hours(i64::from(CLOSE_HOUR + 5))
        }
    }
}
