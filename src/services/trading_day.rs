use chrono::{Duration, NaiveDate};

use crate::services::yahoo::{MarketDataClient, Session};

/// 市场开市代理标的：以 SPY 是否有成交近似"当天有开市"
const MARKET_PROXY_TICKER: &str = "SPY";

/// 回看窗口长度（自然日）
const LOOKBACK_DAYS: i64 = 30;

/// 查找 reference 之前最近的一个交易日
/// 从不报错：数据源失败或窗口内无会话时回退为前一自然日
/// 长假或数据源故障期间该回退可能给出错误的交易日，仅以告警形式暴露
pub async fn previous_trading_day(market: &MarketDataClient, reference: NaiveDate) -> NaiveDate {
    let start = reference - Duration::days(LOOKBACK_DAYS);
    let end = reference + Duration::days(1);
    let fallback = reference - Duration::days(1);

    match market
        .fetch_daily_sessions(MARKET_PROXY_TICKER, start, end)
        .await
    {
        Ok(sessions) => latest_session_before(&sessions, reference).unwrap_or_else(|| {
            tracing::warn!(
                "no {} session before {} in window, falling back to previous calendar day",
                MARKET_PROXY_TICKER,
                reference
            );
            fallback
        }),
        Err(e) => {
            tracing::warn!(
                "proxy fetch failed ({}), falling back to previous calendar day",
                e
            );
            fallback
        }
    }
}

/// 返回严格早于 reference 的最近会话日期
pub fn latest_session_before(sessions: &[Session], reference: NaiveDate) -> Option<NaiveDate> {
    sessions
        .iter()
        .rev()
        .map(|s| s.date)
        .find(|d| *d < reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn session(date: NaiveDate) -> Session {
        Session { date, close: 550.0 }
    }

    #[test]
    fn picks_latest_session_strictly_before_reference() {
        let sessions = vec![
            session(d(2024, 7, 1)),
            session(d(2024, 7, 2)),
            session(d(2024, 7, 3)),
            session(d(2024, 7, 5)),
        ];
        // 窗口包含 reference 当日的会话，必须被排除
        assert_eq!(
            latest_session_before(&sessions, d(2024, 7, 5)),
            Some(d(2024, 7, 3))
        );
        assert_eq!(
            latest_session_before(&sessions, d(2024, 7, 8)),
            Some(d(2024, 7, 5))
        );
    }

    #[test]
    fn result_is_always_before_reference() {
        let sessions = vec![session(d(2024, 7, 5)), session(d(2024, 7, 8))];
        for day in 1..=10 {
            let reference = d(2024, 7, day);
            if let Some(found) = latest_session_before(&sessions, reference) {
                assert!(found < reference);
            }
        }
    }

    #[test]
    fn empty_window_has_no_session() {
        assert_eq!(latest_session_before(&[], d(2024, 7, 5)), None);
        let sessions = vec![session(d(2024, 7, 5))];
        assert_eq!(latest_session_before(&sessions, d(2024, 7, 5)), None);
    }

    #[tokio::test]
    async fn provider_failure_falls_back_to_previous_calendar_day() {
        // 指向不可达地址模拟数据源故障，回退必须是前一自然日而不是报错
        let client = crate::utils::http_client::create_yahoo_client().unwrap();
        let market = MarketDataClient::with_base_url(client, "http://127.0.0.1:9/v8/finance/chart");
        let reference = d(2024, 7, 8);
        assert_eq!(previous_trading_day(&market, reference).await, d(2024, 7, 7));
    }
}
