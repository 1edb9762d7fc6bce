use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::America::New_York;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

const YF_CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("bad status: {0}")]
    BadStatus(u16),
    #[error("no data in response")]
    NoData,
}

/// 单个交易日的日线数据（日历日期 + 收盘价）
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub date: NaiveDate,
    pub close: f64,
}

/// 图表序列，时间戳与收盘价一一对应
#[derive(Debug, Clone)]
pub struct ChartSeries {
    pub timestamps: Vec<DateTime<Utc>>,
    pub closes: Vec<f64>,
}

/// Yahoo Finance 行情客户端
/// 持有共享的 reqwest::Client，由 AppState 注入，不使用全局单例
#[derive(Clone)]
pub struct MarketDataClient {
    client: Client,
    base_url: String,
}

impl MarketDataClient {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: YF_CHART_URL.to_string(),
        }
    }

    /// 测试用：把数据源指向本地或不可达的地址
    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// 按日期区间拉取日线数据，end 为开区间（不含当日）
    pub async fn fetch_daily_sessions(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Session>, MarketDataError> {
        let period1 = start.and_time(NaiveTime::MIN).and_utc().timestamp().to_string();
        let period2 = end.and_time(NaiveTime::MIN).and_utc().timestamp().to_string();

        let url = format!("{}/{}", self.base_url, ticker);
        let resp = self
            .client
            .get(&url)
            .query(&[
                ("period1", period1.as_str()),
                ("period2", period2.as_str()),
                ("interval", "1d"),
            ])
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(classify_error_response(status.as_u16(), &body));
        }

        let json: Value = serde_json::from_str(&body)?;
        parse_daily_sessions(&json)
    }

    /// 按范围标签拉取图表序列（period/interval 为 Yahoo 约定的标签值）
    pub async fn fetch_chart(
        &self,
        ticker: &str,
        period: &str,
        interval: &str,
    ) -> Result<ChartSeries, MarketDataError> {
        let url = format!("{}/{}", self.base_url, ticker);
        let resp = self
            .client
            .get(&url)
            .query(&[("range", period), ("interval", interval)])
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(classify_error_response(status.as_u16(), &body));
        }

        let json: Value = serde_json::from_str(&body)?;
        parse_chart_series(&json)
    }

    /// 查询展示名称，任何失败都返回 None，由调用方决定兜底值
    pub async fn fetch_display_name(&self, ticker: &str) -> Option<String> {
        let url = format!("{}/{}", self.base_url, ticker);
        let resp = self
            .client
            .get(&url)
            .query(&[("range", "1d"), ("interval", "1d")])
            .send()
            .await
            .ok()?;

        if !resp.status().is_success() {
            return None;
        }
        let json: Value = resp.json().await.ok()?;
        parse_display_name(&json)
    }
}

/// 从 chart 响应中提取日线会话序列（按日期升序）
/// 日线时间戳按交易所本地时区换算为日历日期
pub fn parse_daily_sessions(json: &Value) -> Result<Vec<Session>, MarketDataError> {
    let (timestamps, closes) = chart_arrays(json)?;

    let mut sessions = Vec::new();
    for (ts, close) in timestamps.iter().zip(closes.iter()) {
        if let (Some(ts), Some(close)) = (ts.as_i64(), close.as_f64()) {
            if let Some(utc) = DateTime::from_timestamp(ts, 0) {
                let date = utc.with_timezone(&New_York).date_naive();
                sessions.push(Session { date, close });
            }
        }
    }

    if sessions.is_empty() {
        return Err(MarketDataError::NoData);
    }
    Ok(sessions)
}

/// 从 chart 响应中提取图表序列，空值收盘价连同其时间戳一起剔除
pub fn parse_chart_series(json: &Value) -> Result<ChartSeries, MarketDataError> {
    let (timestamps, closes) = chart_arrays(json)?;

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (ts, close) in timestamps.iter().zip(closes.iter()) {
        if let (Some(ts), Some(close)) = (ts.as_i64(), close.as_f64()) {
            if let Some(utc) = DateTime::from_timestamp(ts, 0) {
                xs.push(utc);
                ys.push(close);
            }
        }
    }

    if ys.is_empty() {
        return Err(MarketDataError::NoData);
    }
    Ok(ChartSeries {
        timestamps: xs,
        closes: ys,
    })
}

/// meta 中 longName 优先，其次 shortName，都缺失返回 None
pub fn parse_display_name(json: &Value) -> Option<String> {
    let meta = json
        .get("chart")?
        .get("result")?
        .get(0)?
        .get("meta")?;
    meta.get("longName")
        .and_then(|v| v.as_str())
        .or_else(|| meta.get("shortName").and_then(|v| v.as_str()))
        .map(|s| s.to_string())
}

/// 归一化非成功响应：数据源对未知代码返回 404 并携带 chart.error 负载，
/// 这类"查无此票"要当作 NoData 而不是上游故障
fn classify_error_response(status: u16, body: &str) -> MarketDataError {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        if let Some(chart) = json.get("chart") {
            let no_result = chart.get("result").map_or(true, |r| r.is_null());
            let has_error = chart.get("error").map_or(false, |e| !e.is_null());
            if no_result || has_error {
                return MarketDataError::NoData;
            }
        }
    }
    if status == 404 {
        return MarketDataError::NoData;
    }
    MarketDataError::BadStatus(status)
}

fn chart_arrays(json: &Value) -> Result<(&Vec<Value>, &Vec<Value>), MarketDataError> {
    let result = json
        .get("chart")
        .and_then(|c| c.get("result"))
        .and_then(|r| r.get(0))
        .ok_or(MarketDataError::NoData)?;

    let timestamps = result
        .get("timestamp")
        .and_then(|v| v.as_array())
        .ok_or(MarketDataError::NoData)?;

    let closes = result
        .get("indicators")
        .and_then(|i| i.get("quote"))
        .and_then(|q| q.get(0))
        .and_then(|q| q.get("close"))
        .and_then(|v| v.as_array())
        .ok_or(MarketDataError::NoData)?;

    Ok((timestamps, closes))
}
