use serde::{Deserialize, Serialize};

/// 单票报价查询请求
#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    /// 股票代码，大小写不敏感
    pub ticker: String,
    /// 目标日期，格式：YYYY-MM-DD，缺省为交易所本地当前日期
    pub date_str: Option<String>,
}

/// 单票报价响应（相对上一交易日的涨跌）
#[derive(Debug, Serialize)]
pub struct PriceResponse {
    pub ticker: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub pct: f64,
    /// 报价口径说明，固定为官方日线收盘
    pub basis: &'static str,
    /// 收盘时刻（UTC，RFC 3339）
    pub as_of: String,
}
