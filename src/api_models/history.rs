use serde::{Deserialize, Serialize};

/// 历史序列查询请求
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub ticker: String,
    /// 范围标签：1D/5D/1M/6M/YTD/1Y/5Y/ALL，未识别时回退为 5D
    #[serde(default = "default_range")]
    pub range: String,
    /// 是否归一化为相对首值的涨跌百分比
    #[serde(default)]
    pub normalize: bool,
}

fn default_range() -> String {
    "5D".to_string()
}

/// 历史序列响应，x 与 y 一一对应
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub ticker: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub normalized: bool,
}
