/// 保留两位小数，用于价格与涨跌幅的展示
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round2(226.33527), 226.34);
        assert_eq!(round2(-1.005), -1.0);
        assert_eq!(round2(0.0), 0.0);
    }
}
