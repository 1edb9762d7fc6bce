/// 范围标签 → (period, interval)，与前端图表组件的档位约定一致
/// 未识别的标签回退到 5D 档
pub fn map_range(label: &str) -> (&'static str, &'static str) {
    match label.to_ascii_uppercase().as_str() {
        "1D" => ("1d", "1m"),
        "5D" => ("5d", "5m"),
        "1M" => ("1mo", "30m"),
        "6M" => ("6mo", "1d"),
        "YTD" => ("ytd", "1d"),
        "1Y" => ("1y", "1d"),
        "5Y" => ("5y", "1wk"),
        "ALL" => ("max", "1mo"),
        _ => ("5d", "5m"),
    }
}

/// 原地归一化为相对首值的涨跌百分比，空序列不做处理
pub fn normalize_series(values: &mut [f64]) {
    if let Some(&base) = values.first() {
        for v in values.iter_mut() {
            *v = (*v / base - 1.0) * 100.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_map_to_their_pair() {
        assert_eq!(map_range("1D"), ("1d", "1m"));
        assert_eq!(map_range("YTD"), ("ytd", "1d"));
        assert_eq!(map_range("ALL"), ("max", "1mo"));
    }

    #[test]
    fn labels_are_case_insensitive() {
        assert_eq!(map_range("ytd"), map_range("YTD"));
        assert_eq!(map_range("5d"), map_range("5D"));
    }

    #[test]
    fn unknown_label_falls_back_to_5d() {
        assert_eq!(map_range("BOGUS"), map_range("5D"));
        assert_eq!(map_range(""), ("5d", "5m"));
    }

    #[test]
    fn normalized_series_starts_at_zero() {
        let mut values = vec![200.0, 210.0, 190.0];
        normalize_series(&mut values);
        assert_eq!(values[0], 0.0);
        assert!((values[1] - 5.0).abs() < 1e-9);
        assert!((values[2] + 5.0).abs() < 1e-9);
    }

    #[test]
    fn empty_series_is_left_untouched() {
        let mut values: Vec<f64> = vec![];
        normalize_series(&mut values);
        assert!(values.is_empty());
    }
}
