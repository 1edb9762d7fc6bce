use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// 向前回退 n 个工作日，跳过周六、周日（不考虑节假日）
pub fn sub_business_days(date: NaiveDate, n: u32) -> NaiveDate {
    let mut d = date;
    let mut remaining = n;
    while remaining > 0 {
        d = d - Duration::days(1);
        if !matches!(d.weekday(), Weekday::Sat | Weekday::Sun) {
            remaining -= 1;
        }
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn skips_weekends() {
        // 2024-07-08 是周一，回退 1 个工作日应落在上周五
        assert_eq!(sub_business_days(d(2024, 7, 8), 1), d(2024, 7, 5));
        // 回退 5 个工作日正好跨一整周
        assert_eq!(sub_business_days(d(2024, 7, 8), 5), d(2024, 7, 1));
    }

    #[test]
    fn zero_offset_is_identity() {
        assert_eq!(sub_business_days(d(2024, 7, 8), 0), d(2024, 7, 8));
    }

    #[test]
    fn twenty_business_days_spans_four_weeks() {
        assert_eq!(sub_business_days(d(2024, 7, 5), 20), d(2024, 6, 7));
    }
}
