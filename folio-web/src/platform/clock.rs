use folio_core::Millis;

/// 当前时间（毫秒），取自 `performance.now()`
///
/// 单调时钟，不受系统时间调整影响；轮播、计数和表单复位的截止时间都基于它。
pub fn now_ms() -> Millis {
    let reading = web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now());
    to_millis(reading)
}

/// 本地时间的年份
pub fn current_year() -> u16 {
    js_sys::Date::new_0().get_full_year() as u16
}

fn to_millis(reading: Option<f64>) -> Millis {
    reading.filter(|ms| ms.is_finite()).unwrap_or(0.0).max(0.0) as Millis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_millis() {
        assert_eq!(to_millis(Some(1234.7)), 1234);
        assert_eq!(to_millis(Some(-3.0)), 0);
        assert_eq!(to_millis(Some(f64::NAN)), 0);
        assert_eq!(to_millis(None), 0);
    }
}
