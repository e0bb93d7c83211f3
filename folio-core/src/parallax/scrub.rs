//! 滚动位置到数值的纯映射

/// 滚动窗口（文档坐标下的 scrollY 区间）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollWindow {
    pub start: f32,
    pub end: f32,
}

impl ScrollWindow {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// 元素顶部碰到视口底部时开始，元素底部离开视口顶部时结束
    ///
    /// `element_top` 为元素在文档中的顶部坐标。
    pub fn enter_to_exit(element_top: f32, element_height: f32, viewport_height: f32) -> Self {
        Self {
            start: element_top - viewport_height,
            end: element_top + element_height,
        }
    }

    /// 当前滚动位置在窗口内的进度 (0.0 - 1.0)
    pub fn progress(&self, scroll: f32) -> f32 {
        if self.end <= self.start {
            return if scroll >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }
}

/// 线性 scrub：滚动位置扫过窗口时，数值从 `from` 线性变化到 `to`
///
/// 窗口之前保持 `from`，窗口之后保持 `to`。
pub fn scrub(scroll: f32, window_start: f32, window_end: f32, from: f32, to: f32) -> f32 {
    let t = ScrollWindow::new(window_start, window_end).progress(scroll);
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrub_bounds() {
        assert_eq!(scrub(-100.0, 0.0, 1000.0, 60.0, -30.0), 60.0);
        assert_eq!(scrub(0.0, 0.0, 1000.0, 60.0, -30.0), 60.0);
        assert_eq!(scrub(500.0, 0.0, 1000.0, 60.0, -30.0), 15.0);
        assert_eq!(scrub(1000.0, 0.0, 1000.0, 60.0, -30.0), -30.0);
        assert_eq!(scrub(5000.0, 0.0, 1000.0, 60.0, -30.0), -30.0);
    }

    #[test]
    fn test_scrub_monotonic() {
        let mut prev = f32::INFINITY;
        for step in 0..=60 {
            let scroll = -200.0 + step as f32 * 25.0;
            let value = scrub(scroll, 0.0, 1200.0, 40.0, -20.0);
            assert!(value <= prev);
            prev = value;
        }
    }

    #[test]
    fn test_degenerate_window() {
        let window = ScrollWindow::new(100.0, 100.0);
        assert_eq!(window.progress(99.0), 0.0);
        assert_eq!(window.progress(100.0), 1.0);
    }

    #[test]
    fn test_enter_to_exit() {
        let window = ScrollWindow::enter_to_exit(1500.0, 600.0, 800.0);
        assert_eq!(window, ScrollWindow::new(700.0, 2100.0));
    }
}
