//! # Style 模块
//!
//! 元素在某一时刻的视觉快照（透明度、变换、模糊）以及到达该快照所用的过渡。
//! 显示层只负责把快照写进 inline style，过渡由浏览器执行。

use super::{EasingFunction, Transform};

/// 视觉快照
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSnapshot {
    /// 透明度 (0.0 - 1.0)
    pub opacity: f32,
    /// 变换
    pub transform: Transform,
    /// 高斯模糊半径（px），0 表示不模糊
    pub blur_px: f32,
}

impl Default for StyleSnapshot {
    fn default() -> Self {
        Self::shown()
    }
}

impl StyleSnapshot {
    /// 完全显示：不透明、无偏移、无模糊
    pub fn shown() -> Self {
        Self {
            opacity: 1.0,
            transform: Transform::identity(),
            blur_px: 0.0,
        }
    }

    /// 完全透明
    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::shown()
        }
    }

    /// 设置变换
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// 设置模糊
    pub fn with_blur(mut self, blur_px: f32) -> Self {
        self.blur_px = blur_px.max(0.0);
        self
    }

    /// CSS `filter` 值
    pub fn filter_css(&self) -> String {
        if self.blur_px > 0.0 {
            format!("blur({}px)", self.blur_px)
        } else {
            "none".to_string()
        }
    }

    /// 输出 inline style（不含过渡）
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: {}; filter: {};",
            self.opacity,
            self.transform.to_css(),
            self.filter_css()
        )
    }

    /// 输出带过渡的 inline style
    pub fn to_css_with(&self, transition: &Transition) -> String {
        format!("{} transition: {};", self.to_css(), transition.to_css())
    }
}

/// 过渡设置
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// 时长（毫秒）
    pub duration_ms: u32,
    /// 延迟（毫秒）
    pub delay_ms: u32,
    /// 缓动
    pub easing: EasingFunction,
}

impl Transition {
    pub fn new(duration_ms: u32, delay_ms: u32) -> Self {
        Self {
            duration_ms,
            delay_ms,
            easing: EasingFunction::SoftOut,
        }
    }

    /// CSS `transition` 值（作用于全部属性）
    pub fn to_css(&self) -> String {
        format!(
            "all {}ms {} {}ms",
            self.duration_ms,
            self.easing.css(),
            self.delay_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_css() {
        let snap = StyleSnapshot::hidden()
            .with_transform(Transform::translate_y(40.0))
            .with_blur(8.0);
        assert_eq!(
            snap.to_css(),
            "opacity: 0; transform: translateY(40px); filter: blur(8px);"
        );
        assert_eq!(
            StyleSnapshot::shown().to_css(),
            "opacity: 1; transform: none; filter: none;"
        );
    }

    #[test]
    fn test_transition_css() {
        let transition = Transition::new(700, 200);
        assert_eq!(
            transition.to_css(),
            "all 700ms cubic-bezier(0.16, 1, 0.3, 1) 200ms"
        );
    }
}
