//! # Easing 模块
//!
//! 缓动函数库，用于动画的时间插值，同时能输出对应的 CSS timing function。

/// 三次贝塞尔曲线（CSS `cubic-bezier(x1, y1, x2, y2)`）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicBezier {
    /// 站点所有入场过渡共用的曲线：快速启动、长尾收敛
    pub const SOFT_OUT: CubicBezier = CubicBezier::new(0.16, 1.0, 0.3, 1.0);

    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// 求 x = t 时的 y
    ///
    /// 先用牛顿迭代求曲线参数 s，失败时退回二分法。
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        let s = self.solve_param(t);
        sample(self.y1, self.y2, s)
    }

    fn solve_param(&self, x: f32) -> f32 {
        let mut s = x;
        for _ in 0..8 {
            let err = sample(self.x1, self.x2, s) - x;
            if err.abs() < 1e-6 {
                return s;
            }
            let slope = sample_derivative(self.x1, self.x2, s);
            if slope.abs() < 1e-6 {
                break;
            }
            s -= err / slope;
        }

        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        s = x;
        for _ in 0..32 {
            let value = sample(self.x1, self.x2, s);
            if (value - x).abs() < 1e-6 {
                break;
            }
            if value < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }

    /// CSS 表示
    pub fn css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// 一维贝塞尔分量（端点固定为 0 和 1）
fn sample(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn sample_derivative(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// 缓动函数类型
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EasingFunction {
    /// 线性（匀速），滚动 scrub 使用
    Linear,
    /// 三次缓出，计数器使用
    EaseOutCubic,
    /// 二次缓入缓出，分隔线绘制使用
    EaseInOutQuad,
    /// 入场过渡曲线
    #[default]
    SoftOut,
    /// 自定义贝塞尔曲线
    Bezier(CubicBezier),
}

impl EasingFunction {
    /// 计算缓动值
    ///
    /// # 参数
    /// - `t`: 时间进度 (0.0 - 1.0)
    ///
    /// # 返回
    /// - 缓动后的进度值 (0.0 - 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            EasingFunction::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            EasingFunction::SoftOut => CubicBezier::SOFT_OUT.apply(t),
            EasingFunction::Bezier(curve) => curve.apply(t),
        }
    }

    /// 对应的 CSS timing function
    pub fn css(&self) -> String {
        match self {
            EasingFunction::Linear => "linear".to_string(),
            EasingFunction::EaseOutCubic => CubicBezier::new(0.33, 1.0, 0.68, 1.0).css(),
            EasingFunction::EaseInOutQuad => CubicBezier::new(0.45, 0.0, 0.55, 1.0).css(),
            EasingFunction::SoftOut => CubicBezier::SOFT_OUT.css(),
            EasingFunction::Bezier(curve) => curve.css(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear() {
        let easing = EasingFunction::Linear;
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(0.5), 0.5);
        assert_eq!(easing.apply(1.0), 1.0);
    }

    #[test]
    fn test_ease_in_out_quad() {
        let easing = EasingFunction::EaseInOutQuad;
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
        // 中点应该是 0.5
        let mid = easing.apply(0.5);
        assert!((mid - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_ease_out_cubic() {
        let easing = EasingFunction::EaseOutCubic;
        assert!((easing.apply(0.5) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn test_clamp() {
        let easing = EasingFunction::Linear;
        // 超出范围应该被限制
        assert_eq!(easing.apply(-0.5), 0.0);
        assert_eq!(easing.apply(1.5), 1.0);
    }

    #[test]
    fn test_soft_out_is_monotonic_and_front_loaded() {
        let easing = EasingFunction::SoftOut;
        let mut prev = 0.0;
        for i in 1..=20 {
            let v = easing.apply(i as f32 / 20.0);
            assert!(v >= prev - 1e-4, "step {i}: {v} < {prev}");
            prev = v;
        }
        // 前半段已经走完大部分
        assert!(easing.apply(0.3) > 0.7);
        assert!((easing.apply(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_css_output() {
        assert_eq!(
            EasingFunction::SoftOut.css(),
            "cubic-bezier(0.16, 1, 0.3, 1)"
        );
        assert_eq!(EasingFunction::Linear.css(), "linear");
    }
}
