//! # Transform 模块
//!
//! 变换状态，表示一个元素的位移、3D 旋转和缩放，可以直接输出 CSS `transform`。

use std::fmt::Write;

/// 二维向量
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// 创建新的向量
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// 零向量
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// 单位向量 (1, 1)
    pub const fn one() -> Self {
        Self { x: 1.0, y: 1.0 }
    }

    /// 线性插值
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// 逐分量缩放
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Self) -> Self::Output {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// 变换状态
///
/// 位移单位为 px，旋转单位为度（与 CSS 保持一致）。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// 位移
    pub translate: Vec2,
    /// 绕 X 轴旋转（度）
    pub rotate_x: f32,
    /// 绕 Y 轴旋转（度）
    pub rotate_y: f32,
    /// 缩放因子
    pub scale: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translate: Vec2::zero(),
            rotate_x: 0.0,
            rotate_y: 0.0,
            scale: Vec2::one(),
        }
    }
}

impl Transform {
    /// 恒等变换
    pub fn identity() -> Self {
        Self::default()
    }

    /// 只有位移的变换
    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            translate: Vec2::new(x, y),
            ..Self::default()
        }
    }

    /// 只有纵向位移的变换
    pub fn translate_y(y: f32) -> Self {
        Self::translate(0.0, y)
    }

    /// 只有横向缩放的变换
    pub fn scale_x(x: f32) -> Self {
        Self {
            scale: Vec2::new(x, 1.0),
            ..Self::default()
        }
    }

    /// 设置绕 X 轴旋转
    pub fn with_rotate_x(mut self, degrees: f32) -> Self {
        self.rotate_x = degrees;
        self
    }

    /// 设置绕 Y 轴旋转
    pub fn with_rotate_y(mut self, degrees: f32) -> Self {
        self.rotate_y = degrees;
        self
    }

    /// 设置均匀缩放
    pub fn with_uniform_scale(mut self, s: f32) -> Self {
        self.scale = Vec2::new(s, s);
        self
    }

    /// 是否为恒等变换
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// 线性插值到另一个变换
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            translate: self.translate.lerp(other.translate, t),
            rotate_x: self.rotate_x + (other.rotate_x - self.rotate_x) * t,
            rotate_y: self.rotate_y + (other.rotate_y - self.rotate_y) * t,
            scale: self.scale.lerp(other.scale, t),
        }
    }

    /// 输出 CSS `transform` 值
    ///
    /// 恒等变换输出 `none`，其余只输出非默认的分量。
    pub fn to_css(&self) -> String {
        if self.is_identity() {
            return "none".to_string();
        }

        let mut parts: Vec<String> = Vec::new();
        let Vec2 { x, y } = self.translate;
        match (x != 0.0, y != 0.0) {
            (true, true) => parts.push(format!("translate({x}px, {y}px)")),
            (true, false) => parts.push(format!("translateX({x}px)")),
            (false, true) => parts.push(format!("translateY({y}px)")),
            (false, false) => {}
        }
        if self.rotate_x != 0.0 {
            parts.push(format!("rotateX({}deg)", self.rotate_x));
        }
        if self.rotate_y != 0.0 {
            parts.push(format!("rotateY({}deg)", self.rotate_y));
        }
        if self.scale != Vec2::one() {
            let mut s = String::new();
            if self.scale.x == self.scale.y {
                let _ = write!(s, "scale({})", self.scale.x);
            } else if self.scale.y == 1.0 {
                let _ = write!(s, "scaleX({})", self.scale.x);
            } else {
                let _ = write!(s, "scale({}, {})", self.scale.x, self.scale.y);
            }
            parts.push(s);
        }
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_default() {
        let t = Transform::default();
        assert_eq!(t.translate, Vec2::zero());
        assert_eq!(t.scale, Vec2::one());
        assert!(t.is_identity());
        assert_eq!(t.to_css(), "none");
    }

    #[test]
    fn test_transform_lerp() {
        let t1 = Transform::translate_y(40.0);
        let t2 = Transform::identity();
        let mid = t1.lerp(&t2, 0.5);
        assert!((mid.translate.y - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_vec2_lerp() {
        let v1 = Vec2::new(0.0, 0.0);
        let v2 = Vec2::new(10.0, 20.0);
        let mid = v1.lerp(v2, 0.5);
        assert_eq!(mid.x, 5.0);
        assert_eq!(mid.y, 10.0);
    }

    #[test]
    fn test_css_output() {
        assert_eq!(Transform::translate_y(40.0).to_css(), "translateY(40px)");
        assert_eq!(
            Transform::translate(-40.0, 0.0).to_css(),
            "translateX(-40px)"
        );
        assert_eq!(
            Transform::translate(3.0, -2.5).to_css(),
            "translate(3px, -2.5px)"
        );
        assert_eq!(
            Transform::translate_y(60.0).with_rotate_x(40.0).to_css(),
            "translateY(60px) rotateX(40deg)"
        );
        assert_eq!(Transform::scale_x(0.5).to_css(), "scaleX(0.5)");
        assert_eq!(
            Transform::identity().with_uniform_scale(1.02).to_css(),
            "scale(1.02)"
        );
    }
}
