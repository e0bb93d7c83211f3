//! # Pointer 模块
//!
//! 跟随指针的两个效果，不依赖可见性：
//! - [`Magnet`]：元素朝指针方向偏移
//! - [`TiltCard`]：3D 倾斜加可选的高光
//!
//! 两者都是纯函数：输入元素矩形和指针位置，输出变换。

use crate::motion::{Transform, Vec2};

/// 元素在视口中的矩形（`getBoundingClientRect` 的结果）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// 指针在矩形内的归一化位置，两个轴都限制在 0.0 - 1.0
    ///
    /// 宽或高为 0 时该轴取中心。
    pub fn normalize(&self, pointer: Vec2) -> Vec2 {
        let axis = |offset: f32, size: f32| {
            if size > 0.0 {
                (offset / size).clamp(0.0, 1.0)
            } else {
                0.5
            }
        };
        Vec2::new(
            axis(pointer.x - self.left, self.width),
            axis(pointer.y - self.top, self.height),
        )
    }
}

/// 磁吸效果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnet {
    /// 偏移系数
    pub strength: f32,
    /// 禁用时始终不偏移
    pub disabled: bool,
}

impl Default for Magnet {
    fn default() -> Self {
        Self {
            strength: 0.3,
            disabled: false,
        }
    }
}

impl Magnet {
    pub fn new(strength: f32) -> Self {
        Self {
            strength,
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// 指针移动时的偏移
    pub fn on_move(&self, rect: Rect, pointer: Vec2) -> Vec2 {
        if self.disabled {
            return Vec2::zero();
        }
        (pointer - rect.center()).scaled(self.strength)
    }

    /// 指针离开时的偏移
    pub fn on_leave(&self) -> Vec2 {
        Vec2::zero()
    }

    /// 偏移对应的 inline style
    pub fn style(offset: Vec2) -> String {
        format!(
            "display: inline-block; transform: translate({}px, {}px); \
             transition: transform 300ms cubic-bezier(0.16, 1, 0.3, 1);",
            offset.x, offset.y
        )
    }
}

/// 高光
#[derive(Debug, Clone, PartialEq)]
pub struct Glare {
    /// 指针位置（百分比）
    pub x_pct: f32,
    pub y_pct: f32,
    /// 主题色
    pub color: String,
}

impl Glare {
    pub fn to_css(&self) -> String {
        format!(
            "background: radial-gradient(circle at {}% {}%, {}, transparent 60%);",
            self.x_pct, self.y_pct, self.color
        )
    }
}

/// 倾斜状态
#[derive(Debug, Clone, PartialEq)]
pub struct TiltState {
    pub transform: Transform,
    pub glare: Option<Glare>,
}

impl TiltState {
    /// 复位状态
    pub fn neutral() -> Self {
        Self {
            transform: Transform::identity(),
            glare: None,
        }
    }

    /// 卡片的 inline style
    pub fn style(&self) -> String {
        let transform = if self.transform.is_identity() {
            "perspective(1000px) rotateX(0deg) rotateY(0deg) scale(1)".to_string()
        } else {
            format!("perspective(1000px) {}", self.transform.to_css())
        };
        format!(
            "transform: {transform}; transition: transform 400ms cubic-bezier(0.16, 1, 0.3, 1); \
             position: relative; overflow: hidden;"
        )
    }

    /// 高光层的 inline style
    pub fn glare_style(&self) -> String {
        let background = self.glare.as_ref().map(Glare::to_css).unwrap_or_default();
        format!(
            "{background} position: absolute; inset: 0; pointer-events: none; \
             border-radius: inherit;"
        )
    }
}

impl Default for TiltState {
    fn default() -> Self {
        Self::neutral()
    }
}

/// 3D 倾斜卡片
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltCard {
    /// 最大倾斜角度（度），角度与指针到中心的距离成正比
    pub max_tilt: f32,
    /// 悬停时的缩放
    pub scale: f32,
    /// 是否绘制高光
    pub glare: bool,
}

impl Default for TiltCard {
    fn default() -> Self {
        Self {
            max_tilt: 10.0,
            scale: 1.02,
            glare: true,
        }
    }
}

impl TiltCard {
    pub fn new(max_tilt: f32, scale: f32) -> Self {
        Self {
            max_tilt,
            scale,
            glare: true,
        }
    }

    pub fn glare(mut self, glare: bool) -> Self {
        self.glare = glare;
        self
    }

    /// 指针移动时的状态
    pub fn on_move(&self, rect: Rect, pointer: Vec2, glare_color: &str) -> TiltState {
        let pos = rect.normalize(pointer);
        let rotate_x = (0.5 - pos.y) * self.max_tilt;
        let rotate_y = (pos.x - 0.5) * self.max_tilt;

        let transform = Transform::identity()
            .with_rotate_x(rotate_x)
            .with_rotate_y(rotate_y)
            .with_uniform_scale(self.scale);

        let glare = self.glare.then(|| Glare {
            x_pct: pos.x * 100.0,
            y_pct: pos.y * 100.0,
            color: glare_color.to_string(),
        });

        TiltState { transform, glare }
    }

    /// 指针离开时的状态
    pub fn on_leave(&self) -> TiltState {
        TiltState::neutral()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnet_offset() {
        let magnet = Magnet::new(0.5);
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        let offset = magnet.on_move(rect, Vec2::new(70.0, 10.0));
        assert_eq!(offset, Vec2::new(10.0, -5.0));
        assert_eq!(magnet.on_leave(), Vec2::zero());
    }

    #[test]
    fn test_magnet_disabled() {
        let magnet = Magnet::new(0.5).disabled(true);
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        assert_eq!(magnet.on_move(rect, Vec2::new(90.0, 30.0)), Vec2::zero());
    }

    #[test]
    fn test_tilt_center_is_flat() {
        let tilt = TiltCard::default();
        let rect = Rect::new(10.0, 10.0, 200.0, 100.0);
        let state = tilt.on_move(rect, Vec2::new(110.0, 60.0), "red");
        assert_eq!(state.transform.rotate_x, 0.0);
        assert_eq!(state.transform.rotate_y, 0.0);
        assert_eq!(state.transform.scale, Vec2::new(1.02, 1.02));
        let glare = state.glare.unwrap();
        assert_eq!((glare.x_pct, glare.y_pct), (50.0, 50.0));
    }

    #[test]
    fn test_tilt_corner_is_capped() {
        let tilt = TiltCard::new(6.0, 1.01);
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        // 超出矩形的指针被限制在边缘
        let state = tilt.on_move(rect, Vec2::new(500.0, -500.0), "red");
        assert_eq!(state.transform.rotate_x, 3.0);
        assert_eq!(state.transform.rotate_y, 3.0);
    }

    #[test]
    fn test_tilt_leave_resets() {
        let tilt = TiltCard::default();
        let state = tilt.on_leave();
        assert!(state.transform.is_identity());
        assert!(state.glare.is_none());
        let style = state.style();
        assert!(style.contains("rotateX(0deg) rotateY(0deg) scale(1)"));
    }

    #[test]
    fn test_glare_css() {
        let tilt = TiltCard::default();
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let state = tilt.on_move(rect, Vec2::new(25.0, 75.0), "rgba(1, 2, 3, 0.15)");
        assert_eq!(
            state.glare.unwrap().to_css(),
            "background: radial-gradient(circle at 25% 75%, rgba(1, 2, 3, 0.15), transparent 60%);"
        );
        let plain = tilt.glare(false);
        let no_glare = plain.on_move(rect, Vec2::new(25.0, 75.0), "red");
        assert!(no_glare.glare.is_none());
    }
}
