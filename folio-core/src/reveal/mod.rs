//! # Reveal 模块
//!
//! 一次性入场效果：元素先以"入场前"快照渲染，可见性触发后过渡到"入场后"快照。
//!
//! ## 变体
//!
//! - [`FadeReveal`]：整块淡入/滑入/模糊
//! - [`SplitText`]：逐字符入场
//! - [`BlurText`]：逐词模糊入场
//! - [`Stagger`]：列表逐项交错入场
//!
//! 计数器和轮播文本分别在 [`crate::count_up`] 与 [`crate::rotator`]。

mod blur_text;
mod fade;
mod split_text;
mod stagger;

pub use blur_text::{BlurDirection, BlurText, BlurWord};
pub use fade::FadeReveal;
pub use split_text::{CharCell, CompletionTimer, SplitText, WordGroup};
pub use stagger::Stagger;

use crate::motion::{StyleSnapshot, Transform};

/// 入场方向
///
/// 方向描述元素"往哪里走"，因此 `Up` 的入场前位置在下方。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
    None,
}

impl Direction {
    /// 入场前的偏移
    pub fn offset(&self, distance: f32) -> Transform {
        match self {
            Direction::Up => Transform::translate(0.0, distance),
            Direction::Down => Transform::translate(0.0, -distance),
            Direction::Left => Transform::translate(distance, 0.0),
            Direction::Right => Transform::translate(-distance, 0.0),
            Direction::None => Transform::identity(),
        }
    }
}

/// 入场状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Pending,
    Revealed,
}

/// 单个实例的入场状态机
///
/// 只能从 `Pending` 走到 `Revealed`，不支持重播。
#[derive(Debug, Clone, Copy, Default)]
pub struct Reveal {
    phase: RevealPhase,
}

impl Reveal {
    pub fn new() -> Self {
        Self::default()
    }

    /// 标记为已入场
    ///
    /// 返回本次调用是否改变了状态。
    pub fn reveal(&mut self) -> bool {
        let changed = self.phase == RevealPhase::Pending;
        self.phase = RevealPhase::Revealed;
        changed
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == RevealPhase::Revealed
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }
}

/// 通用入场配置
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// 延迟（毫秒）
    pub delay_ms: u32,
    /// 时长（毫秒）
    pub duration_ms: u32,
    /// 方向
    pub direction: Direction,
    /// 偏移距离（px）
    pub distance: f32,
    /// 是否叠加模糊
    pub blur: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            delay_ms: 0,
            duration_ms: 700,
            direction: Direction::Up,
            distance: 40.0,
            blur: false,
        }
    }
}

impl RevealConfig {
    /// 入场前快照
    pub fn hidden_snapshot(&self, blur_px: f32) -> StyleSnapshot {
        let snapshot =
            StyleSnapshot::hidden().with_transform(self.direction.offset(self.distance));
        if self.blur {
            snapshot.with_blur(blur_px)
        } else {
            snapshot
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_is_one_way() {
        let mut reveal = Reveal::new();
        assert_eq!(reveal.phase(), RevealPhase::Pending);
        assert!(reveal.reveal());
        assert!(reveal.is_revealed());
        // 第二次不产生变化
        assert!(!reveal.reveal());
        assert!(reveal.is_revealed());
    }

    #[test]
    fn test_direction_offsets() {
        assert_eq!(Direction::Up.offset(40.0).translate.y, 40.0);
        assert_eq!(Direction::Down.offset(40.0).translate.y, -40.0);
        assert_eq!(Direction::Left.offset(40.0).translate.x, 40.0);
        assert_eq!(Direction::Right.offset(40.0).translate.x, -40.0);
        assert!(Direction::None.offset(40.0).is_identity());
    }
}
