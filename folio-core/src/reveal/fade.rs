//! 整块淡入/滑入/模糊入场

use super::{Direction, RevealConfig};
use crate::motion::{StyleSnapshot, Transition};

/// 模糊入场时的初始模糊半径
const FADE_BLUR_PX: f32 = 8.0;

/// 整块入场效果
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FadeReveal {
    pub config: RevealConfig,
}

impl FadeReveal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.config.delay_ms = delay_ms;
        self
    }

    pub fn duration(mut self, duration_ms: u32) -> Self {
        self.config.duration_ms = duration_ms;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.config.direction = direction;
        self
    }

    pub fn distance(mut self, distance: f32) -> Self {
        self.config.distance = distance;
        self
    }

    pub fn blur(mut self, blur: bool) -> Self {
        self.config.blur = blur;
        self
    }

    /// 给定入场状态下的快照
    pub fn snapshot(&self, revealed: bool) -> StyleSnapshot {
        if revealed {
            StyleSnapshot::shown()
        } else {
            self.config.hidden_snapshot(FADE_BLUR_PX)
        }
    }

    pub fn transition(&self) -> Transition {
        Transition::new(self.config.duration_ms, self.config.delay_ms)
    }

    /// 完整的 inline style
    pub fn style(&self, revealed: bool) -> String {
        self.snapshot(revealed).to_css_with(&self.transition())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Transform;

    #[test]
    fn test_default_snapshots() {
        let fade = FadeReveal::new();
        let before = fade.snapshot(false);
        assert_eq!(before.opacity, 0.0);
        assert_eq!(before.transform, Transform::translate_y(40.0));
        assert_eq!(before.blur_px, 0.0);
        assert_eq!(fade.snapshot(true), StyleSnapshot::shown());
    }

    #[test]
    fn test_blur_left() {
        let fade = FadeReveal::new()
            .direction(Direction::Left)
            .blur(true)
            .delay(200);
        let before = fade.snapshot(false);
        assert_eq!(before.transform, Transform::translate(40.0, 0.0));
        assert_eq!(before.blur_px, 8.0);
        assert_eq!(
            fade.style(false),
            "opacity: 0; transform: translateX(40px); filter: blur(8px); \
             transition: all 700ms cubic-bezier(0.16, 1, 0.3, 1) 200ms;"
        );
        assert_eq!(
            fade.style(true),
            "opacity: 1; transform: none; filter: none; \
             transition: all 700ms cubic-bezier(0.16, 1, 0.3, 1) 200ms;"
        );
    }

    #[test]
    fn test_direction_none() {
        let fade = FadeReveal::new().direction(Direction::None);
        assert!(fade.snapshot(false).transform.is_identity());
    }
}
