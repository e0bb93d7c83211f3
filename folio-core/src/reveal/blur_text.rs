//! 逐词模糊入场

use crate::motion::{StyleSnapshot, Transform, Transition};

const WORD_BLUR_PX: f32 = 12.0;
const WORD_OFFSET_PX: f32 = 20.0;
const WORD_DURATION_MS: u32 = 800;

/// 词的入场来向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlurDirection {
    /// 从上方落下
    Top,
    /// 从下方升起
    #[default]
    Bottom,
}

/// 单个词
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlurWord {
    pub text: String,
    pub index: usize,
    pub delay_ms: u32,
}

/// 逐词模糊入场效果
#[derive(Debug, Clone, PartialEq)]
pub struct BlurText {
    text: String,
    delay_ms: u32,
    direction: BlurDirection,
}

impl BlurText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            delay_ms: 80,
            direction: BlurDirection::default(),
        }
    }

    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn direction(mut self, direction: BlurDirection) -> Self {
        self.direction = direction;
        self
    }

    /// 拆分出的词
    pub fn words(&self) -> Vec<BlurWord> {
        self.text
            .split(' ')
            .enumerate()
            .map(|(index, word)| BlurWord {
                text: word.to_string(),
                index,
                delay_ms: self.delay_ms.saturating_mul(index as u32),
            })
            .collect()
    }

    /// 单个词的快照
    pub fn snapshot(&self, revealed: bool) -> StyleSnapshot {
        if revealed {
            return StyleSnapshot::shown();
        }
        let offset = match self.direction {
            BlurDirection::Top => -WORD_OFFSET_PX,
            BlurDirection::Bottom => WORD_OFFSET_PX,
        };
        StyleSnapshot::hidden()
            .with_transform(Transform::translate_y(offset))
            .with_blur(WORD_BLUR_PX)
    }

    /// 单个词的 inline style
    pub fn word_style(&self, word: &BlurWord, revealed: bool) -> String {
        let transition = Transition::new(WORD_DURATION_MS, word.delay_ms);
        format!(
            "display: inline-block; margin-right: 0.3em; {}",
            self.snapshot(revealed).to_css_with(&transition)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_delays() {
        let blur = BlurText::new("Sobre Mi otra vez").delay(100);
        let delays: Vec<u32> = blur.words().iter().map(|w| w.delay_ms).collect();
        assert_eq!(delays, vec![0, 100, 200, 300]);
    }

    #[test]
    fn test_snapshots() {
        let blur = BlurText::new("Contacto");
        let before = blur.snapshot(false);
        assert_eq!(before.opacity, 0.0);
        assert_eq!(before.blur_px, 12.0);
        assert_eq!(before.transform, Transform::translate_y(20.0));
        assert_eq!(blur.snapshot(true), StyleSnapshot::shown());

        let top = BlurText::new("x").direction(BlurDirection::Top);
        assert_eq!(top.snapshot(false).transform, Transform::translate_y(-20.0));
    }

    #[test]
    fn test_word_style_uses_word_delay() {
        let blur = BlurText::new("a b");
        let words = blur.words();
        assert!(
            blur.word_style(&words[1], true)
                .ends_with("800ms cubic-bezier(0.16, 1, 0.3, 1) 80ms;")
        );
    }
}
