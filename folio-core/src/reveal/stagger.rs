//! 列表逐项交错入场
//!
//! 整个列表共用一个可见性触发器，触发后每一项按自己的延迟开始过渡。

use super::{Direction, RevealConfig};
use crate::motion::{StyleSnapshot, Transition};
use crate::visibility::Threshold;

/// 交错入场效果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    /// 相邻两项之间的延迟（毫秒）
    pub stagger_delay_ms: u32,
    config: RevealConfig,
}

impl Default for Stagger {
    fn default() -> Self {
        Self {
            stagger_delay_ms: 100,
            config: RevealConfig {
                duration_ms: 600,
                distance: 30.0,
                ..RevealConfig::default()
            },
        }
    }
}

impl Stagger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stagger_delay(mut self, delay_ms: u32) -> Self {
        self.stagger_delay_ms = delay_ms;
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

    /// 列表使用的触发阈值
    pub fn threshold(&self) -> Threshold {
        Threshold::STAGGER
    }

    /// 第 `index` 项的延迟
    pub fn item_delay(&self, index: usize) -> u32 {
        self.stagger_delay_ms.saturating_mul(index as u32)
    }

    pub fn snapshot(&self, revealed: bool) -> StyleSnapshot {
        if revealed {
            StyleSnapshot::shown()
        } else {
            self.config.hidden_snapshot(0.0)
        }
    }

    /// 第 `index` 项的 inline style
    pub fn item_style(&self, index: usize, revealed: bool) -> String {
        let transition = Transition::new(self.config.duration_ms, self.item_delay(index));
        self.snapshot(revealed).to_css_with(&transition)
    }
}
