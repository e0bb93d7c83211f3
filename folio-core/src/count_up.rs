//! # CountUp 模块
//!
//! 数字计数器：进入视口后在 `duration` 内从 0 数到目标值，三次缓出，每帧取整。

use crate::motion::{EasingFunction, Millis};
use crate::visibility::Threshold;

/// 宿主刷新计数器的间隔
pub const TICK_INTERVAL_MS: Millis = 16;

/// 计数器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountUpState {
    /// 尚未开始
    #[default]
    Idle,
    /// 计数中
    Running { start: Millis },
    /// 已到达目标值
    Done,
}

/// 数字计数器
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: u32,
    duration_ms: Millis,
    state: CountUpState,
    value: u32,
    prefix: String,
    suffix: String,
}

impl CountUp {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            duration_ms: 2000,
            state: CountUpState::Idle,
            value: 0,
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    pub fn duration(mut self, duration_ms: Millis) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// 计数器使用的可见性阈值
    pub fn threshold(&self) -> Threshold {
        Threshold::COUNT_UP
    }

    /// 开始计数
    ///
    /// 只有第一次调用生效，返回是否真的开始了。
    pub fn start(&mut self, now: Millis) -> bool {
        if self.state != CountUpState::Idle {
            return false;
        }
        self.state = CountUpState::Running { start: now };
        true
    }

    /// 推进到 `now`，返回当前显示值
    pub fn tick(&mut self, now: Millis) -> u32 {
        if let CountUpState::Running { start } = self.state {
            let elapsed = now.saturating_sub(start);
            let progress = if self.duration_ms == 0 {
                1.0
            } else {
                (elapsed as f64 / self.duration_ms as f64).min(1.0)
            };

            if progress >= 1.0 {
                self.value = self.target;
                self.state = CountUpState::Done;
            } else {
                let eased = f64::from(EasingFunction::EaseOutCubic.apply(progress as f32));
                let next = (eased * f64::from(self.target)).round() as u32;
                // 浮点误差不允许回退
                self.value = next.clamp(self.value, self.target);
            }
        }
        self.value
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn state(&self) -> CountUpState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, CountUpState::Running { .. })
    }

    pub fn is_done(&self) -> bool {
        self.state == CountUpState::Done
    }

    /// 带前后缀的显示文本
    pub fn display(&self) -> String {
        format!("{}{}{}", self.prefix, self.value, self.suffix)
    }
}
