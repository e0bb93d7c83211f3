//! # Rotator 模块
//!
//! 轮播文本：每个间隔先进入退场状态，400ms 后切换到下一条并入场。
//!
//! ```text
//! t = k·interval          标记 transitioning（退场）
//! t = k·interval + 400    index = (index + 1) % len，清除 transitioning（入场）
//! ```
//!
//! 状态只由截止时间驱动，宿主按 [`Rotator::next_deadline`] 休眠后调用
//! [`Rotator::tick`] 即可，不依赖任何计时器语义。

use crate::error::MotionError;
use crate::motion::{Millis, StyleSnapshot, Transform, Transition};

/// 退场到切换之间的固定时长
pub const TRANSITION_MS: Millis = 400;

/// 允许的最小间隔：退场与入场各占一个过渡时长
pub const MIN_INTERVAL_MS: Millis = TRANSITION_MS * 2;

/// 轮播文本
#[derive(Debug, Clone, PartialEq)]
pub struct Rotator {
    texts: Vec<String>,
    interval_ms: Millis,
    origin: Millis,
    index: usize,
    /// 已完成的切换次数
    cycles: u64,
    transitioning: bool,
}

impl Rotator {
    /// 创建轮播
    ///
    /// 文本列表不能为空，间隔不能短于 [`MIN_INTERVAL_MS`]。
    pub fn new<I, S>(texts: I, interval_ms: Millis) -> Result<Self, MotionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let texts: Vec<String> = texts.into_iter().map(Into::into).collect();
        if texts.is_empty() {
            return Err(MotionError::EmptyRotator);
        }
        if interval_ms < MIN_INTERVAL_MS {
            return Err(MotionError::IntervalTooShort {
                interval_ms,
                min_ms: MIN_INTERVAL_MS,
            });
        }
        Ok(Self {
            texts,
            interval_ms,
            origin: 0,
            index: 0,
            cycles: 0,
            transitioning: false,
        })
    }

    /// 设置计时起点（挂载时刻）
    pub fn starting_at(mut self, origin: Millis) -> Self {
        self.origin = origin;
        self
    }

    fn exit_at(&self, cycle: u64) -> Millis {
        self.origin + self.interval_ms * cycle
    }

    /// 下一个需要处理的时刻
    pub fn next_deadline(&self) -> Millis {
        let exit = self.exit_at(self.cycles + 1);
        if self.transitioning {
            exit + TRANSITION_MS
        } else {
            exit
        }
    }

    /// 处理所有已到期的事件，返回状态是否变化
    pub fn tick(&mut self, now: Millis) -> bool {
        let mut changed = false;
        while now >= self.next_deadline() {
            if self.transitioning {
                self.index = (self.index + 1) % self.texts.len();
                self.cycles += 1;
                self.transitioning = false;
            } else {
                self.transitioning = true;
            }
            changed = true;
        }
        changed
    }

    /// 当前显示的文本
    pub fn current(&self) -> &str {
        &self.texts[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn interval_ms(&self) -> Millis {
        self.interval_ms
    }

    /// 当前快照：退场时淡出、上移、模糊
    pub fn snapshot(&self) -> StyleSnapshot {
        if self.transitioning {
            StyleSnapshot::hidden()
                .with_transform(Transform::translate_y(-20.0))
                .with_blur(4.0)
        } else {
            StyleSnapshot::shown()
        }
    }

    /// 当前 inline style
    pub fn style(&self) -> String {
        let transition = Transition::new(TRANSITION_MS as u32, 0);
        format!(
            "display: inline-block; {}",
            self.snapshot().to_css_with(&transition)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Rotator {
        Rotator::new(["A", "B", "C"], 3000).unwrap()
    }

    #[test]
    fn test_initial_text() {
        let mut rotator = abc();
        rotator.tick(0);
        assert_eq!(rotator.current(), "A");
        assert!(!rotator.is_transitioning());
        assert_eq!(rotator.next_deadline(), 3000);
    }

    #[test]
    fn test_cycle_sequence() {
        let mut rotator = abc();

        assert!(!rotator.tick(2999));
        assert!(rotator.tick(3000));
        assert!(rotator.is_transitioning());
        assert_eq!(rotator.current(), "A");

        // 过渡窗口内仍标记为 transitioning
        assert!(!rotator.tick(3399));
        assert!(rotator.is_transitioning());

        assert!(rotator.tick(3400));
        assert!(!rotator.is_transitioning());
        assert_eq!(rotator.current(), "B");

        rotator.tick(6400);
        assert_eq!(rotator.current(), "C");
        rotator.tick(9400);
        assert_eq!(rotator.current(), "A");
    }

    #[test]
    fn test_late_tick_catches_up() {
        let mut rotator = abc();
        // 一次性跳过两个完整周期
        rotator.tick(6500);
        assert_eq!(rotator.current(), "C");
        assert!(!rotator.is_transitioning());
    }

    #[test]
    fn test_origin_offset() {
        let mut rotator = abc().starting_at(1000);
        assert!(!rotator.tick(3999));
        assert!(rotator.tick(4000));
        assert_eq!(rotator.next_deadline(), 4400);
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            Rotator::new(Vec::<String>::new(), 3000),
            Err(MotionError::EmptyRotator)
        );
        assert_eq!(
            Rotator::new(["A"], 500),
            Err(MotionError::IntervalTooShort {
                interval_ms: 500,
                min_ms: 800
            })
        );
        assert!(Rotator::new(["A"], 800).is_ok());
    }

    #[test]
    fn test_exit_snapshot() {
        let mut rotator = abc();
        rotator.tick(3000);
        let snap = rotator.snapshot();
        assert_eq!(snap.opacity, 0.0);
        assert_eq!(snap.blur_px, 4.0);
        assert_eq!(snap.transform, Transform::translate_y(-20.0));
    }
}
