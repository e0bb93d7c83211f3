//! # Tween 模块
//!
//! 单个 f32 值在时间轴上的补间。
//!
//! 核心设计：补间只关注数值随时间的变化，不假设它驱动的是哪个元素、哪个属性。

use super::EasingFunction;

/// 补间状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TweenState {
    /// 等待开始（有延迟）
    #[default]
    Pending,
    /// 正在播放
    Playing,
    /// 已完成
    Completed,
}

impl TweenState {
    /// 是否为活跃状态（需要更新）
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Playing)
    }
}

/// 补间实例
///
/// 管理单个 f32 值从 `from` 到 `to` 在 `duration` 秒内的变化。
#[derive(Debug, Clone)]
pub struct Tween {
    /// 起始值
    pub from: f32,
    /// 目标值
    pub to: f32,
    /// 时长（秒）
    pub duration: f32,
    /// 缓动函数
    pub easing: EasingFunction,
    /// 延迟启动（秒）
    pub delay: f32,
    /// 当前状态
    pub state: TweenState,
    /// 当前进度（0.0 - 1.0，已应用缓动）
    pub progress: f32,
    elapsed: f32,
}

impl Tween {
    /// 创建新的补间
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        let state = if duration <= 0.0 {
            TweenState::Completed
        } else {
            TweenState::Pending
        };

        Self {
            from,
            to,
            duration: duration.max(0.0),
            easing: EasingFunction::default(),
            delay: 0.0,
            state,
            progress: if duration <= 0.0 { 1.0 } else { 0.0 },
            elapsed: 0.0,
        }
    }

    /// 设置缓动函数
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// 设置延迟
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// 推进补间
    ///
    /// # 返回
    /// - `true`: 仍在进行中
    /// - `false`: 已结束
    pub fn update(&mut self, dt: f32) -> bool {
        match self.state {
            TweenState::Pending => {
                self.elapsed += dt;
                if self.elapsed >= self.delay {
                    self.state = TweenState::Playing;
                    self.elapsed -= self.delay;
                    self.update_playing()
                } else {
                    true
                }
            }
            TweenState::Playing => {
                self.elapsed += dt;
                self.update_playing()
            }
            TweenState::Completed => false,
        }
    }

    fn update_playing(&mut self) -> bool {
        let raw_progress = self.elapsed / self.duration;
        if raw_progress >= 1.0 {
            self.progress = 1.0;
            self.state = TweenState::Completed;
            false
        } else {
            self.progress = self.easing.apply(raw_progress);
            true
        }
    }

    /// 强制完成
    pub fn finish(&mut self) {
        self.progress = 1.0;
        self.state = TweenState::Completed;
    }

    /// 获取当前值
    pub fn current_value(&self) -> f32 {
        self.from + (self.to - self.from) * self.progress
    }

    /// 是否已结束
    pub fn is_finished(&self) -> bool {
        self.state == TweenState::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_tween() -> Tween {
        Tween::new(0.0, 1.0, 1.0).with_easing(EasingFunction::Linear)
    }

    #[test]
    fn test_tween_creation() {
        let tween = create_test_tween();
        assert_eq!(tween.state, TweenState::Pending);
        assert_eq!(tween.progress, 0.0);
        assert_eq!(tween.current_value(), 0.0);
    }

    #[test]
    fn test_tween_update() {
        let mut tween = create_test_tween();

        assert!(tween.update(0.1));
        assert_eq!(tween.state, TweenState::Playing);

        assert!(tween.update(0.4));
        let value = tween.current_value();
        assert!(value > 0.0 && value < 1.0);

        // 完成
        assert!(!tween.update(0.6));
        assert_eq!(tween.state, TweenState::Completed);
        assert_eq!(tween.current_value(), 1.0);
    }

    #[test]
    fn test_tween_with_delay() {
        let mut tween = create_test_tween().with_delay(0.5);

        // 延迟期间
        assert!(tween.update(0.3));
        assert_eq!(tween.state, TweenState::Pending);

        // 延迟结束，进入播放
        assert!(tween.update(0.3));
        assert_eq!(tween.state, TweenState::Playing);
    }

    #[test]
    fn test_zero_duration() {
        let tween = Tween::new(0.0, 1.0, 0.0);
        assert_eq!(tween.state, TweenState::Completed);
        assert_eq!(tween.current_value(), 1.0);
    }

    #[test]
    fn test_finish() {
        let mut tween = create_test_tween();
        tween.update(0.2);
        tween.finish();
        assert!(tween.is_finished());
        assert_eq!(tween.current_value(), 1.0);
    }
}
