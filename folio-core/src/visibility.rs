//! # Visibility 模块
//!
//! 一次性可见性触发器：元素第一次有足够面积进入视口时翻转为可见，之后永不回退。
//!
//! ## 设计
//!
//! 触发机制通过 [`VisibilitySource`] 抽象：浏览器里是 IntersectionObserver，
//! 测试里是手动上报的假实现。触发器只关心两件事：
//! - 收到的可见比例是否越过阈值
//! - 触发后（或卸载时）立即释放观察
//!
//! ```text
//!            report(ratio >= threshold)
//! Observing ───────────────────────────► Revealed
//!     │                                     (source 已断开)
//!     │ release() / drop
//!     ▼
//! Released
//! ```

use tracing::debug;

/// 可见比例阈值 (0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f32);

impl Threshold {
    /// 大多数入场效果使用的阈值
    pub const DEFAULT: Threshold = Threshold(0.1);
    /// 交错列表使用的阈值（列表较高，越早触发越好）
    pub const STAGGER: Threshold = Threshold(0.05);
    /// 计数器使用的阈值（要求一半进入视口）
    pub const COUNT_UP: Threshold = Threshold(0.5);

    /// 创建阈值，超出范围的值被限制到 0.0 - 1.0
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// 一次可见性采样
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilitySample {
    /// 元素面积在视口内的比例
    pub ratio: f32,
    /// 元素是否与视口相交
    pub intersecting: bool,
}

impl VisibilitySample {
    pub fn new(ratio: f32, intersecting: bool) -> Self {
        Self {
            ratio,
            intersecting,
        }
    }

    /// 完全在视口外
    pub fn outside() -> Self {
        Self::new(0.0, false)
    }

    /// 判断是否满足阈值
    ///
    /// 阈值为 0 时，只要相交即可（与 IntersectionObserver 的语义一致）。
    pub fn meets(&self, threshold: Threshold) -> bool {
        self.intersecting && self.ratio >= threshold.value()
    }
}

/// 可见性来源
///
/// 触发器在构造时调用 `connect`，触发或释放时调用 `disconnect`。
/// 实现者负责把采样通过自己的回调送回触发器。
pub trait VisibilitySource {
    /// 开始观察
    fn connect(&mut self, threshold: Threshold);

    /// 停止观察，可以被重复调用
    fn disconnect(&mut self);
}

/// 触发器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    /// 观察中，尚未可见
    Observing,
    /// 已可见（终态）
    Revealed,
    /// 未可见就被释放（终态）
    Released,
}

/// 一次性可见性触发器
#[derive(Debug)]
pub struct VisibilityTrigger<S: VisibilitySource> {
    source: S,
    threshold: Threshold,
    state: TriggerState,
}

impl<S: VisibilitySource> VisibilityTrigger<S> {
    /// 创建触发器并立即开始观察
    pub fn new(mut source: S, threshold: Threshold) -> Self {
        source.connect(threshold);
        Self {
            source,
            threshold,
            state: TriggerState::Observing,
        }
    }

    /// 上报一次采样
    ///
    /// 只有第一次越过阈值时返回 `true`，同时断开观察。
    pub fn report(&mut self, sample: VisibilitySample) -> bool {
        if self.state != TriggerState::Observing || !sample.meets(self.threshold) {
            return false;
        }
        self.state = TriggerState::Revealed;
        self.source.disconnect();
        debug!(
            ratio = sample.ratio,
            threshold = self.threshold.value(),
            "visibility trigger fired"
        );
        true
    }

    /// 释放观察（卸载时调用）
    pub fn release(&mut self) {
        if self.state == TriggerState::Observing {
            self.state = TriggerState::Released;
            self.source.disconnect();
        }
    }

    /// 是否已经可见
    pub fn is_visible(&self) -> bool {
        self.state == TriggerState::Revealed
    }

    /// 是否仍在观察
    pub fn is_observing(&self) -> bool {
        self.state == TriggerState::Observing
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// 访问底层来源
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: VisibilitySource> Drop for VisibilityTrigger<S> {
    fn drop(&mut self) {
        self.release();
    }
}

/// 手动驱动的来源，用于测试和无浏览器环境
///
/// 只记录连接/断开次数，采样由调用方直接交给触发器。
#[derive(Debug, Default, Clone)]
pub struct ManualSource {
    pub connects: u32,
    pub disconnects: u32,
    pub connected: bool,
    pub last_threshold: Option<Threshold>,
}

impl VisibilitySource for ManualSource {
    fn connect(&mut self, threshold: Threshold) {
        self.connects += 1;
        self.connected = true;
        self.last_threshold = Some(threshold);
    }

    fn disconnect(&mut self) {
        if self.connected {
            self.disconnects += 1;
            self.connected = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_clamp() {
        assert_eq!(Threshold::new(1.5).value(), 1.0);
        assert_eq!(Threshold::new(-0.2).value(), 0.0);
        assert_eq!(Threshold::new(f32::NAN).value(), 0.0);
        assert_eq!(Threshold::default(), Threshold::DEFAULT);
    }

    #[test]
    fn test_connects_on_creation() {
        let trigger = VisibilityTrigger::new(ManualSource::default(), Threshold::COUNT_UP);
        assert!(trigger.is_observing());
        assert!(trigger.source().connected);
        assert_eq!(trigger.source().last_threshold, Some(Threshold::COUNT_UP));
    }

    #[test]
    fn test_fires_once_and_disconnects() {
        let mut trigger = VisibilityTrigger::new(ManualSource::default(), Threshold::DEFAULT);

        // 低于阈值
        assert!(!trigger.report(VisibilitySample::new(0.05, true)));
        assert!(!trigger.is_visible());

        // 越过阈值
        assert!(trigger.report(VisibilitySample::new(0.2, true)));
        assert!(trigger.is_visible());
        assert!(!trigger.source().connected);
        assert_eq!(trigger.source().disconnects, 1);

        // 再次越过阈值不产生新的转换
        assert!(!trigger.report(VisibilitySample::new(1.0, true)));
        // 离开视口也不回退
        assert!(!trigger.report(VisibilitySample::outside()));
        assert!(trigger.is_visible());
        assert_eq!(trigger.source().disconnects, 1);
    }

    #[test]
    fn test_exact_threshold_counts() {
        let mut trigger = VisibilityTrigger::new(ManualSource::default(), Threshold::COUNT_UP);
        assert!(trigger.report(VisibilitySample::new(0.5, true)));
    }

    #[test]
    fn test_zero_threshold_requires_intersection() {
        let mut trigger = VisibilityTrigger::new(ManualSource::default(), Threshold::new(0.0));
        assert!(!trigger.report(VisibilitySample::outside()));
        assert!(trigger.report(VisibilitySample::new(0.0, true)));
    }

    #[test]
    fn test_release_before_visible() {
        let mut trigger = VisibilityTrigger::new(ManualSource::default(), Threshold::DEFAULT);
        trigger.release();
        assert_eq!(trigger.state(), TriggerState::Released);
        assert!(!trigger.source().connected);

        // 释放后忽略采样
        assert!(!trigger.report(VisibilitySample::new(1.0, true)));
        assert!(!trigger.is_visible());

        // 重复释放不会重复断开
        trigger.release();
        assert_eq!(trigger.source().disconnects, 1);
    }
}
