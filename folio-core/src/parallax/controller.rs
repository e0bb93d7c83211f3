//! 视差控制器
//!
//! 管理所有注册的滚动联动目标。控制器只负责数值：
//! 宿主在滚动时调用 `set_scroll`，每帧调用 `step`，再把 `output` 写回元素。

use std::collections::HashMap;

use super::{ScrollWindow, SeparatorDrawIn, scrub};
use crate::motion::Transform;

/// 平滑到剩余误差 e^-4（约 2%）所用的时间常数个数
const LAG_TIME_CONSTANTS: f32 = 4.0;
/// 误差小于此值（px）时直接对齐目标
const SETTLE_EPSILON: f32 = 0.01;

/// 目标 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub u64);

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "track#{}", self.0)
    }
}

/// 平滑方式
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Smoothing {
    /// 直接跟随滚动
    #[default]
    Immediate,
    /// 约在给定秒数内追上滚动位置，不同的值产生不同的景深
    Lag(f32),
}

impl Smoothing {
    /// 一帧内向目标靠近的比例
    fn factor(&self, dt: f32) -> f32 {
        match *self {
            Smoothing::Immediate => 1.0,
            Smoothing::Lag(secs) if secs <= 0.0 => 1.0,
            Smoothing::Lag(secs) => 1.0 - (-dt.max(0.0) * LAG_TIME_CONSTANTS / secs).exp(),
        }
    }
}

/// 纵向视差目标
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxTrack {
    pub window: ScrollWindow,
    /// 窗口开始时的纵向偏移（px）
    pub from: f32,
    /// 窗口结束时的纵向偏移（px）
    pub to: f32,
    pub smoothing: Smoothing,
}

impl ParallaxTrack {
    pub fn new(window: ScrollWindow, from: f32, to: f32) -> Self {
        Self {
            window,
            from,
            to,
            smoothing: Smoothing::Immediate,
        }
    }

    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// 给定滚动位置下的目标值
    pub fn target_at(&self, scroll: f32) -> f32 {
        scrub(
            scroll,
            self.window.start,
            self.window.end,
            self.from,
            self.to,
        )
    }
}

#[derive(Debug, Clone)]
struct ScrubState {
    track: ParallaxTrack,
    current: f32,
    target: f32,
}

#[derive(Debug, Clone)]
enum Entry {
    Scrub(ScrubState),
    DrawIn(SeparatorDrawIn),
}

/// 视差控制器
#[derive(Debug, Clone)]
pub struct ParallaxController {
    entries: HashMap<TrackId, Entry>,
    next_id: u64,
    scroll: f32,
    viewport_height: f32,
}

impl Default for ParallaxController {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ParallaxController {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            entries: HashMap::new(),
            next_id: 1,
            scroll: 0.0,
            viewport_height,
        }
    }

    fn next_track_id(&mut self) -> TrackId {
        let id = TrackId(self.next_id);
        self.next_id += 1;
        id
    }

    // ========== 注册 ==========

    /// 注册 scrub 目标，初始值直接取当前滚动位置对应的值
    pub fn register(&mut self, track: ParallaxTrack) -> TrackId {
        let id = self.next_track_id();
        let target = track.target_at(self.scroll);
        self.entries.insert(
            id,
            Entry::Scrub(ScrubState {
                track,
                current: target,
                target,
            }),
        );
        id
    }

    /// 注册分隔线绘制
    pub fn register_draw_in(&mut self, mut draw_in: SeparatorDrawIn) -> TrackId {
        let id = self.next_track_id();
        draw_in.observe_scroll(self.scroll, self.viewport_height);
        self.entries.insert(id, Entry::DrawIn(draw_in));
        id
    }

    /// 注销目标
    pub fn unregister(&mut self, id: TrackId) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// 注销全部目标，返回被注销的 ID（升序），宿主据此还原元素样式
    pub fn revert(&mut self) -> Vec<TrackId> {
        let mut ids: Vec<TrackId> = self.entries.drain().map(|(id, _)| id).collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 全部目标 ID（升序）
    pub fn ids(&self) -> Vec<TrackId> {
        let mut ids: Vec<TrackId> = self.entries.keys().copied().collect();
        ids.sort();
        ids
    }

    // ========== 布局 ==========

    /// 窗口尺寸变化后更新 scrub 窗口
    pub fn update_window(&mut self, id: TrackId, window: ScrollWindow) {
        if let Some(Entry::Scrub(state)) = self.entries.get_mut(&id) {
            state.track.window = window;
            state.target = state.track.target_at(self.scroll);
        }
    }

    /// 窗口尺寸变化后更新分隔线所在区块的位置
    pub fn update_section_top(&mut self, id: TrackId, section_top: f32) {
        if let Some(Entry::DrawIn(draw_in)) = self.entries.get_mut(&id) {
            draw_in.set_section_top(section_top);
            draw_in.observe_scroll(self.scroll, self.viewport_height);
        }
    }

    pub fn set_viewport_height(&mut self, viewport_height: f32) {
        self.viewport_height = viewport_height;
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    // ========== 驱动 ==========

    /// 滚动事件：重新计算所有目标值
    pub fn set_scroll(&mut self, scroll: f32) {
        self.scroll = scroll;
        for entry in self.entries.values_mut() {
            match entry {
                Entry::Scrub(state) => {
                    state.target = state.track.target_at(scroll);
                    if state.track.smoothing == Smoothing::Immediate {
                        state.current = state.target;
                    }
                }
                Entry::DrawIn(draw_in) => {
                    draw_in.observe_scroll(scroll, self.viewport_height);
                }
            }
        }
    }

    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// 推进一帧（秒），返回是否还有目标在运动
    pub fn step(&mut self, dt: f32) -> bool {
        for entry in self.entries.values_mut() {
            match entry {
                Entry::Scrub(state) => {
                    let factor = state.track.smoothing.factor(dt);
                    state.current += (state.target - state.current) * factor;
                    if (state.target - state.current).abs() < SETTLE_EPSILON {
                        state.current = state.target;
                    }
                }
                Entry::DrawIn(draw_in) => {
                    draw_in.step(dt);
                }
            }
        }
        !self.is_settled()
    }

    /// 所有目标都已停在目标值
    pub fn is_settled(&self) -> bool {
        self.entries.values().all(|entry| match entry {
            Entry::Scrub(state) => state.current == state.target,
            Entry::DrawIn(draw_in) => draw_in.is_idle(),
        })
    }

    // ========== 查询 ==========

    /// 当前数值：scrub 目标为纵向偏移，分隔线为横向缩放
    pub fn value(&self, id: TrackId) -> Option<f32> {
        self.entries.get(&id).map(|entry| match entry {
            Entry::Scrub(state) => state.current,
            Entry::DrawIn(draw_in) => draw_in.scale_x(),
        })
    }

    /// 当前应写回元素的变换
    pub fn output(&self, id: TrackId) -> Option<Transform> {
        self.entries.get(&id).map(|entry| match entry {
            Entry::Scrub(state) => Transform::translate_y(state.current),
            Entry::DrawIn(draw_in) => Transform::scale_x(draw_in.scale_x()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(start: f32, end: f32, from: f32, to: f32) -> ParallaxTrack {
        ParallaxTrack::new(ScrollWindow::new(start, end), from, to)
    }

    fn lagged(from: f32, to: f32, lag: f32) -> ParallaxTrack {
        track(0.0, 1000.0, from, to).with_smoothing(Smoothing::Lag(lag))
    }

    #[test]
    fn test_register_uses_current_scroll() {
        let mut controller = ParallaxController::new(800.0);
        controller.set_scroll(500.0);
        let id = controller.register(track(0.0, 1000.0, 60.0, -30.0));
        assert_eq!(controller.value(id), Some(15.0));
    }

    #[test]
    fn test_immediate_follows_scroll() {
        let mut controller = ParallaxController::new(800.0);
        let id = controller.register(track(0.0, 1000.0, 40.0, -20.0));
        controller.set_scroll(1000.0);
        assert_eq!(controller.value(id), Some(-20.0));
        assert!(controller.is_settled());
    }

    #[test]
    fn test_lag_converges() {
        let mut controller = ParallaxController::new(800.0);
        let id = controller.register(lagged(60.0, -30.0, 1.0));
        controller.set_scroll(1000.0);
        assert_eq!(controller.value(id), Some(60.0));

        assert!(controller.step(0.1));
        let value = controller.value(id).unwrap();
        assert!(value < 60.0 && value > -30.0);

        for _ in 0..200 {
            controller.step(1.0 / 60.0);
        }
        assert_eq!(controller.value(id), Some(-30.0));
        assert!(controller.is_settled());
    }

    #[test]
    fn test_different_lags_drift_differently() {
        let mut controller = ParallaxController::new(800.0);
        let fast = controller.register(lagged(0.0, 100.0, 1.0));
        let slow = controller.register(lagged(0.0, 100.0, 1.5));
        controller.set_scroll(1000.0);
        controller.step(0.2);
        assert!(
            controller.value(fast).unwrap() > controller.value(slow).unwrap()
        );
    }

    #[test]
    fn test_unregister_and_revert() {
        let mut controller = ParallaxController::new(800.0);
        let a = controller.register(track(0.0, 1.0, 0.0, 1.0));
        let b = controller.register_draw_in(SeparatorDrawIn::new(5000.0));
        let c = controller.register(track(0.0, 1.0, 0.0, 1.0));

        assert!(controller.unregister(a));
        assert!(!controller.unregister(a));
        assert_eq!(controller.value(a), None);

        assert_eq!(controller.revert(), vec![b, c]);
        assert!(controller.is_empty());
        assert_eq!(controller.output(c), None);
    }

    #[test]
    fn test_draw_in_output() {
        let mut controller = ParallaxController::new(1000.0);
        let id = controller.register_draw_in(SeparatorDrawIn::new(3000.0));
        assert_eq!(controller.output(id), Some(Transform::scale_x(0.0)));
        assert!(controller.is_settled());

        controller.set_scroll(2200.0);
        assert!(!controller.is_settled());
        controller.step(2.0);
        assert_eq!(controller.output(id), Some(Transform::identity()));
    }

    #[test]
    fn test_update_window() {
        let mut controller = ParallaxController::new(800.0);
        let id = controller.register(track(0.0, 1000.0, 0.0, 100.0));
        controller.set_scroll(500.0);
        controller.update_window(id, ScrollWindow::new(500.0, 1500.0));
        controller.step(0.016);
        assert_eq!(controller.value(id), Some(0.0));
    }
}
