//! 分隔线绘制：区块进入视口一定深度后，横向缩放从 0 播放到 1，只播放一次

use crate::motion::{EasingFunction, Tween};

/// 区块顶部到达视口高度的这个比例时触发
const TRIGGER_LINE: f32 = 0.85;
/// 绘制时长（秒）
const DRAW_DURATION: f32 = 1.2;

/// 一次性分隔线绘制
#[derive(Debug, Clone)]
pub struct SeparatorDrawIn {
    /// 区块在文档中的顶部坐标
    section_top: f32,
    tween: Tween,
    triggered: bool,
}

impl SeparatorDrawIn {
    pub fn new(section_top: f32) -> Self {
        Self {
            section_top,
            tween: Tween::new(0.0, 1.0, DRAW_DURATION).with_easing(EasingFunction::EaseInOutQuad),
            triggered: false,
        }
    }

    /// 更新区块位置（窗口尺寸变化后重新测量）
    pub fn set_section_top(&mut self, section_top: f32) {
        self.section_top = section_top;
    }

    /// 根据滚动位置判断是否触发，返回本次是否刚刚触发
    pub fn observe_scroll(&mut self, scroll: f32, viewport_height: f32) -> bool {
        if self.triggered {
            return false;
        }
        if self.section_top - scroll <= viewport_height * TRIGGER_LINE {
            self.triggered = true;
            return true;
        }
        false
    }

    /// 推进动画，返回是否仍在播放
    pub fn step(&mut self, dt: f32) -> bool {
        if !self.triggered {
            return false;
        }
        self.tween.update(dt)
    }

    /// 当前横向缩放
    pub fn scale_x(&self) -> f32 {
        if self.triggered {
            self.tween.current_value()
        } else {
            0.0
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    /// 已触发且播放完成，或尚未触发（都不需要逐帧推进）
    pub fn is_idle(&self) -> bool {
        !self.triggered || self.tween.is_finished()
    }
}
