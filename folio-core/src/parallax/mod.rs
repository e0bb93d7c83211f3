//! # Parallax 模块
//!
//! 滚动联动效果。与入场效果不同，这里的数值随滚动位置连续变化：
//!
//! - [`scrub`]：滚动位置到数值的纯函数
//! - [`ParallaxController`]：管理所有注册目标，负责平滑与注销
//! - [`SeparatorDrawIn`]：分隔线的一次性绘制
//! - [`presets`]：站点各区块使用的参数

mod controller;
mod draw_in;
mod scrub;

pub use controller::{ParallaxController, ParallaxTrack, Smoothing, TrackId};
pub use draw_in::SeparatorDrawIn;
pub use scrub::{ScrollWindow, scrub};

/// 站点使用的视差参数
pub mod presets {
    use super::{ParallaxTrack, ScrollWindow, Smoothing};

    /// 头像：移动得慢，显得更远
    pub fn about_image(window: ScrollWindow) -> ParallaxTrack {
        ParallaxTrack::new(window, 60.0, -30.0).with_smoothing(Smoothing::Lag(1.0))
    }

    /// 简介文字：移动距离小，平滑更重
    pub fn about_info(window: ScrollWindow) -> ParallaxTrack {
        ParallaxTrack::new(window, 30.0, -15.0).with_smoothing(Smoothing::Lag(1.5))
    }

    /// 时间线卡片：越靠后起始偏移越大
    pub fn timeline_card(index: usize, window: ScrollWindow) -> ParallaxTrack {
        ParallaxTrack::new(window, 40.0 + 10.0 * index as f32, -20.0)
            .with_smoothing(Smoothing::Lag(1.2))
    }

}
