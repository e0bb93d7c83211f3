//! # Folio Core
//!
//! 作品集站点的核心逻辑库。
//!
//! ## 架构概述
//!
//! `folio-core` 是纯逻辑核心，不依赖 DOM、存储或网络。
//! 时间、滚动位置、可见比例都由宿主传入，输出是数值或 inline style：
//!
//! ```text
//! Host (folio-web)                       Core
//!   │                                      │
//!   │── VisibilitySample / scroll / now ──►│
//!   │                                      │ report() / set_scroll() / tick()
//!   │◄────────── StyleSnapshot / f32 ──────│
//!   │                                      │
//! ```
//!
//! ## 模块结构
//!
//! - [`visibility`]：一次性可见性触发器
//! - [`reveal`]：入场效果（淡入、逐字、逐词、交错）
//! - [`count_up`] / [`rotator`]：计数器与轮播文本
//! - [`pointer`]：磁吸与 3D 倾斜
//! - [`parallax`]：滚动联动
//! - [`preferences`]：语言 / 主题上下文
//! - [`i18n`] / [`content`]：翻译表与站点内容
//! - [`contact`] / [`nav`]：联系表单与导航栏
//! - [`config`]：站点配置
//! - [`error`]：错误类型定义

pub mod config;
pub mod contact;
pub mod content;
pub mod count_up;
pub mod error;
pub mod i18n;
pub mod motion;
pub mod nav;
pub mod parallax;
pub mod pointer;
pub mod preferences;
pub mod reveal;
pub mod rotator;
pub mod visibility;

// 重导出核心类型
pub use config::SiteConfig;
pub use contact::{ContactForm, ContactState, FormStatus, Submission, SubmissionResponse};
pub use content::{ImageSource, Localized, PROFILE, Profile};
pub use count_up::CountUp;
pub use error::{ConfigError, ContactError, MotionError, StorageError};
pub use i18n::Translations;
pub use motion::{EasingFunction, Millis, StyleSnapshot, Transform, Transition, Vec2};
pub use parallax::{ParallaxController, ParallaxTrack, ScrollWindow, Smoothing, TrackId};
pub use pointer::{Magnet, Rect, TiltCard, TiltState};
pub use preferences::{DocumentRoot, Locale, PreferenceStore, Preferences, Theme};
pub use reveal::{Direction, FadeReveal, Reveal, RevealConfig};
pub use rotator::Rotator;
pub use visibility::{Threshold, VisibilitySample, VisibilitySource, VisibilityTrigger};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_accessible() {
        // 验证所有公共类型都可以正常使用
        let _fade = FadeReveal::default();
        let _count = CountUp::new(10);
        let _rotator = Rotator::new(["a"], 3000);
        let _controller = ParallaxController::new(800.0);
        let _config = SiteConfig::default();
        let _t = Translations::for_locale(Locale::Es);
        let _sample = VisibilitySample::outside();
        assert_eq!(PROFILE.first_name(), "Jorman");
    }
}
