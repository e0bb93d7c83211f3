//! # Motion 模块
//!
//! 所有动效共享的基础：缓动、变换、补间、视觉快照。
//!
//! 时间统一由调用方传入（毫秒时间戳或秒为单位的 dt），模块本身不读取任何时钟。

mod easing;
mod style;
mod transform;
mod tween;

pub use easing::{CubicBezier, EasingFunction};
pub use style::{StyleSnapshot, Transition};
pub use transform::{Transform, Vec2};
pub use tween::{Tween, TweenState};

/// 毫秒时间戳（由宿主提供的单调时钟）
pub type Millis = u64;
