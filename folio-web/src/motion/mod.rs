//! # Motion 组件
//!
//! core 中动效模型的 Dioxus 外壳：组件只负责挂载、计时和把样式写回 DOM。

mod counter;
mod pointer;
mod reveal;
mod scroll;
mod stagger;

pub use counter::{CountUpNumber, RotatingText};
pub use pointer::{Magnet, TiltCard};
pub use reveal::{BlurText, FadeContent, SplitText};
pub use scroll::ScrollEffects;
pub use stagger::{StaggerItem, StaggerList};
