//! # Platform 模块
//!
//! 浏览器 API 的薄封装，core 中的 trait 在这里落地：
//! - [`LocalStore`]：`PreferenceStore` → localStorage
//! - [`HtmlRoot`]：`DocumentRoot` → `<html>` 元素
//! - [`DomObserver`]：`VisibilitySource` → IntersectionObserver

mod clock;
mod document;
mod observer;
mod storage;
mod viewport;

pub use clock::{current_year, now_ms};
pub use document::HtmlRoot;
pub use observer::{DomObserver, SampleHandler};
pub use storage::LocalStore;
pub use viewport::{
    document_top, element_rect, open_url, query_all, scroll_to_anchor, scroll_y, viewport_height,
};
