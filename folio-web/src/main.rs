//! # folio-web
//!
//! 作品集站点的浏览器宿主。
//!
//! 所有状态和动效计算都在 `folio-core`，这里负责：
//! - 把偏好、可见性、计时接到浏览器 API（[`platform`]）
//! - 用 Dioxus 组件渲染页面（[`motion`]、[`sections`]）

mod app;
mod contact_client;
mod hooks;
mod motion;
mod platform;
mod sections;

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(app::App);
}
