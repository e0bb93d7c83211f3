use folio_core::Rect;
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

/// 当前纵向滚动距离
pub fn scroll_y() -> f32 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

/// 视口高度
pub fn viewport_height() -> f32 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0) as f32
}

/// 元素相对文档顶部的位置
///
/// 沿 offsetParent 链累加 offsetTop，不受元素自身 transform 的影响。
pub fn document_top(element: &HtmlElement) -> f32 {
    let mut top = 0.0;
    let mut current = Some(element.clone());
    while let Some(el) = current {
        top += el.offset_top() as f32;
        current = el
            .offset_parent()
            .and_then(|parent| parent.dyn_into::<HtmlElement>().ok());
    }
    top
}

/// `getBoundingClientRect` 转为 [`Rect`]
pub fn element_rect(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

/// 选择器匹配的全部 HTML 元素，按文档顺序
pub fn query_all(selector: &str) -> Vec<HtmlElement> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            warn!(error = ?e, selector, "invalid selector");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// 平滑滚动到 id 为 `anchor` 的元素，元素不存在时什么也不做
pub fn scroll_to_anchor(anchor: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(anchor))
    else {
        warn!(anchor, "scroll target not found");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// 用浏览器打开链接（mailto 交给邮件客户端）
pub fn open_url(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_self") {
        warn!(error = ?e, "failed to open url");
    }
}
