//! IntersectionObserver 实现的可见性来源

use std::rc::Rc;

use folio_core::{Threshold, VisibilitySample, VisibilitySource};
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// 采样回调
pub type SampleHandler = Rc<dyn Fn(VisibilitySample)>;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// 观察单个元素的 IntersectionObserver
///
/// 回调闭包跟随结构体存活到 drop，`disconnect` 只停止观察，
/// 因此回调里断开观察不会释放正在执行的闭包。
pub struct DomObserver {
    element: Element,
    handler: SampleHandler,
    observer: Option<IntersectionObserver>,
    callback: Option<ObserverCallback>,
}

impl DomObserver {
    pub fn new(element: Element, handler: SampleHandler) -> Self {
        Self {
            element,
            handler,
            observer: None,
            callback: None,
        }
    }

    /// 浏览器是否接受了观察请求
    pub fn is_connected(&self) -> bool {
        self.observer.is_some()
    }
}

impl VisibilitySource for DomObserver {
    fn connect(&mut self, threshold: Threshold) {
        let handler = Rc::clone(&self.handler);
        let callback: ObserverCallback = Closure::new(move |entries: js_sys::Array, _| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                handler(VisibilitySample::new(
                    entry.intersection_ratio() as f32,
                    entry.is_intersecting(),
                ));
            }
        });

        let options = IntersectionObserverInit::new();
        let ratio = JsValue::from_f64(f64::from(threshold.value()));
        options.set_threshold(&ratio);
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(&self.element);
                self.observer = Some(observer);
                self.callback = Some(callback);
            }
            Err(e) => warn!(error = ?e, "IntersectionObserver unavailable"),
        }
    }

    fn disconnect(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

impl Drop for DomObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}
