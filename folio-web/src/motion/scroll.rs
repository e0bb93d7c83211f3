//! 滚动驱动的视差与分隔线绘制
//!
//! 组件本身不渲染任何内容，挂载后接管页面上的目标元素：
//! - 区块分隔线：区块进入视口时横向绘制一次
//! - 关于区块的头像和正文：随区块滚过视口以不同速度错位
//! - 经历时间线的卡片：越靠后的卡片起始偏移越大
//!
//! 目标位置在挂载、窗口尺寸变化和 `main` 尺寸变化时测量，滚动时只读取滚动位置。
//! 卸载时恢复所有元素的原始 transform。

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::parallax::{SeparatorDrawIn, presets};
use folio_core::{ParallaxController, ScrollWindow, TrackId};
use gloo::events::EventListener;
use gloo::render::{AnimationFrame, request_animation_frame};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, ResizeObserver};

use crate::platform::{document_top, query_all, scroll_y, viewport_height};

/// 单帧最长时间（秒），切回标签页时避免一帧跳完
const MAX_FRAME_DT: f32 = 0.05;

/// 目标在文档中的测量方式
enum Measure {
    /// 以外层区块滚过视口的区间作为窗口
    Enclosing(HtmlElement),
    /// 以元素自身滚过视口的区间作为窗口
    Own,
    /// 分隔线：记录外层区块的顶部
    SectionTop(HtmlElement),
}

/// 监听 `main` 尺寸变化（语言切换、展开项目列表等）
struct LayoutObserver {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl Drop for LayoutObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

struct Binding {
    id: TrackId,
    element: HtmlElement,
    measure: Measure,
}

fn window_of(element: &HtmlElement, viewport_height: f32) -> ScrollWindow {
    ScrollWindow::enter_to_exit(
        document_top(element),
        element.offset_height() as f32,
        viewport_height,
    )
}

/// 页面上的全部滚动效果
#[derive(Default)]
struct Scene {
    controller: RefCell<ParallaxController>,
    bindings: RefCell<Vec<Binding>>,
    listeners: RefCell<Vec<EventListener>>,
    layout: RefCell<Option<LayoutObserver>>,
    frame: RefCell<Option<AnimationFrame>>,
    last_frame: Cell<Option<f64>>,
    installed: Cell<bool>,
}

impl Scene {
    fn install(self: &Rc<Self>) {
        if self.installed.replace(true) {
            return;
        }
        let Some(window) = web_sys::window() else {
            warn!("window unavailable, scroll effects disabled");
            return;
        };

        let vh = viewport_height();
        {
            let mut controller = self.controller.borrow_mut();
            controller.set_viewport_height(vh);
            controller.set_scroll(scroll_y());
        }
        self.bind_separators();
        self.bind_about(vh);
        self.bind_timeline(vh);
        debug!(
            targets = self.bindings.borrow().len(),
            "scroll effects installed"
        );

        let on_scroll = Rc::downgrade(self);
        let on_resize = Rc::downgrade(self);
        let mut listeners = self.listeners.borrow_mut();
        listeners.push(EventListener::new(&window, "scroll", move |_| {
            if let Some(scene) = on_scroll.upgrade() {
                scene.on_scroll();
            }
        }));
        listeners.push(EventListener::new(&window, "resize", move |_| {
            if let Some(scene) = on_resize.upgrade() {
                scene.on_resize();
            }
        }));
        drop(listeners);
        self.observe_layout();

        self.apply();
        self.request_frame();
    }

    fn observe_layout(self: &Rc<Self>) {
        let Some(main) = query_all("main").into_iter().next() else {
            return;
        };
        let scene = Rc::downgrade(self);
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |_: js_sys::Array| {
            if let Some(scene) = scene.upgrade() {
                scene.on_layout_change();
            }
        });
        match ResizeObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&main);
                *self.layout.borrow_mut() = Some(LayoutObserver {
                    observer,
                    _callback: callback,
                });
            }
            Err(e) => warn!(error = ?e, "ResizeObserver unavailable"),
        }
    }

    fn bind(&self, id: TrackId, element: HtmlElement, measure: Measure) {
        self.bindings.borrow_mut().push(Binding {
            id,
            element,
            measure,
        });
    }

    fn bind_separators(&self) {
        for selector in [".about", ".projects", ".contact"] {
            for section in query_all(selector) {
                let Some(line) = section
                    .query_selector(":scope > .section-separator")
                    .ok()
                    .flatten()
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                else {
                    continue;
                };
                let id = self
                    .controller
                    .borrow_mut()
                    .register_draw_in(SeparatorDrawIn::new(document_top(&section)));
                self.bind(id, line, Measure::SectionTop(section));
            }
        }
    }

    fn bind_about(&self, vh: f32) {
        let Some(section) = query_all(".about").into_iter().next() else {
            return;
        };
        let window = window_of(&section, vh);
        let targets = [
            (".about__image-wrapper", presets::about_image(window)),
            (".about__info", presets::about_info(window)),
        ];
        for (selector, track) in targets {
            for element in query_all(selector) {
                let id = self.controller.borrow_mut().register(track);
                self.bind(id, element, Measure::Enclosing(section.clone()));
            }
        }
    }

    fn bind_timeline(&self, vh: f32) {
        for (index, card) in query_all(".timeline-card").into_iter().enumerate() {
            let track = presets::timeline_card(index, window_of(&card, vh));
            let id = self.controller.borrow_mut().register(track);
            self.bind(id, card, Measure::Own);
        }
    }

    /// 重新测量所有窗口
    fn remeasure(&self) {
        let mut controller = self.controller.borrow_mut();
        let vh = controller.viewport_height();
        for binding in self.bindings.borrow().iter() {
            match &binding.measure {
                Measure::Enclosing(section) => {
                    controller.update_window(binding.id, window_of(section, vh));
                }
                Measure::Own => {
                    controller.update_window(binding.id, window_of(&binding.element, vh));
                }
                Measure::SectionTop(section) => {
                    controller.update_section_top(binding.id, document_top(section));
                }
            }
        }
    }

    fn on_scroll(self: &Rc<Self>) {
        self.controller.borrow_mut().set_scroll(scroll_y());
        self.apply();
        self.request_frame();
    }

    fn on_resize(self: &Rc<Self>) {
        self.controller
            .borrow_mut()
            .set_viewport_height(viewport_height());
        self.on_layout_change();
    }

    fn on_layout_change(self: &Rc<Self>) {
        self.remeasure();
        self.on_scroll();
    }

    fn request_frame(self: &Rc<Self>) {
        if self.frame.borrow().is_some() || self.controller.borrow().is_settled() {
            return;
        }
        let scene = Rc::downgrade(self);
        let handle = request_animation_frame(move |timestamp| {
            if let Some(scene) = scene.upgrade() {
                scene.on_frame(timestamp);
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(self: &Rc<Self>, timestamp: f64) {
        self.frame.borrow_mut().take();
        let dt = match self.last_frame.replace(Some(timestamp)) {
            Some(last) => (((timestamp - last) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT),
            None => 0.0,
        };
        let moving = self.controller.borrow_mut().step(dt);
        self.apply();
        if moving {
            self.request_frame();
        } else {
            self.last_frame.set(None);
        }
    }

    /// 把当前变换写回元素
    fn apply(&self) {
        let controller = self.controller.borrow();
        for binding in self.bindings.borrow().iter() {
            let Some(transform) = controller.output(binding.id) else {
                continue;
            };
            if let Err(e) = binding
                .element
                .style()
                .set_property("transform", &transform.to_css())
            {
                warn!(error = ?e, track = %binding.id, "failed to apply transform");
            }
        }
    }

    fn teardown(&self) {
        self.listeners.borrow_mut().clear();
        self.layout.borrow_mut().take();
        self.frame.borrow_mut().take();
        self.last_frame.set(None);

        let reverted = self.controller.borrow_mut().revert();
        for binding in self.bindings.borrow_mut().drain(..) {
            if let Err(e) = binding.element.style().remove_property("transform") {
                warn!(error = ?e, track = %binding.id, "failed to revert transform");
            }
        }
        debug!(count = reverted.len(), "scroll effects reverted");
    }
}

/// 滚动效果的挂载点
#[component]
pub fn ScrollEffects() -> Element {
    let scene = use_hook(|| Rc::new(Scene::default()));

    let installing = Rc::clone(&scene);
    use_effect(move || installing.install());
    use_drop(move || scene.teardown());

    rsx! {}
}
