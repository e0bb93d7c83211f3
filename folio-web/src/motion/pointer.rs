use dioxus::prelude::*;
use dioxus::web::WebEventExt;
use folio_core::Vec2;
use folio_core::pointer::{self, TiltState};

use crate::hooks::use_preferences;
use crate::platform::element_rect;

fn pointer_position(event: &MouseEvent) -> Vec2 {
    let p = event.client_coordinates();
    Vec2::new(p.x as f32, p.y as f32)
}

/// 磁吸：子元素朝指针方向偏移
#[component]
pub fn Magnet(
    #[props(default = 0.3)] strength: f32,
    #[props(default)] disabled: bool,
    children: Element,
) -> Element {
    let magnet = pointer::Magnet::new(strength).disabled(disabled);
    let mut element = use_signal(|| None::<web_sys::Element>);
    let mut offset = use_signal(Vec2::zero);

    rsx! {
        div {
            style: pointer::Magnet::style(offset()),
            onmounted: move |e| element.set(e.data().try_as_web_event()),
            onmousemove: move |e| {
                let rect = element.peek().as_ref().map(element_rect);
                if let Some(rect) = rect {
                    offset.set(magnet.on_move(rect, pointer_position(&e)));
                }
            },
            onmouseleave: move |_| offset.set(magnet.on_leave()),
            {children}
        }
    }
}

/// 3D 倾斜卡片，高光颜色跟随主题
#[component]
pub fn TiltCard(
    #[props(default = 10.0)] max_tilt: f32,
    #[props(default = 1.02)] scale: f32,
    #[props(default = true)] glare: bool,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    let tilt = pointer::TiltCard::new(max_tilt, scale).glare(glare);
    let prefs = use_preferences();
    let mut element = use_signal(|| None::<web_sys::Element>);
    let mut state = use_signal(TiltState::neutral);
    let current = state.read().clone();

    rsx! {
        div {
            class,
            style: current.style(),
            onmounted: move |e| element.set(e.data().try_as_web_event()),
            onmousemove: move |e| {
                let rect = element.peek().as_ref().map(element_rect);
                if let Some(rect) = rect {
                    let color = prefs.peek().theme().glare_color();
                    state.set(tilt.on_move(rect, pointer_position(&e), color));
                }
            },
            onmouseleave: move |_| state.set(tilt.on_leave()),
            {children}
            if current.glare.is_some() {
                div { style: current.glare_style() }
            }
        }
    }
}
