use dioxus::prelude::*;
use folio_core::Reveal;
use folio_core::reveal::{Direction, Stagger};

use crate::hooks::use_visibility;

/// 列表与子项共享的入场状态
#[derive(Clone, Copy, PartialEq)]
struct StaggerContext {
    reveal: Signal<Reveal>,
    stagger: Stagger,
}

/// 交错入场的列表，整个列表共用一个可见性触发器
#[component]
pub fn StaggerList(
    #[props(default = 100)] stagger_delay: u32,
    #[props(default)] direction: Direction,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    let stagger = Stagger::new()
        .stagger_delay(stagger_delay)
        .direction(direction);
    let visibility = use_visibility(stagger.threshold());
    let reveal = visibility.reveal;
    use_context_provider(|| StaggerContext { reveal, stagger });

    rsx! {
        div {
            class,
            onmounted: move |e| visibility.attach(&e),
            {children}
        }
    }
}

/// 列表中的第 `index` 项
#[component]
pub fn StaggerItem(
    index: usize,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    let ctx = use_context::<StaggerContext>();
    let revealed = ctx.reveal.read().is_revealed();
    let style = ctx.stagger.item_style(index, revealed);

    rsx! {
        div { class, style, {children} }
    }
}
