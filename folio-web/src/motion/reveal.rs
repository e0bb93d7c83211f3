use dioxus::prelude::*;
use folio_core::StyleSnapshot;
use folio_core::reveal::{self, BlurDirection, Direction, FadeReveal};
use gloo::timers::future::TimeoutFuture;

use crate::hooks::{use_reveal_threshold, use_visibility};
use crate::platform::now_ms;

/// 整块淡入
#[component]
pub fn FadeContent(
    #[props(default)] delay: u32,
    #[props(default = 700)] duration: u32,
    #[props(default)] direction: Direction,
    #[props(default = 40.0)] distance: f32,
    #[props(default)] blur: bool,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    let visibility = use_visibility(use_reveal_threshold());
    let style = FadeReveal::new()
        .delay(delay)
        .duration(duration)
        .direction(direction)
        .distance(distance)
        .blur(blur)
        .style(visibility.is_visible());

    rsx! {
        div {
            class,
            style,
            onmounted: move |e| visibility.attach(&e),
            {children}
        }
    }
}

/// 逐字符入场
///
/// 全部字符入场后调用一次 `on_complete`。
#[component]
pub fn SplitText(
    #[props(into)] text: String,
    #[props(default = 50)] delay: u32,
    from: Option<StyleSnapshot>,
    #[props(default, into)] class: String,
    on_complete: Option<EventHandler<()>>,
) -> Element {
    let visibility = use_visibility(use_reveal_threshold());
    let mut split = reveal::SplitText::new(text.clone()).delay(delay);
    if let Some(from) = from {
        split = split.from(from);
    }

    let mut timer = use_signal(|| split.completion_timer());
    let reveal = visibility.reveal;
    use_effect(move || {
        if !reveal.read().is_revealed() {
            return;
        }
        let deadline = timer.write().arm(now_ms());
        spawn(async move {
            TimeoutFuture::new(deadline.saturating_sub(now_ms()) as u32).await;
            if timer.write().poll(now_ms().max(deadline))
                && let Some(handler) = on_complete
            {
                handler.call(());
            }
        });
    });

    let revealed = visibility.is_visible();
    rsx! {
        span {
            class,
            "aria-label": "{text}",
            onmounted: move |e| visibility.attach(&e),
            for (wi, group) in split.layout().into_iter().enumerate() {
                span {
                    key: "{wi}",
                    "aria-hidden": "true",
                    style: "display: inline-block; white-space: nowrap;",
                    for cell in group.chars.iter() {
                        span {
                            key: "{cell.index}",
                            style: split.char_style(cell, revealed),
                            "{cell.ch}"
                        }
                    }
                }
                if group.trailing_space {
                    span { style: "display: inline-block;", "\u{00A0}" }
                }
            }
        }
    }
}

/// 逐词模糊入场
#[component]
pub fn BlurText(
    #[props(into)] text: String,
    #[props(default = 80)] delay: u32,
    #[props(default)] direction: BlurDirection,
    #[props(default, into)] class: String,
) -> Element {
    let visibility = use_visibility(use_reveal_threshold());
    let blur = reveal::BlurText::new(text.clone())
        .delay(delay)
        .direction(direction);
    let revealed = visibility.is_visible();

    rsx! {
        p {
            class,
            "aria-label": "{text}",
            onmounted: move |e| visibility.attach(&e),
            for word in blur.words() {
                span {
                    key: "{word.index}",
                    "aria-hidden": "true",
                    style: blur.word_style(&word, revealed),
                    "{word.text}"
                }
            }
        }
    }
}
