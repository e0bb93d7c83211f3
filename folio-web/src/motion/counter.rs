use dioxus::prelude::*;
use folio_core::count_up::TICK_INTERVAL_MS;
use folio_core::{CountUp, Millis, Rotator};
use gloo::timers::future::TimeoutFuture;
use tracing::warn;

use crate::hooks::use_visibility;
use crate::platform::now_ms;

/// 进入视口后从 0 数到 `target`
#[component]
pub fn CountUpNumber(
    target: u32,
    #[props(default = 2000)] duration: Millis,
    #[props(default, into)] suffix: String,
    #[props(default, into)] class: String,
) -> Element {
    let mut counter = use_signal(|| {
        CountUp::new(target)
            .duration(duration)
            .suffix(suffix.clone())
    });
    let threshold = counter.peek().threshold();
    let visibility = use_visibility(threshold);
    let reveal = visibility.reveal;

    use_effect(move || {
        if !reveal.read().is_revealed() || !counter.write().start(now_ms()) {
            return;
        }
        spawn(async move {
            loop {
                TimeoutFuture::new(TICK_INTERVAL_MS as u32).await;
                let mut counter = counter.write();
                counter.tick(now_ms());
                if counter.is_done() {
                    break;
                }
            }
        });
    });

    rsx! {
        span {
            class,
            onmounted: move |e| visibility.attach(&e),
            "{counter.read().display()}"
        }
    }
}

/// 轮播文本
///
/// 配置无效（空列表、间隔过短）时静态显示第一项。
/// 语言切换时应以语言作为 key 重新挂载。
#[component]
pub fn RotatingText(
    texts: Vec<String>,
    #[props(default = 3000)] interval: Millis,
    #[props(default, into)] class: String,
) -> Element {
    let mut rotator = use_signal(|| {
        Rotator::new(texts.clone(), interval).map(|r| r.starting_at(now_ms()))
    });
    use_hook(|| {
        if let Err(e) = &*rotator.peek() {
            warn!(error = %e, "rotating text disabled");
        }
    });

    use_future(move || async move {
        loop {
            let deadline = match &*rotator.peek() {
                Ok(r) => r.next_deadline(),
                Err(_) => return,
            };
            TimeoutFuture::new(deadline.saturating_sub(now_ms()) as u32).await;
            if let Ok(r) = rotator.write().as_mut() {
                r.tick(now_ms().max(deadline));
            }
        }
    });

    match &*rotator.read() {
        Ok(r) => rsx! {
            span { class, style: r.style(), "{r.current()}" }
        },
        Err(_) => rsx! {
            span { class, {texts.first().cloned().unwrap_or_default()} }
        },
    }
}
