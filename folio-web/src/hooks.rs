//! # Hooks
//!
//! 组件共用的上下文与可见性 hook。

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use dioxus::prelude::*;
use dioxus::web::WebEventExt;
use folio_core::{
    Preferences, Reveal, SiteConfig, Threshold, Translations, VisibilitySample, VisibilityTrigger,
};
use tracing::debug;

use crate::platform::{DomObserver, HtmlRoot, LocalStore, SampleHandler};

/// 全站偏好（语言、主题）
pub type SitePreferences = Signal<Preferences<LocalStore, HtmlRoot>>;

pub fn use_preferences() -> SitePreferences {
    use_context::<SitePreferences>()
}

/// 当前语言的翻译表，读取时订阅语言变化
pub fn use_translations() -> &'static Translations {
    use_preferences().read().t()
}

pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

/// 入场效果的默认阈值（来自站点配置）
pub fn use_reveal_threshold() -> Threshold {
    Threshold::new(use_site_config().motion.reveal_threshold)
}

// ========== 可见性 ==========

type TriggerSlot = Rc<RefCell<Option<VisibilityTrigger<DomObserver>>>>;

/// 一次性可见性
///
/// 元素挂载后调用 [`Visibility::attach`] 开始观察；触发器命中时 `reveal` 进入 `Revealed`，之后不再回退。
#[derive(Clone)]
pub struct Visibility {
    pub reveal: Signal<Reveal>,
    threshold: Threshold,
    slot: TriggerSlot,
}

fn mark_revealed(mut reveal: Signal<Reveal>) {
    if !reveal.peek().is_revealed() {
        reveal.write().reveal();
    }
}

impl Visibility {
    pub fn is_visible(&self) -> bool {
        self.reveal.read().is_revealed()
    }

    /// 开始观察挂载的元素
    ///
    /// 浏览器不支持 IntersectionObserver 时直接显示，内容不会一直隐藏。
    pub fn attach(&self, event: &MountedEvent) {
        if self.slot.borrow().is_some() || self.reveal.peek().is_revealed() {
            return;
        }
        let reveal = self.reveal;
        let Some(element) = event.data().try_as_web_event() else {
            mark_revealed(reveal);
            return;
        };

        let weak: Weak<_> = Rc::downgrade(&self.slot);
        let handler: SampleHandler = Rc::new(move |sample: VisibilitySample| {
            let Some(slot) = weak.upgrade() else {
                return;
            };
            let Ok(mut slot) = slot.try_borrow_mut() else {
                return;
            };
            if let Some(trigger) = slot.as_mut()
                && trigger.report(sample)
            {
                mark_revealed(reveal);
            }
        });

        let trigger = VisibilityTrigger::new(DomObserver::new(element, handler), self.threshold);
        if !trigger.source().is_connected() {
            debug!("observer not connected, revealing immediately");
            mark_revealed(reveal);
            return;
        }
        *self.slot.borrow_mut() = Some(trigger);
    }
}

/// 创建一次性可见性，组件卸载时释放观察
pub fn use_visibility(threshold: Threshold) -> Visibility {
    let reveal = use_signal(Reveal::new);
    let visibility = use_hook(|| Visibility {
        reveal,
        threshold,
        slot: Rc::new(RefCell::new(None)),
    });

    let slot = Rc::clone(&visibility.slot);
    use_drop(move || {
        if let Some(mut trigger) = slot.borrow_mut().take() {
            trigger.release();
        }
    });

    visibility
}
