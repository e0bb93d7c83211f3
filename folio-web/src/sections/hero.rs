use dioxus::prelude::*;
use folio_core::nav::Section;
use folio_core::reveal::Direction;
use folio_core::{PROFILE, StyleSnapshot, Transform};

use super::shared::SocialLinks;
use crate::hooks::{use_preferences, use_site_config};
use crate::motion::{FadeContent, RotatingText, SplitText};
use crate::platform::scroll_to_anchor;

#[component]
pub fn Hero() -> Element {
    let prefs = use_preferences();
    let t = prefs.read().t();
    let locale = prefs.read().locale();
    let interval = use_site_config().motion.rotator_interval_ms;

    let texts: Vec<String> = std::iter::once(PROFILE.title.get(locale))
        .chain(t.hero.rotating_texts.iter().copied())
        .map(str::to_string)
        .collect();
    let title_from = StyleSnapshot::hidden()
        .with_transform(Transform::translate_y(60.0).with_rotate_x(40.0));

    rsx! {
        section { id: "hero", class: "hero",
            div { class: "hero__noise" }

            div { class: "hero__content",
                FadeContent { delay: 200, direction: Direction::None, blur: true,
                    span { class: "hero__badge",
                        span { class: "hero__badge-dot" }
                        "{t.hero.available}"
                    }
                }

                h1 { class: "hero__title",
                    SplitText { text: PROFILE.name, delay: 40, from: title_from }
                }

                div { class: "hero__subtitle",
                    RotatingText {
                        key: "{locale}",
                        texts,
                        interval,
                        class: "hero__rotating",
                    }
                }

                FadeContent { delay: 800, blur: true,
                    p { class: "hero__location",
                        span { class: "hero__location-pin", "📍" }
                        " {PROFILE.location}"
                    }
                }

                FadeContent { delay: 1000,
                    SocialLinks { class: "hero__socials", link_class: "hero__social-link" }
                }

                FadeContent { delay: 1200,
                    button {
                        class: "hero__cta",
                        onclick: move |_| scroll_to_anchor(Section::About.anchor()),
                        span { "{t.hero.cta}" }
                        span { class: "hero__cta-arrow", "↓" }
                    }
                }
            }

            div {
                class: "hero__scroll-indicator",
                onclick: move |_| scroll_to_anchor(Section::About.anchor()),
                div { class: "hero__scroll-line" }
            }
        }
    }
}
