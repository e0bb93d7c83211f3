use dioxus::prelude::*;
use folio_core::PROFILE;

use crate::motion::{BlurText, Magnet};

/// 区块标题：序号加逐词模糊的标题
#[component]
pub fn SectionHeader(
    #[props(into)] class: String,
    #[props(into)] number: String,
    #[props(into)] title: String,
) -> Element {
    rsx! {
        div { class,
            span { class: "section-label", "{number}" }
            BlurText { text: title, class: "section-title", delay: 100 }
        }
    }
}

/// 社交平台图标
fn social_icon(kind: &str) -> Element {
    let path = match kind {
        "github" => "M12 .5a12 12 0 0 0-3.8 23.4c.6.1.8-.3.8-.6v-2.1c-3.3.7-4-1.6-4-1.6-.5-1.4-1.3-1.8-1.3-1.8-1.1-.7.1-.7.1-.7 1.2.1 1.8 1.2 1.8 1.2 1.1 1.8 2.8 1.3 3.5 1 .1-.8.4-1.3.8-1.6-2.7-.3-5.5-1.3-5.5-5.9 0-1.3.5-2.4 1.2-3.2-.1-.3-.5-1.5.1-3.2 0 0 1-.3 3.3 1.2a11.5 11.5 0 0 1 6 0C17.3 4.7 18.3 5 18.3 5c.7 1.7.2 2.9.1 3.2.8.8 1.2 1.9 1.2 3.2 0 4.6-2.8 5.6-5.5 5.9.4.4.8 1.1.8 2.2v3.3c0 .3.2.7.8.6A12 12 0 0 0 12 .5Z",
        "linkedin" => "M20.4 20.5h-3.6v-5.6c0-1.3 0-3-1.8-3s-2.1 1.4-2.1 2.9v5.7H9.3V9h3.4v1.6h.1c.5-.9 1.6-1.8 3.4-1.8 3.6 0 4.3 2.4 4.3 5.5v6.2ZM5.3 7.4a2.1 2.1 0 1 1 0-4.2 2.1 2.1 0 0 1 0 4.2ZM7.1 20.5H3.6V9h3.5v11.5ZM22.2 0H1.8C.8 0 0 .8 0 1.7v20.6c0 .9.8 1.7 1.8 1.7h20.4c1 0 1.8-.8 1.8-1.7V1.7C24 .8 23.2 0 22.2 0Z",
        _ => "M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z",
    };
    rsx! {
        svg {
            width: "22",
            height: "22",
            view_box: "0 0 24 24",
            fill: "currentColor",
            path { d: path }
        }
    }
}

fn social_label(kind: &str) -> &'static str {
    match kind {
        "github" => "GitHub",
        "linkedin" => "LinkedIn",
        _ => "X",
    }
}

/// 社交链接，每个图标带磁吸效果
#[component]
pub fn SocialLinks(#[props(into)] class: String, #[props(into)] link_class: String) -> Element {
    rsx! {
        div { class,
            for link in PROFILE.social.iter() {
                Magnet { key: "{link.kind}", strength: 0.3,
                    a {
                        href: link.url,
                        target: "_blank",
                        rel: "noopener",
                        class: "{link_class}",
                        "aria-label": social_label(link.kind),
                        {social_icon(link.kind)}
                    }
                }
            }
        }
    }
}
