use dioxus::prelude::*;
use folio_core::PROFILE;

use crate::hooks::use_translations;
use crate::motion::FadeContent;
use crate::platform::current_year;

#[component]
pub fn Footer() -> Element {
    let t = use_translations();
    let year = current_year();

    rsx! {
        footer { class: "footer",
            FadeContent { delay: 100,
                div { class: "footer__container",
                    div { class: "footer__left",
                        span { class: "footer__logo",
                            span { class: "footer__logo-bracket", "<" }
                            "{PROFILE.first_name()}"
                            span { class: "footer__logo-bracket", "/>" }
                        }
                    }
                    div { class: "footer__center",
                        p { class: "footer__text", "{t.footer.made_with} {PROFILE.country()}" }
                    }
                    div { class: "footer__right",
                        span { class: "footer__copyright",
                            "© {year} {PROFILE.name}. {t.footer.rights}"
                        }
                    }
                }
            }
        }
    }
}
