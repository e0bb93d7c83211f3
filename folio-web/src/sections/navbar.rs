use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::nav::{NavState, Section, entrance_style, is_scrolled};
use folio_core::{PROFILE, Theme};
use gloo::events::EventListener;
use gloo::timers::future::TimeoutFuture;

use crate::hooks::{use_preferences, use_site_config};
use crate::motion::Magnet;
use crate::platform::{scroll_to_anchor, scroll_y};

#[component]
pub fn Navbar() -> Element {
    let mut prefs = use_preferences();
    let t = prefs.read().t();
    let theme = prefs.read().theme();
    let locale = prefs.read().locale();
    let offset = use_site_config().nav.scrolled_offset_px;

    let mut nav = use_signal(NavState::default);
    let mut scrolled = use_signal(|| is_scrolled(scroll_y(), offset));
    let mut entered = use_signal(|| false);

    // 监听器随 hook 一起释放
    use_hook(move || {
        let window = web_sys::window()?;
        Some(Rc::new(EventListener::new(&window, "scroll", move |_| {
            let now = is_scrolled(scroll_y(), offset);
            if *scrolled.peek() != now {
                scrolled.set(now);
            }
        })))
    });

    use_future(move || async move {
        TimeoutFuture::new(16).await;
        entered.set(true);
    });

    let mut go = move |section: Section| {
        let anchor = nav.write().navigate(section);
        scroll_to_anchor(anchor);
    };

    let menu_open = nav.read().menu_open;
    let theme_label = match theme {
        Theme::Light => t.nav.switch_to_dark,
        Theme::Dark => t.nav.switch_to_light,
    };
    let theme_icon = match theme {
        Theme::Light => "☾",
        Theme::Dark => "☀",
    };
    let theme_text = match theme {
        Theme::Light => t.nav.dark_mode,
        Theme::Dark => t.nav.light_mode,
    };

    rsx! {
        nav {
            class: if scrolled() { "navbar navbar--scrolled" } else { "navbar" },
            style: entrance_style(entered()),
            div { class: "navbar__inner",
                Magnet { strength: 0.2,
                    button { class: "navbar__logo", onclick: move |_| go(Section::Hero),
                        span { class: "navbar__logo-bracket", "<" }
                        "{PROFILE.first_name()}"
                        span { class: "navbar__logo-bracket", "/>" }
                    }
                }

                div { class: "navbar__links",
                    for section in Section::ALL {
                        Magnet { key: "{section.anchor()}", strength: 0.15,
                            button { class: "navbar__link", onclick: move |_| go(section),
                                "{section.label(t)}"
                            }
                        }
                    }
                    Magnet { strength: 0.15,
                        button {
                            class: "lang-toggle",
                            title: t.lang.switch_to,
                            "aria-label": t.lang.switch_to,
                            onclick: move |_| {
                                prefs.write().toggle_locale();
                            },
                            "{locale.toggled().code().to_uppercase()}"
                        }
                    }
                    Magnet { strength: 0.15,
                        button {
                            class: "theme-toggle",
                            "aria-label": theme_label,
                            onclick: move |_| {
                                prefs.write().toggle_theme();
                            },
                            "{theme_icon}"
                        }
                    }
                }

                div { class: "navbar__mobile-controls",
                    button {
                        class: "theme-toggle navbar__mobile-theme",
                        "aria-label": theme_label,
                        onclick: move |_| {
                            prefs.write().toggle_theme();
                        },
                        "{theme_icon}"
                    }
                    button {
                        class: "navbar__toggle",
                        "aria-label": if menu_open { t.nav.close_menu } else { t.nav.open_menu },
                        "aria-expanded": "{menu_open}",
                        onclick: move |_| nav.write().toggle_menu(),
                        if menu_open { "✕" } else { "☰" }
                    }
                }
            }

            if menu_open {
                div { class: "navbar__mobile",
                    for section in Section::ALL {
                        button {
                            key: "{section.anchor()}",
                            class: "navbar__mobile-link",
                            onclick: move |_| go(section),
                            "{section.label(t)}"
                        }
                    }
                    button {
                        class: "navbar__mobile-link",
                        onclick: move |_| {
                            prefs.write().toggle_locale();
                        },
                        "{t.lang.switch_to} ({locale.toggled().code().to_uppercase()})"
                    }
                    button {
                        class: "navbar__mobile-link",
                        onclick: move |_| {
                            prefs.write().toggle_theme();
                        },
                        "{theme_icon} {theme_text}"
                    }
                }
            }
        }
    }
}
