use dioxus::prelude::*;
use folio_core::reveal::Direction;
use folio_core::{ContactState, FormStatus, PROFILE, Submission};
use gloo::timers::future::TimeoutFuture;

use super::shared::{SectionHeader, SocialLinks};
use crate::contact_client;
use crate::hooks::{use_preferences, use_site_config};
use crate::motion::{FadeContent, Magnet};
use crate::platform::{now_ms, open_url};

#[component]
pub fn Contact() -> Element {
    let prefs = use_preferences();
    let t = prefs.read().t();
    let config = use_site_config().contact;
    let mut state = use_signal(ContactState::default);

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let Some(submission) = state.write().submit(&config, prefs.peek().t()) else {
            return;
        };
        match submission {
            Submission::Mailto(link) => open_url(&link),
            Submission::Post { endpoint, payload } => {
                let reset_after = config.success_reset_ms;
                spawn(async move {
                    let result = contact_client::send(&endpoint, &payload).await;
                    state
                        .write()
                        .finish(result, prefs.peek().t(), now_ms(), reset_after);

                    let reset_at = state.peek().reset_at();
                    if let Some(deadline) = reset_at {
                        TimeoutFuture::new(deadline.saturating_sub(now_ms()) as u32).await;
                        state.write().tick(now_ms().max(deadline));
                    }
                });
            }
        }
    };

    let current = state.read();
    let disabled = current.status().inputs_disabled();
    let status = match current.status() {
        FormStatus::Success => rsx! {
            div { class: "contact__status contact__status--success",
                span { "{t.contact.success}" }
            }
        },
        FormStatus::Error(message) => rsx! {
            div { class: "contact__status contact__status--error",
                span { "{message}" }
            }
        },
        FormStatus::Idle | FormStatus::Loading => rsx! {},
    };
    let (name, email, message) = (
        current.form.name.clone(),
        current.form.email.clone(),
        current.form.message.clone(),
    );
    drop(current);

    rsx! {
        section { id: "contact", class: "contact",
            div { class: "section-separator" }
            div { class: "contact__container",
                SectionHeader { class: "contact__header", number: "05", title: t.contact.title }

                div { class: "contact__grid",
                    FadeContent { delay: 200, direction: Direction::Left, blur: true,
                        div { class: "contact__info",
                            h3 { class: "contact__info-title", "{t.contact.talk_title}" }
                            p { class: "contact__info-text", "{t.contact.talk_text}" }

                            div { class: "contact__details",
                                a { class: "contact__detail", href: "mailto:{PROFILE.email}",
                                    span { "{PROFILE.email}" }
                                }
                                div { class: "contact__detail",
                                    span { "{PROFILE.location}" }
                                }
                            }

                            SocialLinks { class: "contact__socials", link_class: "contact__social" }
                        }
                    }

                    FadeContent { delay: 400, direction: Direction::Right, blur: true,
                        form { class: "contact__form", novalidate: true, onsubmit,
                            div { class: "contact__field",
                                label { class: "contact__label", r#for: "name", "{t.contact.name_label}" }
                                input {
                                    id: "name",
                                    class: "contact__input",
                                    r#type: "text",
                                    required: true,
                                    disabled,
                                    value: "{name}",
                                    placeholder: t.contact.name_placeholder,
                                    oninput: move |e| state.write().form.name = e.value(),
                                }
                            }

                            div { class: "contact__field",
                                label { class: "contact__label", r#for: "email", "{t.contact.email_label}" }
                                input {
                                    id: "email",
                                    class: "contact__input",
                                    r#type: "email",
                                    required: true,
                                    disabled,
                                    value: "{email}",
                                    placeholder: t.contact.email_placeholder,
                                    oninput: move |e| state.write().form.email = e.value(),
                                }
                            }

                            div { class: "contact__field",
                                label { class: "contact__label", r#for: "message", "{t.contact.message_label}" }
                                textarea {
                                    id: "message",
                                    class: "contact__input contact__textarea",
                                    required: true,
                                    disabled,
                                    rows: "5",
                                    value: "{message}",
                                    placeholder: t.contact.message_placeholder,
                                    oninput: move |e| state.write().form.message = e.value(),
                                }
                            }

                            {status}

                            Magnet { strength: 0.15,
                                button { class: "contact__submit", r#type: "submit", disabled,
                                    if disabled {
                                        span { class: "contact__spinner" }
                                        span { "{t.contact.sending}" }
                                    } else {
                                        span { "{t.contact.send}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
