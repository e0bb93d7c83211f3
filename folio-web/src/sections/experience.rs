use dioxus::prelude::*;
use folio_core::PROFILE;
use folio_core::reveal::Direction;

use super::shared::SectionHeader;
use crate::hooks::use_preferences;
use crate::motion::FadeContent;

#[component]
pub fn Experience() -> Element {
    let prefs = use_preferences();
    let t = prefs.read().t();
    let locale = prefs.read().locale();
    let last = PROFILE.experience.len().saturating_sub(1);

    rsx! {
        section { id: "experience", class: "experience",
            div { class: "experience__container",
                SectionHeader { class: "experience__header", number: "04", title: t.experience.title }

                div { class: "experience__timeline",
                    for (i, exp) in PROFILE.experience.iter().enumerate() {
                        FadeContent {
                            key: "{i}",
                            delay: 200 + i as u32 * 200,
                            direction: if i % 2 == 0 { Direction::Left } else { Direction::Right },
                            blur: true,
                            div { class: "timeline-card",
                                div { class: "timeline-card__marker",
                                    div { class: "timeline-card__icon" }
                                    if i < last {
                                        div { class: "timeline-card__line" }
                                    }
                                }
                                div { class: "timeline-card__content",
                                    span { class: "timeline-card__period",
                                        "{exp.period.display(t.experience.present)}"
                                    }
                                    h3 { class: "timeline-card__role", "{exp.role}" }
                                    span { class: "timeline-card__company", "{exp.company}" }
                                    p { class: "timeline-card__description",
                                        "{exp.description.get(locale)}"
                                    }
                                    div { class: "timeline-card__tags",
                                        for tech in exp.technologies.iter() {
                                            span { key: "{tech}", class: "timeline-card__tag", "{tech}" }
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
}
