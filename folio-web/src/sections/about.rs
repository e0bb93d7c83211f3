use dioxus::prelude::*;
use folio_core::reveal::Direction;
use folio_core::{ImageSource, PROFILE};

use super::shared::SectionHeader;
use crate::hooks::{use_preferences, use_site_config};
use crate::motion::{CountUpNumber, FadeContent, StaggerItem, StaggerList};
use crate::platform::current_year;

#[component]
pub fn About() -> Element {
    let prefs = use_preferences();
    let t = prefs.read().t();
    let locale = prefs.read().locale();
    let count_duration = use_site_config().motion.count_up_duration_ms;
    let stats = PROFILE.stats(current_year());

    let avatar = match PROFILE.avatar_source() {
        ImageSource::Image(src) => rsx! {
            img { class: "about__image", src, alt: PROFILE.name }
        },
        ImageSource::Placeholder(initials) => rsx! {
            div { class: "about__image-placeholder",
                span { class: "about__image-placeholder-text", "{initials}" }
                div { class: "about__image-placeholder-grid" }
            }
        },
    };

    let stat_items = [
        (stats.projects, t.about.stats.projects),
        (stats.years, t.about.stats.years),
        (stats.technologies, t.about.stats.technologies),
    ];

    rsx! {
        section { id: "about", class: "about",
            div { class: "section-separator" }
            div { class: "about__container",
                SectionHeader { class: "about__header", number: "01", title: t.about.title }

                div { class: "about__grid",
                    FadeContent { delay: 200, direction: Direction::Left,
                        div { class: "about__image-wrapper",
                            {avatar}
                            div { class: "about__image-border" }
                        }
                    }

                    div { class: "about__info",
                        for (i, paragraph) in PROFILE.bio.iter().enumerate() {
                            FadeContent { key: "{i}", delay: 300 + i as u32 * 150, blur: true,
                                p { class: "about__text", "{paragraph.get(locale)}" }
                            }
                        }

                        StaggerList { class: "about__stats",
                            for (i, (value, label)) in stat_items.into_iter().enumerate() {
                                StaggerItem { key: "{i}", index: i, class: "about__stat",
                                    CountUpNumber {
                                        class: "about__stat-value",
                                        target: value,
                                        duration: count_duration,
                                        suffix: "+",
                                    }
                                    span { class: "about__stat-label", "{label}" }
                                }
                            }
                        }

                        FadeContent { delay: 700,
                            div { class: "about__details",
                                div { class: "about__detail",
                                    span { class: "about__detail-label", "{t.about.location}" }
                                    span { class: "about__detail-value", "{PROFILE.location}" }
                                }
                                div { class: "about__detail",
                                    span { class: "about__detail-label", "{t.about.email}" }
                                    span { class: "about__detail-value", "{PROFILE.email}" }
                                }
                                div { class: "about__detail",
                                    span { class: "about__detail-label", "{t.about.languages}" }
                                    span { class: "about__detail-value",
                                        "{PROFILE.language_summary(locale)}"
                                    }
                                }
                            }
                        }

                        FadeContent { delay: 900,
                            div { class: "about__education",
                                h3 { class: "about__education-title", "{t.about.education}" }
                                for (i, edu) in PROFILE.education.iter().enumerate() {
                                    div { key: "{i}", class: "about__education-item",
                                        span { class: "about__education-degree",
                                            "{edu.degree.get(locale)}"
                                        }
                                        span { class: "about__education-institution",
                                            "{edu.institution} · {edu.period.display(t.experience.present)}"
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
