use dioxus::prelude::*;
use folio_core::{ImageSource, PROFILE};

use super::shared::SectionHeader;
use crate::hooks::use_preferences;
use crate::motion::{FadeContent, TiltCard};

#[component]
pub fn Projects() -> Element {
    let prefs = use_preferences();
    let t = prefs.read().t();
    let locale = prefs.read().locale();
    let mut show_all = use_signal(|| false);
    let projects = PROFILE.visible_projects(show_all());

    let toggle_label = if show_all() {
        t.projects.show_less.to_string()
    } else {
        format!("{} ({})", t.projects.show_all, PROFILE.projects.len())
    };

    rsx! {
        section { id: "projects", class: "projects",
            div { class: "section-separator" }
            div { class: "projects__container",
                SectionHeader { class: "projects__header", number: "03", title: t.projects.title }

                div { class: "projects__grid",
                    for (i, project) in projects.into_iter().enumerate() {
                        FadeContent { key: "{project.title}", delay: 150 * i as u32, blur: true,
                            TiltCard { class: "project-card", max_tilt: 6.0, scale: 1.01,
                                div { class: "project-card__image",
                                    {match project.image_source() {
                                        ImageSource::Image(src) => rsx! {
                                            img { src, alt: project.title }
                                        },
                                        ImageSource::Placeholder(initials) => rsx! {
                                            div { class: "project-card__placeholder",
                                                div { class: "project-card__placeholder-pattern" }
                                                span { class: "project-card__placeholder-text", "{initials}" }
                                            }
                                        },
                                    }}
                                }

                                div { class: "project-card__content",
                                    h3 { class: "project-card__title", "{project.title}" }
                                    p { class: "project-card__description",
                                        "{project.description.get(locale)}"
                                    }
                                    div { class: "project-card__tags",
                                        for tech in project.technologies.iter() {
                                            span { key: "{tech}", class: "project-card__tag", "{tech}" }
                                        }
                                    }
                                    div { class: "project-card__links",
                                        {project.github.map(|url| rsx! {
                                            a {
                                                class: "project-card__link",
                                                href: url,
                                                target: "_blank",
                                                rel: "noopener",
                                                span { "{t.projects.code}" }
                                            }
                                        })}
                                        {project.live.map(|url| rsx! {
                                            a {
                                                class: "project-card__link project-card__link--live",
                                                href: url,
                                                target: "_blank",
                                                rel: "noopener",
                                                span { "{t.projects.demo}" }
                                            }
                                        })}
                                    }
                                }
                            }
                        }
                    }
                }

                if PROFILE.has_hidden_projects() {
                    FadeContent { delay: 400,
                        div { class: "projects__toggle",
                            button {
                                class: "projects__toggle-btn",
                                onclick: move |_| show_all.toggle(),
                                "{toggle_label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
