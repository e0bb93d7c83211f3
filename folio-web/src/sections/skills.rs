use dioxus::prelude::*;
use folio_core::content::SkillChip;
use folio_core::{PROFILE, Vec2};

use super::shared::SectionHeader;
use crate::hooks::use_preferences;
use crate::motion::FadeContent;

/// 跑马灯行数
const MARQUEE_ROWS: usize = 3;

/// 悬停中的技能和提示框位置
#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveSkill {
    chip: SkillChip,
    anchor: Vec2,
}

#[component]
pub fn Skills() -> Element {
    let prefs = use_preferences();
    let t = prefs.read().t();
    let locale = prefs.read().locale();
    let mut active = use_signal(|| None::<ActiveSkill>);
    let rows = PROFILE.skill_rows(MARQUEE_ROWS);
    let hovered = *active.read();
    let active_name = hovered.map(|a| a.chip.skill.name);

    let tooltip = hovered.map(|hovered| {
        rsx! {
            div {
                class: "marquee-tooltip",
                style: "left: {hovered.anchor.x}px; top: {hovered.anchor.y}px;",
                span { class: "marquee-tooltip__name", "{hovered.chip.skill.name}" }
                span { class: "marquee-tooltip__type",
                    "{t.skills.category(hovered.chip.category)}"
                }
                p { class: "marquee-tooltip__desc",
                    "{hovered.chip.skill.description.get(locale)}"
                }
            }
        }
    });

    rsx! {
        section { id: "skills", class: "skills",
            div { class: "skills__container",
                SectionHeader { class: "skills__header", number: "02", title: t.skills.title }

                FadeContent { delay: 200, blur: true,
                    div { class: "marquee-track",
                        span { class: "marquee-track__hint", "{t.skills.speed}" }
                        for (ri, row) in rows.into_iter().enumerate() {
                            div {
                                key: "{ri}",
                                class: if ri % 2 == 1 { "marquee-row marquee-row--reverse" } else { "marquee-row" },
                                for copy in 0..2 {
                                    div {
                                        key: "{copy}",
                                        class: "marquee-row__inner",
                                        "aria-hidden": if copy == 1 { "true" } else { "false" },
                                        for chip in row.iter().copied() {
                                            div {
                                                key: "{copy}-{chip.skill.name}",
                                                class: if active_name == Some(chip.skill.name) { "marquee-icon marquee-icon--active" } else { "marquee-icon" },
                                                onmouseenter: move |e| {
                                                    let p = e.client_coordinates();
                                                    active.set(Some(ActiveSkill {
                                                        chip,
                                                        anchor: Vec2::new(p.x as f32, p.y as f32),
                                                    }));
                                                },
                                                onmouseleave: move |_| active.set(None),
                                                "{chip.skill.name}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                {tooltip}
            }
        }
    }
}
