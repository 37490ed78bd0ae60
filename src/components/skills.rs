//! Skills section: one card per category, bars fill when it reveals.

use dioxus::prelude::*;
use portfolio_ui::SkillMeter;

use crate::context::use_site;

#[component]
pub fn SkillsSection() -> Element {
    let site = use_site();
    let categories: Vec<_> = site.with(|s| {
        s.config()
            .content
            .skills
            .iter()
            .map(|skill| {
                (
                    skill.key.clone(),
                    skill.title.clone(),
                    s.reveal_class(&skill.key),
                    s.reveal().skill_bars(&skill.key).to_vec(),
                )
            })
            .collect()
    });

    rsx! {
        section { id: "skills", class: "skills",
            h2 { class: "section-title", "Skills" }
            div { class: "skills-grid",
                for (key, title, class, bars) in categories {
                    div {
                        key: "{key}",
                        class: class,
                        "data-reveal-key": "{key}",
                        h3 { "{title}" }
                        for (index, bar) in bars.into_iter().enumerate() {
                            SkillMeter { key: "{index}", bar }
                        }
                    }
                }
            }
        }
    }
}
