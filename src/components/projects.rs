//! Projects section with the category filter.

use dioxus::prelude::*;
use portfolio_core::UiEvent;
use portfolio_ui::{filter_label, FilterPills};

use crate::components::Reveal;
use crate::context::use_site;

#[component]
pub fn ProjectsSection() -> Element {
    let site = use_site();
    let (buttons, active) = site.with(|s| {
        (
            s.filter().buttons().to_vec(),
            s.filter().active().cloned(),
        )
    });
    let cards: Vec<_> = site.with(|s| {
        s.config()
            .content
            .projects
            .iter()
            .zip(s.filter().cards())
            .map(|(project, card)| (project.clone(), card.style()))
            .collect()
    });

    rsx! {
        section { id: "projects", class: "projects",
            h2 { class: "section-title", "Projects" }
            FilterPills {
                categories: buttons,
                active: active,
                on_select: move |category| site.dispatch(UiEvent::FilterClick(category)),
            }
            Reveal { reveal_key: "projects-grid",
                div { class: "projects-grid",
                    for (index, (project, style)) in cards.into_iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "project-card",
                            "data-category": "{project.category}",
                            style: "{style}",
                            span { class: "project-tag", "{filter_label(&project.category)}" }
                            h3 { "{project.title}" }
                            p { "{project.summary}" }
                        }
                    }
                }
            }
        }
    }
}
