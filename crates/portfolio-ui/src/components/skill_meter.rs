//! Skill Meter Component

use dioxus::prelude::*;
use portfolio_core::SkillBar;

/// One labelled proficiency bar. The fill width comes from the reveal
/// coordinator; the CSS transition animates the change.
#[component]
pub fn SkillMeter(bar: SkillBar) -> Element {
    rsx! {
        div { class: "skill-item",
            div { class: "skill-info",
                span { "{bar.label}" }
                span { class: "skill-percent", "{bar.target_percent}%" }
            }
            div { class: "skill-bar",
                div {
                    class: "skill-progress",
                    "data-width": "{bar.target_percent}",
                    style: "width: {bar.width()}",
                }
            }
        }
    }
}
