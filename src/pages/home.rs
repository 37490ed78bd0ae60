//! The single portfolio page.
//!
//! Clicks that bubble up to the page root count as clicks outside the
//! navigation, which closes the mobile menu.

use dioxus::prelude::*;
use portfolio_core::{ClickTarget, UiEvent};
use portfolio_ui::{BackToTop, Button, ButtonVariant};

use crate::components::{ContactSection, Footer, Navbar, ProjectsSection, Reveal, SkillsSection};
use crate::context::use_site;

#[component]
pub fn Home() -> Element {
    let site = use_site();
    let owner = site.with(|s| s.config().content.owner.clone());
    let back_to_top = site.with(|s| s.scroll().back_to_top_visible());

    let jump = move |href: &'static str| {
        move |_: ()| {
            site.dispatch(UiEvent::LinkClick {
                href: href.to_string(),
                in_nav: false,
            })
        }
    };

    rsx! {
        div {
            class: "page",
            onclick: move |_| site.dispatch(UiEvent::DocumentClick(ClickTarget::Elsewhere)),

            Navbar {}

            section { id: "home", class: "hero",
                h1 { "Hi, I'm {owner}" }
                p { class: "role", "Embedded and IoT Engineer" }
                div { class: "hero-buttons",
                    Button { onclick: jump("#projects"), "View Work" }
                    Button { variant: ButtonVariant::Outline, onclick: jump("#contact"), "Contact Me" }
                }
            }

            section { id: "about", class: "about",
                h2 { class: "section-title", "About Me" }
                div { class: "about-content",
                    Reveal { reveal_key: "about-text",
                        p {
                            "I build firmware, connected devices and the small web tools around them."
                        }
                    }
                    Reveal { reveal_key: "about-image",
                        div { class: "about-image", i { class: "fas fa-microchip" } }
                    }
                }
            }

            SkillsSection {}
            ProjectsSection {}
            ContactSection {}
            Footer {}

            BackToTop {
                visible: back_to_top,
                onclick: move |_| site.dispatch(UiEvent::BackToTopClick),
            }
        }
    }
}
