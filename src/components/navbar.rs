//! Fixed navigation bar with the mobile menu.

use dioxus::prelude::*;
use portfolio_core::{ClickTarget, Site, UiEvent};

use crate::context::use_site;

/// Navbar: condenses on scroll, highlights the active section link and
/// hosts the hamburger menu.
#[component]
pub fn Navbar() -> Element {
    let site = use_site();
    let (owner, links) = site.with(|s| {
        let content = &s.config().content;
        let links: Vec<_> = content
            .sections
            .iter()
            .map(|section| {
                (
                    section.id.anchor(),
                    section.title.clone(),
                    s.nav_link_class(&section.id),
                )
            })
            .collect();
        (content.owner.clone(), links)
    });
    let navbar_class = site.with(Site::navbar_class);
    let hamburger_class = site.with(Site::hamburger_class);
    let nav_links_class = site.with(Site::nav_links_class);

    rsx! {
        nav { id: "navbar", class: navbar_class,
            a {
                class: "logo",
                href: "#home",
                // Bubbles to the page root, which closes an open menu
                onclick: move |e| {
                    e.prevent_default();
                    site.dispatch(UiEvent::LinkClick {
                        href: "#home".to_string(),
                        in_nav: false,
                    });
                },
                "{owner}"
            }

            ul {
                id: "navLinks",
                class: nav_links_class,
                onclick: move |e| {
                    e.stop_propagation();
                    site.dispatch(UiEvent::DocumentClick(ClickTarget::NavLinks));
                },
                for (href, title, class) in links {
                    li { key: "{href}",
                        a {
                            class: class,
                            href: "{href}",
                            onclick: {
                                let href = href.clone();
                                move |e: MouseEvent| {
                                    e.prevent_default();
                                    e.stop_propagation();
                                    site.dispatch(UiEvent::LinkClick {
                                        href: href.clone(),
                                        in_nav: true,
                                    });
                                }
                            },
                            "{title}"
                        }
                    }
                }
            }

            button {
                id: "hamburger",
                class: hamburger_class,
                "aria-label": "Toggle menu",
                onclick: move |e| {
                    e.stop_propagation();
                    site.dispatch(UiEvent::HamburgerClick);
                },
                span {}
                span {}
                span {}
            }
        }
    }
}
