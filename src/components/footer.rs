//! Footer with the newsletter signup.

use dioxus::prelude::*;
use portfolio_core::UiEvent;

use crate::context::use_site;

#[component]
pub fn Footer() -> Element {
    let site = use_site();
    let owner = site.with(|s| s.config().content.owner.clone());
    let value = site.with(|s| s.newsletter().value().to_string());
    let placeholder = site.with(|s| s.newsletter().placeholder());

    rsx! {
        footer { class: "footer",
            p { "Get occasional updates on new projects." }
            form {
                class: "newsletter-form",
                onsubmit: move |e| {
                    e.prevent_default();
                    site.dispatch(UiEvent::NewsletterSubmit);
                },
                input {
                    r#type: "email",
                    value: "{value}",
                    placeholder: "{placeholder}",
                    oninput: move |e| site.dispatch(UiEvent::NewsletterInput(e.value())),
                }
                button { class: "btn btn-primary", r#type: "submit", "Subscribe" }
            }
            p { class: "copyright", "© {owner}" }
        }
    }
}
