//! Contact section: the validated form and its status banner.

use dioxus::prelude::*;
use portfolio_core::{FieldName, UiEvent};
use portfolio_ui::{Button, FormBanner, FormField};

use crate::components::Reveal;
use crate::context::{use_site, CONTACT_FORM_ID};

/// Label and placeholder for each field
fn field_copy(field: FieldName) -> (&'static str, &'static str) {
    match field {
        FieldName::Name => ("Name", "Your name"),
        FieldName::Email => ("Email", "you@example.com"),
        FieldName::Subject => ("Subject", "What is this about?"),
        FieldName::Message => ("Message", "Your message"),
    }
}

#[component]
pub fn ContactSection() -> Element {
    let site = use_site();
    let banner = site.with(|s| s.form().banner().cloned());
    let fields: Vec<_> = site.with(|s| {
        FieldName::ORDERED
            .iter()
            .map(|&name| {
                let state = s.form().field(name);
                (name, state.value().to_string(), state.has_error())
            })
            .collect()
    });

    rsx! {
        section { id: "contact", class: "contact",
            h2 { class: "section-title", "Get In Touch" }
            Reveal { reveal_key: "contact-form",
                if let Some(banner) = banner {
                    FormBanner { banner }
                }
                form {
                    id: CONTACT_FORM_ID,
                    class: "contact-form",
                    onsubmit: move |e| {
                        e.prevent_default();
                        site.dispatch(UiEvent::Submit);
                    },
                    for (field, value, has_error) in fields {
                        FormField {
                            key: "{field.as_str()}",
                            field,
                            label: field_copy(field).0.to_string(),
                            value,
                            has_error,
                            multiline: field == FieldName::Message,
                            placeholder: field_copy(field).1.to_string(),
                            oninput: move |value| site.dispatch(UiEvent::FieldInput { field, value }),
                            onblur: move |_| site.dispatch(UiEvent::FieldBlur(field)),
                        }
                    }
                    Button { button_type: "submit", "Send Message" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_has_copy() {
        for field in FieldName::ORDERED {
            let (label, placeholder) = field_copy(field);
            assert!(!label.is_empty());
            assert!(!placeholder.is_empty());
        }
    }
}
