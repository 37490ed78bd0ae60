//! Contact Form Field Components
//!
//! Each field renders inside a `form-group` whose `error` class is driven
//! by the form controller. Inputs report every keystroke and every blur.

use dioxus::prelude::*;
use portfolio_core::{FieldKind, FieldName};

/// Properties for the FormField component
#[derive(Clone, PartialEq, Props)]
pub struct FormFieldProps {
    /// Which required field this is
    pub field: FieldName,
    /// Visible label
    pub label: String,
    /// Current value
    pub value: String,
    /// Whether the group carries the `error` flag
    #[props(default = false)]
    pub has_error: bool,
    /// Render a textarea instead of a single-line input
    #[props(default = false)]
    pub multiline: bool,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Handler called on every input event
    pub oninput: EventHandler<String>,
    /// Handler called when focus leaves the field
    pub onblur: EventHandler<()>,
}

/// DOM id for a field. The subject uses `form_subject` so it does not
/// collide with the relay's own `subject` handling.
pub fn field_dom_id(field: FieldName) -> &'static str {
    match field {
        FieldName::Subject => "form_subject",
        other => other.as_str(),
    }
}

/// Input `type` attribute for a field
pub fn input_type(field: FieldName) -> &'static str {
    match field.kind() {
        FieldKind::Email => "email",
        FieldKind::Text => "text",
    }
}

/// Inline message shown while the group is flagged
pub fn error_hint(field: FieldName) -> &'static str {
    match field {
        FieldName::Name => "Please enter your name",
        FieldName::Email => "Please enter a valid email address",
        FieldName::Subject => "Please enter a subject",
        FieldName::Message => "Please enter your message",
    }
}

/// A required contact-form field with its error group
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FormField {
///         field: FieldName::Email,
///         label: "Email".to_string(),
///         value: site.read().form().field(FieldName::Email).value().to_string(),
///         has_error: site.read().form().field(FieldName::Email).has_error(),
///         oninput: move |v| dispatch(UiEvent::FieldInput { field: FieldName::Email, value: v }),
///         onblur: move |_| dispatch(UiEvent::FieldBlur(FieldName::Email)),
///     }
/// }
/// ```
#[component]
pub fn FormField(props: FormFieldProps) -> Element {
    let id = field_dom_id(props.field);
    let group_class = if props.has_error {
        "form-group error"
    } else {
        "form-group"
    };
    let placeholder = props.placeholder.as_deref().unwrap_or("");

    rsx! {
        div { class: "{group_class}",
            label { r#for: "{id}", "{props.label}" }
            if props.multiline {
                textarea {
                    id: "{id}",
                    name: props.field.as_str(),
                    rows: "5",
                    "aria-required": "true",
                    placeholder: "{placeholder}",
                    value: "{props.value}",
                    oninput: move |e| props.oninput.call(e.value()),
                    onblur: move |_| props.onblur.call(()),
                }
            } else {
                input {
                    id: "{id}",
                    name: props.field.as_str(),
                    r#type: input_type(props.field),
                    "aria-required": "true",
                    placeholder: "{placeholder}",
                    value: "{props.value}",
                    oninput: move |e| props.oninput.call(e.value()),
                    onblur: move |_| props.onblur.call(()),
                }
            }
            span { class: "error-message", "{error_hint(props.field)}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_ids_match_page_contract() {
        assert_eq!(field_dom_id(FieldName::Name), "name");
        assert_eq!(field_dom_id(FieldName::Email), "email");
        assert_eq!(field_dom_id(FieldName::Subject), "form_subject");
        assert_eq!(field_dom_id(FieldName::Message), "message");
    }

    #[test]
    fn only_email_uses_email_input() {
        assert_eq!(input_type(FieldName::Email), "email");
        assert_eq!(input_type(FieldName::Name), "text");
    }
}
