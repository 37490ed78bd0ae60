//! Button Components
//!
//! - Primary: filled call-to-action (contact submit, hero buttons)
//! - Outline: secondary action
//! - BackToTop: the floating scroll-to-top control

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            class: props.variant.class(),
            r#type: "{props.button_type}",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Inline style for the back-to-top control
pub fn back_to_top_style(visible: bool) -> &'static str {
    if visible {
        "opacity: 1; visibility: visible;"
    } else {
        "opacity: 0; visibility: hidden;"
    }
}

/// Floating control shown once the page has scrolled far enough
#[component]
pub fn BackToTop(visible: bool, onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "back-to-top",
            "aria-label": "Back to top",
            style: back_to_top_style(visible),
            onclick: move |_| onclick.call(()),
            i { class: "fas fa-arrow-up" }
        }
    }
}
