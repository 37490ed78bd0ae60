//! Scroll-reveal wrapper.

use dioxus::prelude::*;
use portfolio_core::RevealKey;

use crate::context::use_site;

/// Wraps content that fades in once it scrolls into view. The
/// `data-reveal-key` attribute is how the page bridge reports its
/// geometry.
#[component]
pub fn Reveal(reveal_key: String, children: Element) -> Element {
    let site = use_site();
    let key = RevealKey::new(reveal_key.clone());
    let class = site.with(|s| s.reveal_class(&key));

    rsx! {
        div { class: class, "data-reveal-key": "{reveal_key}", {children} }
    }
}
