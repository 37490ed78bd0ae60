//! Form Status Banner
//!
//! The transient message inserted above the contact form.

use dioxus::prelude::*;
use portfolio_core::Banner;

/// Inline style for a banner: palette by kind, opacity/offset by phase
pub fn banner_style(banner: &Banner) -> String {
    let palette = match banner.kind {
        portfolio_core::BannerKind::Success => {
            "background: #e8f5e9; color: #2e7d32; border: 1px solid #a5d6a7;"
        }
        portfolio_core::BannerKind::Error => {
            "background: #ffebee; color: #c62828; border: 1px solid #ef9a9a;"
        }
    };
    format!(
        "display: flex; align-items: center; gap: 10px; padding: 15px 20px; \
         border-radius: 8px; margin-bottom: 20px; font-weight: 500; \
         animation: fadeInUp 0.3s ease; transition: all 0.3s ease; \
         opacity: {}; transform: translateY({}px); {}",
        banner.opacity(),
        banner.translate_y(),
        palette
    )
}

#[component]
pub fn FormBanner(banner: Banner) -> Element {
    rsx! {
        div {
            key: "{banner.id}",
            class: "form-message {banner.kind.class()}",
            role: "status",
            style: "{banner_style(&banner)}",
            i { class: "fas {banner.kind.icon()}" }
            span { "{banner.message}" }
        }
    }
}
