//! Page geometry bridge.
//!
//! A small script installed in the webview reports the scroll offset
//! together with the document-space geometry of the navbar, every
//! `section[id]` and every `[data-reveal-key]` element. Reports go out on
//! every scroll tick and whenever the body changes size (filtered cards,
//! banners, resizes), so section bounds never go stale. Messages arrive
//! as JSON and are turned into `UiEvent`s for the site.

use dioxus::prelude::*;
use portfolio_core::{Bounds, RevealKey, SectionBounds, UiEvent};
use serde::Deserialize;

use crate::context::SiteHandle;

/// Installed once per page. Every scroll tick is reported; there is no
/// throttling.
pub const BRIDGE_JS: &str = r#"
const report = () => {
    const nav = document.getElementById('navbar');
    const y = window.pageYOffset;
    dioxus.send({
        offset: y,
        viewport_height: window.innerHeight,
        navbar_height: nav ? nav.offsetHeight : 0,
        sections: Array.from(document.querySelectorAll('section[id]')).map((s) => ({
            id: s.id,
            top: s.offsetTop,
            height: s.offsetHeight,
        })),
        reveals: Array.from(document.querySelectorAll('[data-reveal-key]')).map((el) => {
            const r = el.getBoundingClientRect();
            return { key: el.dataset.revealKey, top: r.top + y, height: r.height };
        }),
    });
};
window.addEventListener('scroll', report);
window.addEventListener('resize', report);
window.addEventListener('load', report);
new ResizeObserver(report).observe(document.body);
requestAnimationFrame(report);
await new Promise(() => {});
"#;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportedBounds<K> {
    #[serde(alias = "id")]
    pub key: K,
    pub top: f64,
    pub height: f64,
}

/// One geometry report from the page script
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageReport {
    pub offset: f64,
    pub viewport_height: f64,
    pub navbar_height: f64,
    pub sections: Vec<ReportedBounds<String>>,
    pub reveals: Vec<ReportedBounds<String>>,
}

impl PageReport {
    /// Events to dispatch, in order: fresh geometry, then a scroll tick
    /// at the reported offset.
    pub fn into_events(self) -> Vec<UiEvent> {
        let PageReport {
            offset,
            viewport_height,
            navbar_height,
            sections,
            reveals,
        } = self;
        vec![
            UiEvent::Layout {
                navbar_height,
                viewport_height,
                sections: sections
                    .into_iter()
                    .map(|s| SectionBounds::new(s.key, s.top, s.height))
                    .collect(),
                reveals: reveals
                    .into_iter()
                    .map(|r| (RevealKey::new(r.key), Bounds::new(r.top, r.height)))
                    .collect(),
            },
            UiEvent::Scroll { offset },
        ]
    }
}

/// Install the script and forward its reports until the page goes away
pub async fn run(site: SiteHandle) {
    let mut eval = document::eval(BRIDGE_JS);
    loop {
        match eval.recv::<PageReport>().await {
            Ok(report) => {
                for event in report.into_events() {
                    site.dispatch(event);
                }
            }
            Err(e) => {
                tracing::warn!(error = ?e, "page bridge closed");
                break;
            }
        }
    }
}
