//! Site context provider for the portfolio shell.
//!
//! Provides the `Site` view state and the page clock to all components
//! via use_context, wrapped in a `SiteHandle` that forwards events and
//! carries out the side effects the core asks for: smooth scrolling, the
//! body scroll lock and delivering the contact form.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let site = use_site();
//! let navbar_class = site.with(Site::navbar_class);
//! site.dispatch(UiEvent::HamburgerClick);
//! ```

use std::time::{Duration, Instant};

use dioxus::prelude::*;
use portfolio_core::{
    BannerKind, Site, SiteNotice, UiEvent, SUBMISSION_FAILED_MESSAGE, SUBMISSION_SUCCESS_MESSAGE,
};

/// Id of the contact form element
pub const CONTACT_FORM_ID: &str = "contactForm";

/// Monotonic clock anchored at page load
#[derive(Clone, Copy, Debug)]
pub struct PageClock {
    started: Instant,
}

impl PageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Time since page load, the scheduler's time base
    pub fn now(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Copyable handle to the page state
#[derive(Clone, Copy)]
pub struct SiteHandle {
    site: Signal<Site>,
    clock: PageClock,
}

impl SiteHandle {
    pub fn new(site: Signal<Site>, clock: PageClock) -> Self {
        Self { site, clock }
    }

    /// Read the view state (subscribes the calling component)
    pub fn with<R>(&self, f: impl FnOnce(&Site) -> R) -> R {
        f(&self.site.read())
    }

    /// Read without subscribing, for background loops
    pub fn peek_with<R>(&self, f: impl FnOnce(&Site) -> R) -> R {
        f(&self.site.peek())
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Forward one browser event
    pub fn dispatch(&self, event: UiEvent) {
        let mut site = self.site;
        let notices = site.write().dispatch(event, self.clock.now());
        self.apply(&notices);
    }

    /// Run scheduled visual steps that are due
    pub fn tick(&self) {
        let mut site = self.site;
        let notices = site.write().tick(self.clock.now());
        self.apply(&notices);
    }

    /// Show a status banner above the contact form
    fn show_banner(&self, kind: BannerKind, message: &str) {
        let mut site = self.site;
        site.write().show_banner(kind, message, self.clock.now());
    }

    /// Post an accepted form to the relay and report the result in the banner
    async fn deliver(self, payload: Vec<(String, String)>) {
        let Some(relay) = crate::form_relay() else {
            tracing::warn!("contact form accepted but no relay is configured");
            return;
        };
        tracing::info!("forwarding contact form to relay");
        let (kind, message) = match relay.deliver(&payload).await {
            Ok(()) => {
                tracing::info!("contact form delivered");
                (BannerKind::Success, SUBMISSION_SUCCESS_MESSAGE)
            }
            Err(e) => {
                tracing::warn!(error = %e, "contact form delivery failed");
                (BannerKind::Error, SUBMISSION_FAILED_MESSAGE)
            }
        };
        self.show_banner(kind, message);
    }

    /// Carry out page-level effects that live outside the rendered tree
    fn apply(&self, notices: &[SiteNotice]) {
        for notice in notices {
            match notice {
                SiteNotice::ScrollRequested(top) => {
                    let _ = document::eval(&scroll_script(*top));
                }
                SiteNotice::MenuOpened | SiteNotice::MenuClosed => {
                    let overflow = self.peek_with(Site::body_overflow);
                    let _ = document::eval(&format!(
                        "document.body.style.overflow = '{}';",
                        overflow
                    ));
                }
                SiteNotice::SubmissionAllowed => {
                    let payload =
                        self.peek_with(|s| s.form().relay_payload(&s.config().form.hidden));
                    let handle = *self;
                    spawn(async move {
                        handle.deliver(payload).await;
                    });
                }
                _ => {}
            }
        }
    }
}

/// Smooth scroll to a document offset
pub fn scroll_script(top: f64) -> String {
    format!("window.scrollTo({{ top: {}, behavior: 'smooth' }});", top)
}

/// Hook to access the site handle from context.
pub fn use_site() -> SiteHandle {
    use_context::<SiteHandle>()
}
