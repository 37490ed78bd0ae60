//! Typed notification bus for view-state changes.
//!
//! Components never call each other. `Site` publishes a `SiteNotice`
//! whenever a component's visible state changes, and anything that wants
//! to observe the page (the shell, tests, diagnostics) subscribes here.

use tokio::sync::broadcast;

use crate::form::BannerKind;
use crate::types::{Category, FieldName, RevealKey, SectionId};

/// Buffer size for the broadcast channel.
const NOTICE_CHANNEL_SIZE: usize = 256;

/// A visible state change
#[derive(Debug, Clone, PartialEq)]
pub enum SiteNotice {
    NavbarCondensed(bool),
    ActiveSectionChanged(Option<SectionId>),
    BackToTopVisible(bool),
    MenuOpened,
    MenuClosed,
    /// A scroll the shell should perform (smooth, to this document offset)
    ScrollRequested(f64),
    Revealed(RevealKey),
    SkillBarFilled { category: RevealKey, index: usize, percent: u8 },
    FilterApplied(Category),
    FieldValidity { field: FieldName, valid: bool },
    /// All fields passed; the shell forwards the form to the relay
    SubmissionAllowed,
    SubmissionBlocked(Vec<FieldName>),
    BannerShown { banner_id: u64, kind: BannerKind },
    BannerRemoved { banner_id: u64 },
    NewsletterSubscribed,
}

/// Broadcast bus for `SiteNotice`s
#[derive(Debug, Clone)]
pub struct NoticeBus {
    tx: broadcast::Sender<SiteNotice>,
}

impl NoticeBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(NOTICE_CHANNEL_SIZE);
        Self { tx }
    }

    /// Subscribe to notices published from now on
    pub fn subscribe(&self) -> broadcast::Receiver<SiteNotice> {
        self.tx.subscribe()
    }

    pub fn publish(&self, notice: SiteNotice) {
        tracing::debug!(?notice, "site notice");
        // Ignore errors if no subscribers
        let _ = self.tx.send(notice);
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for NoticeBus {
    fn default() -> Self {
        Self::new()
    }
}
