//! Contact form controller.
//!
//! Gates native submission on the four required fields and owns the
//! single transient status banner shown above the form.
//!
//! ## Field lifecycle
//!
//! ```text
//! blur            -> validate (always)
//! input           -> store value; validate only if already flagged
//! submit attempt  -> clear all flags, validate name, email, subject, message
//!                    any invalid => block + error banner
//!                    all valid   => allow (relay_payload is posted unmodified)
//! ```

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::TimingConfig;
use crate::scheduler::{ScheduledAction, Scheduler};
use crate::types::FieldName;
use crate::validate::FieldState;

/// Banner text for a blocked submission
pub const INVALID_SUBMISSION_MESSAGE: &str = "Please fill in all required fields correctly.";

/// Banner text once the relay accepts a message
pub const SUBMISSION_SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent.";

/// Banner text when the relay cannot be reached or refuses a message
pub const SUBMISSION_FAILED_MESSAGE: &str = "Sorry, your message could not be sent. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Error,
    Success,
}

impl BannerKind {
    pub fn class(&self) -> &'static str {
        match self {
            BannerKind::Error => "error",
            BannerKind::Success => "success",
        }
    }

    /// Font Awesome icon class
    pub fn icon(&self) -> &'static str {
        match self {
            BannerKind::Error => "fa-exclamation-circle",
            BannerKind::Success => "fa-check-circle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerPhase {
    Visible,
    FadingOut,
}

/// The status message inserted above the form
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub id: u64,
    pub kind: BannerKind,
    pub message: String,
    pub phase: BannerPhase,
}

impl Banner {
    pub fn opacity(&self) -> f32 {
        match self.phase {
            BannerPhase::Visible => 1.0,
            BannerPhase::FadingOut => 0.0,
        }
    }

    /// Vertical offset in px applied while fading out
    pub fn translate_y(&self) -> f32 {
        match self.phase {
            BannerPhase::Visible => 0.0,
            BannerPhase::FadingOut => -10.0,
        }
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; let the native submission proceed
    Allowed,
    /// Native submission cancelled; these fields are flagged
    Blocked { invalid: Vec<FieldName> },
}

impl SubmitOutcome {
    pub fn is_allowed(&self) -> bool {
        matches!(self, SubmitOutcome::Allowed)
    }
}

/// Banner lifecycle step produced by a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerStep {
    FadingOut(u64),
    Removed(u64),
}

#[derive(Debug, Clone)]
pub struct FormController {
    fields: [FieldState; 4],
    banner: Option<Banner>,
    next_banner_id: u64,
}

fn slot(name: FieldName) -> usize {
    match name {
        FieldName::Name => 0,
        FieldName::Email => 1,
        FieldName::Subject => 2,
        FieldName::Message => 3,
    }
}

impl FormController {
    pub fn new() -> Self {
        Self {
            fields: FieldName::ORDERED.map(|name| FieldState::new(name.kind())),
            banner: None,
            next_banner_id: 1,
        }
    }

    pub fn field(&self, name: FieldName) -> &FieldState {
        &self.fields[slot(name)]
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FieldState {
        &mut self.fields[slot(name)]
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Field values in submission order, as the relay receives them
    pub fn submission(&self) -> Vec<(&'static str, &str)> {
        FieldName::ORDERED
            .iter()
            .map(|name| (name.as_str(), self.field(*name).value()))
            .collect()
    }

    /// Body sent to the relay: hidden inputs first, then the fields in
    /// order, matching the rendered form.
    pub fn relay_payload(&self, hidden: &BTreeMap<String, String>) -> Vec<(String, String)> {
        hidden
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .chain(
                self.submission()
                    .into_iter()
                    .map(|(name, value)| (name.to_string(), value.to_string())),
            )
            .collect()
    }

    /// Store typed input; re-check only a field that is already flagged.
    ///
    /// Returns the new validity if the field was re-checked.
    pub fn on_input(&mut self, name: FieldName, value: impl Into<String>) -> Option<bool> {
        let field = self.field_mut(name);
        field.set_value(value);
        if field.has_error() {
            Some(field.validate())
        } else {
            None
        }
    }

    /// Focus left a field: check it unconditionally
    pub fn on_blur(&mut self, name: FieldName) -> bool {
        self.field_mut(name).validate()
    }

    /// A submit attempt
    pub fn on_submit(
        &mut self,
        now: Duration,
        scheduler: &mut Scheduler,
        timing: &TimingConfig,
    ) -> SubmitOutcome {
        for field in self.fields.iter_mut() {
            field.clear_error();
        }

        let invalid: Vec<FieldName> = FieldName::ORDERED
            .into_iter()
            .filter(|name| !self.field_mut(*name).validate())
            .collect();

        if invalid.is_empty() {
            tracing::info!("contact form passed validation");
            SubmitOutcome::Allowed
        } else {
            tracing::debug!(?invalid, "contact form blocked");
            self.show_banner(
                BannerKind::Error,
                INVALID_SUBMISSION_MESSAGE,
                now,
                scheduler,
                timing,
            );
            SubmitOutcome::Blocked { invalid }
        }
    }

    /// Insert a banner, replacing any existing one, and schedule its dismissal
    pub fn show_banner(
        &mut self,
        kind: BannerKind,
        message: impl Into<String>,
        now: Duration,
        scheduler: &mut Scheduler,
        timing: &TimingConfig,
    ) -> u64 {
        let id = self.next_banner_id;
        self.next_banner_id += 1;

        self.banner = Some(Banner {
            id,
            kind,
            message: message.into(),
            phase: BannerPhase::Visible,
        });
        scheduler.schedule(
            now,
            timing.banner_visible(),
            ScheduledAction::FadeBanner { banner_id: id },
        );
        id
    }

    /// Apply a due banner timer. Stale ids are ignored.
    pub fn on_banner_timer(
        &mut self,
        action: &ScheduledAction,
        now: Duration,
        scheduler: &mut Scheduler,
        timing: &TimingConfig,
    ) -> Option<BannerStep> {
        let current = self.banner.as_ref().map(|b| b.id);
        match *action {
            ScheduledAction::FadeBanner { banner_id } if current == Some(banner_id) => {
                if let Some(banner) = self.banner.as_mut() {
                    banner.phase = BannerPhase::FadingOut;
                }
                scheduler.schedule(
                    now,
                    timing.banner_fade(),
                    ScheduledAction::RemoveBanner { banner_id },
                );
                Some(BannerStep::FadingOut(banner_id))
            }
            ScheduledAction::RemoveBanner { banner_id } if current == Some(banner_id) => {
                self.banner = None;
                Some(BannerStep::Removed(banner_id))
            }
            _ => None,
        }
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}
