//! Footer newsletter signup.
//!
//! Submission never navigates. A valid address clears the input and
//! thanks the visitor through the placeholder for a few seconds.

use std::time::Duration;

use crate::config::TimingConfig;
use crate::scheduler::{ScheduledAction, Scheduler};
use crate::validate::is_valid_email;

pub const DEFAULT_PLACEHOLDER: &str = "Enter your email";
pub const THANKS_PLACEHOLDER: &str = "Thanks for subscribing!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Newsletter {
    value: String,
    placeholder: &'static str,
}

impl Newsletter {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn on_input(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Returns true if the address was accepted
    pub fn on_submit(&mut self, now: Duration, scheduler: &mut Scheduler, timing: &TimingConfig) -> bool {
        if !is_valid_email(&self.value) {
            return false;
        }
        self.value.clear();
        self.placeholder = THANKS_PLACEHOLDER;
        scheduler.schedule(now, timing.newsletter_placeholder(), ScheduledAction::RestorePlaceholder);
        true
    }

    pub fn on_placeholder_timer(&mut self) {
        self.placeholder = DEFAULT_PLACEHOLDER;
    }
}

impl Default for Newsletter {
    fn default() -> Self {
        Self::new()
    }
}
