//! Portfolio Site Core Library
//!
//! View-state engine for a static portfolio page: navbar condensing,
//! active-section tracking, scroll reveals with skill-bar cascades, the
//! project filter, the mobile menu and contact-form validation.
//!
//! ## Overview
//!
//! Every component is an explicit in-memory state struct. The page shell
//! forwards browser events as [`UiEvent`]s into a [`Site`] and renders
//! classes and inline styles as a projection of that state. Deferred
//! visual steps (card fades, banner dismissal, staggered bar fills) run
//! on a keyed [`Scheduler`] against a virtual clock, so whole sequences
//! are testable without a browser.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::time::Duration;
//! use portfolio_core::{Category, Site, SiteConfig, UiEvent};
//!
//! let mut site = Site::new(SiteConfig::default());
//!
//! site.dispatch(UiEvent::Scroll { offset: 240.0 }, Duration::from_millis(16));
//! assert_eq!(site.navbar_class(), "navbar scrolled");
//!
//! site.dispatch(UiEvent::FilterClick(Category::new("iot")), Duration::from_millis(500));
//! site.tick(Duration::from_millis(800));
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod form;
pub mod logging;
pub mod menu;
pub mod newsletter;
pub mod notices;
pub mod reveal;
pub mod scheduler;
pub mod scroll;
pub mod site;
pub mod types;
pub mod validate;

// Re-exports
pub use config::{
    ContentConfig, FormConfig, LoggingConfig, ProjectConfig, RevealConfig, SectionConfig,
    SiteConfig, SkillBarConfig, SkillCategoryConfig, TimingConfig,
};
pub use error::{PortfolioError, PortfolioResult};
pub use filter::{CardState, ProjectFilter, CARD_TRANSITION};
pub use form::{
    Banner, BannerKind, BannerPhase, FormController, SubmitOutcome, INVALID_SUBMISSION_MESSAGE,
    SUBMISSION_FAILED_MESSAGE, SUBMISSION_SUCCESS_MESSAGE,
};
pub use menu::{ClickTarget, MenuToggle};
pub use newsletter::Newsletter;
pub use notices::{NoticeBus, SiteNotice};
pub use reveal::{intersection_ratio, Intersection, RevealCoordinator, RevealElement, SkillBar};
pub use scheduler::{ScheduledAction, Scheduler, TaskKey};
pub use scroll::{active_section, ScrollObserver, SectionBounds};
pub use site::{Site, UiEvent};
pub use types::*;
pub use validate::{is_valid_email, FieldState};
