//! Portfolio Site UI Components
//!
//! Dioxus widgets for the portfolio page. Every widget renders purely
//! from props; state lives in `portfolio_core::Site` and reaches the
//! widgets as class names, inline styles and event handlers.
//!
//! ## Class contract
//!
//! The stylesheet keys off the same markers the page script always used:
//! - `filter-btn` / `active` on the project filter buttons
//! - `form-group` / `error` on each contact-form field group
//! - `form-message` plus `error` or `success` on the status banner
//! - `skill-progress` with an inline `width` on each skill bar

pub mod components;

pub use components::*;
