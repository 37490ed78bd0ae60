//! Reusable UI components for the portfolio page.

mod button;
mod filter_pills;
mod form_banner;
mod form_field;
mod skill_meter;

pub use button::*;
pub use filter_pills::*;
pub use form_banner::*;
pub use form_field::*;
pub use skill_meter::*;
