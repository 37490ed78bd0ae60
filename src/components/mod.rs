//! Page sections for the portfolio shell.
//!
//! Sections read the site view state through `use_site()` and forward
//! browser events back into it. Stateless widgets come from
//! `portfolio_ui`.

mod contact;
mod footer;
mod navbar;
mod projects;
mod reveal;
mod skills;

pub use contact::ContactSection;
pub use footer::Footer;
pub use navbar::Navbar;
pub use projects::ProjectsSection;
pub use reveal::Reveal;
pub use skills::SkillsSection;
