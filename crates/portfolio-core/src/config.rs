//! Site configuration.
//!
//! One JSON document describes the page contract (sections, projects,
//! skills, reveal regions), the form relay target, timing constants and
//! the default log directive. Every field has a default, so a partial
//! file only overrides what it names.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};
use crate::types::{Category, RevealKey, RevealVariant, SectionId};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub timing: TimingConfig,
    pub content: ContentConfig,
    pub form: FormConfig,
    pub logging: LoggingConfig,
}

impl SiteConfig {
    /// Load and check a configuration file
    pub fn load(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: SiteConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to the built-in site
    pub fn load_or_default(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::info!(path = %path.display(), "no site config found, using defaults");
            Ok(Self::default())
        }
    }

    /// Reject configurations that describe an impossible page
    pub fn validate(&self) -> PortfolioResult<()> {
        let invalid = |msg: String| Err(PortfolioError::InvalidConfig(msg));

        let mut sections = HashSet::new();
        for section in &self.content.sections {
            if section.id.as_str().is_empty() {
                return invalid("section with empty id".to_string());
            }
            if !sections.insert(&section.id) {
                return invalid(format!("duplicate section id: {}", section.id));
            }
        }

        if !self.content.filters.iter().any(Category::is_all) {
            return invalid("filter buttons must include \"all\"".to_string());
        }
        for category in self.content.filters.iter().chain(self.content.projects.iter().map(|p| &p.category)) {
            if category.as_str().is_empty() {
                return invalid("empty project category".to_string());
            }
        }
        for project in &self.content.projects {
            if project.category.is_all() {
                return invalid(format!("project {:?} uses the reserved category \"all\"", project.title));
            }
        }

        let mut reveal_keys = HashSet::new();
        let skill_keys = self.content.skills.iter().map(|s| &s.key);
        for key in self.content.reveals.iter().map(|r| &r.key).chain(skill_keys) {
            if !reveal_keys.insert(key) {
                return invalid(format!("duplicate reveal key: {}", key));
            }
        }
        for skill in &self.content.skills {
            for bar in &skill.bars {
                if bar.percent > 100 {
                    return invalid(format!("skill {:?} has percent {} > 100", bar.label, bar.percent));
                }
            }
        }

        let t = &self.timing;
        if !(t.reveal_threshold > 0.0 && t.reveal_threshold <= 1.0) {
            return invalid(format!("reveal_threshold {} outside (0, 1]", t.reveal_threshold));
        }

        Ok(())
    }
}

/// Scroll thresholds and animation delays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Navbar condenses once the page scrolls past this offset
    pub navbar_condense_px: f64,
    /// Look-ahead subtracted from section tops when picking the active link
    pub section_lookahead_px: f64,
    /// Back-to-top control appears past this offset
    pub back_to_top_px: f64,
    /// Fraction of an element that must be visible to reveal it
    pub reveal_threshold: f64,
    /// Delay between consecutive skill-bar fills
    pub skill_stagger_ms: u64,
    /// Delay between restoring a card to layout and fading it in
    pub card_fade_in_delay_ms: u64,
    /// Delay between fading a card out and removing it from layout
    pub card_hide_delay_ms: u64,
    /// How long a banner stays fully visible
    pub banner_visible_ms: u64,
    /// Banner fade-out length before removal
    pub banner_fade_ms: u64,
    /// How long the newsletter thank-you placeholder stays
    pub newsletter_placeholder_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            navbar_condense_px: 100.0,
            section_lookahead_px: 100.0,
            back_to_top_px: 500.0,
            reveal_threshold: 0.1,
            skill_stagger_ms: 150,
            card_fade_in_delay_ms: 50,
            card_hide_delay_ms: 300,
            banner_visible_ms: 5000,
            banner_fade_ms: 300,
            newsletter_placeholder_ms: 3000,
        }
    }
}

impl TimingConfig {
    pub fn skill_stagger(&self) -> Duration {
        Duration::from_millis(self.skill_stagger_ms)
    }

    pub fn card_fade_in_delay(&self) -> Duration {
        Duration::from_millis(self.card_fade_in_delay_ms)
    }

    pub fn card_hide_delay(&self) -> Duration {
        Duration::from_millis(self.card_hide_delay_ms)
    }

    pub fn banner_visible(&self) -> Duration {
        Duration::from_millis(self.banner_visible_ms)
    }

    pub fn banner_fade(&self) -> Duration {
        Duration::from_millis(self.banner_fade_ms)
    }

    pub fn newsletter_placeholder(&self) -> Duration {
        Duration::from_millis(self.newsletter_placeholder_ms)
    }
}

/// The page contract: which elements exist and what they declare
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Owner name shown in the navbar brand
    pub owner: String,
    /// Sections in document order; each gets a nav link
    pub sections: Vec<SectionConfig>,
    /// Filter buttons in display order; `all` is active at load
    pub filters: Vec<Category>,
    pub projects: Vec<ProjectConfig>,
    pub skills: Vec<SkillCategoryConfig>,
    /// Regions tagged for entrance animation (skill categories are added implicitly)
    pub reveals: Vec<RevealConfig>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        let section = |id: &str, title: &str| SectionConfig {
            id: SectionId::new(id),
            title: title.to_string(),
        };
        let project = |title: &str, category: &str, summary: &str| ProjectConfig {
            title: title.to_string(),
            category: Category::new(category),
            summary: summary.to_string(),
        };
        let bar = |label: &str, percent: u8| SkillBarConfig {
            label: label.to_string(),
            percent,
        };
        let reveal = |key: &str, variant: RevealVariant| RevealConfig {
            key: RevealKey::new(key),
            variant,
        };

        Self {
            owner: "Portfolio".to_string(),
            sections: vec![
                section("home", "Home"),
                section("about", "About"),
                section("skills", "Skills"),
                section("projects", "Projects"),
                section("contact", "Contact"),
            ],
            filters: vec![
                Category::all(),
                Category::new("iot"),
                Category::new("embedded"),
                Category::new("web"),
            ],
            projects: vec![
                project("Smart Greenhouse", "iot", "Sensor mesh with MQTT telemetry."),
                project("Motor Controller", "embedded", "Closed-loop BLDC control on an STM32."),
                project("Lab Dashboard", "web", "Live readings from bench instruments."),
                project("Asset Tracker", "iot", "LoRa beacons with a low-power duty cycle."),
            ],
            skills: vec![
                SkillCategoryConfig {
                    key: RevealKey::new("skills-embedded"),
                    title: "Embedded".to_string(),
                    bars: vec![bar("C", 90), bar("Rust", 75), bar("RTOS", 70)],
                },
                SkillCategoryConfig {
                    key: RevealKey::new("skills-web"),
                    title: "Web".to_string(),
                    bars: vec![bar("HTML/CSS", 85), bar("JavaScript", 70)],
                },
            ],
            reveals: vec![
                reveal("about-text", RevealVariant::FadeLeft),
                reveal("about-image", RevealVariant::FadeRight),
                reveal("projects-grid", RevealVariant::Fade),
                reveal("contact-form", RevealVariant::Fade),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub id: SectionId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub title: String,
    pub category: Category,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategoryConfig {
    /// Reveal key of the category container
    pub key: RevealKey,
    pub title: String,
    pub bars: Vec<SkillBarConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillBarConfig {
    pub label: String,
    /// Declared target width (`data-width`), 0-100
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    pub key: RevealKey,
    #[serde(default)]
    pub variant: RevealVariant,
}

/// Where the contact form posts once it passes validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Form-relay endpoint URL
    pub action: String,
    pub method: String,
    /// Hidden inputs the relay expects (access keys, redirect targets)
    pub hidden: BTreeMap<String, String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            action: "https://api.web3forms.com/submit".to_string(),
            method: "POST".to_string(),
            hidden: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub directive: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directive: "info".to_string(),
        }
    }
}
