//! Core types shared across the view-state components

use serde::{Deserialize, Serialize};

/// Identifier of a page section (`section[id]`), also the nav-link anchor
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(pub String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The in-page anchor a nav link uses for this section (`#id`)
    pub fn anchor(&self) -> String {
        format!("#{}", self.0)
    }

    /// Parse an anchor href. Returns `None` for `#`, empty and off-page hrefs.
    pub fn from_anchor(href: &str) -> Option<Self> {
        match href.strip_prefix('#') {
            Some(id) if !id.is_empty() => Some(Self(id.to_string())),
            _ => None,
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Project category used by filter buttons and cards
///
/// The sentinel `all` matches every card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(pub String);

impl Category {
    pub const ALL: &'static str = "all";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn all() -> Self {
        Self(Self::ALL.to_string())
    }

    pub fn is_all(&self) -> bool {
        self.0 == Self::ALL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a card tagged `card` is shown while this filter is active
    pub fn matches(&self, card: &Category) -> bool {
        self.is_all() || self == card
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key of an element tagged for entrance animation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RevealKey(pub String);

impl RevealKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RevealKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Entrance animation variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RevealVariant {
    #[default]
    Fade,
    FadeLeft,
    FadeRight,
}

impl RevealVariant {
    /// CSS class carried before and after reveal
    pub fn class(&self) -> &'static str {
        match self {
            RevealVariant::Fade => "reveal",
            RevealVariant::FadeLeft => "reveal-left",
            RevealVariant::FadeRight => "reveal-right",
        }
    }
}

/// The four required contact-form fields, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldName {
    pub const ORDERED: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Subject,
        FieldName::Message,
    ];

    /// Form control name submitted to the relay endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Subject => "subject",
            FieldName::Message => "message",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldName::Email => FieldKind::Email,
            _ => FieldKind::Text,
        }
    }
}

/// How a field's value is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Valid iff the trimmed value is non-empty
    Text,
    /// Valid iff the value looks like `local@domain.tld`
    Email,
}

/// Vertical extent of an element in document coordinates (CSS px)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// The visible window of the document
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    /// Current vertical scroll offset (`window.pageYOffset`)
    pub offset: f64,
    /// Viewport height (`window.innerHeight`)
    pub height: f64,
}

impl Viewport {
    pub fn new(offset: f64, height: f64) -> Self {
        Self { offset, height }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.offset, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_parsing() {
        assert_eq!(SectionId::from_anchor("#about"), Some(SectionId::new("about")));
        assert_eq!(SectionId::from_anchor("#"), None);
        assert_eq!(SectionId::from_anchor("https://example.com"), None);
        assert_eq!(SectionId::new("contact").anchor(), "#contact");
    }

    #[test]
    fn all_matches_everything() {
        let all = Category::all();
        assert!(all.matches(&Category::new("iot")));
        assert!(all.matches(&Category::new("web")));
        let iot = Category::new("iot");
        assert!(iot.matches(&Category::new("iot")));
        assert!(!iot.matches(&Category::new("web")));
    }

    #[test]
    fn only_email_is_email_kind() {
        for field in FieldName::ORDERED {
            let expected = if field == FieldName::Email {
                FieldKind::Email
            } else {
                FieldKind::Text
            };
            assert_eq!(field.kind(), expected);
        }
    }

    #[test]
    fn reveal_variant_serde_names() {
        let v: RevealVariant = serde_json::from_str("\"fade-left\"").unwrap();
        assert_eq!(v, RevealVariant::FadeLeft);
        assert_eq!(v.class(), "reveal-left");
    }
}
