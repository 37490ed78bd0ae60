//! Field validation for form inputs.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::FieldKind;

/// Browser `\s`: ECMAScript WhiteSpace plus LineTerminator. Unlike
/// Unicode White_Space this includes U+FEFF and excludes U+0085.
const BROWSER_WHITESPACE_CLASS: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let ws = BROWSER_WHITESPACE_CLASS;
    Regex::new(&format!(r"^[^{ws}@]+@[^{ws}@]+\.[^{ws}@]+$")).expect("valid regex")
});

/// Whether `c` is whitespace to a browser's `\s` and `String.prototype.trim`
pub fn is_browser_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Whether `email` looks like `local@domain.tld`
///
/// No whitespace anywhere, exactly one `@`-free run on each side of an
/// `@`, and at least one `.` after it with something on both sides.
/// Whitespace means [`is_browser_whitespace`].
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// One input plus the error flag on its containing group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    kind: FieldKind,
    value: String,
    error: bool,
}

impl FieldState {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            value: String::new(),
            error: false,
        }
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Whether the group currently carries the `error` flag
    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn clear_error(&mut self) {
        self.error = false;
    }

    /// Check the current value and make the error flag reflect the result
    pub fn validate(&mut self) -> bool {
        let valid = self.is_valid();
        self.error = !valid;
        valid
    }

    /// Check the current value without touching the error flag
    pub fn is_valid(&self) -> bool {
        match self.kind {
            FieldKind::Email => is_valid_email(&self.value),
            FieldKind::Text => !self.value.trim_matches(is_browser_whitespace).is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_examples() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email(" a@b.co"));
    }

    #[test]
    fn email_whitespace_follows_browser_rules() {
        // NEL is not whitespace to a browser, BOM and NBSP are
        assert!(is_valid_email("a\u{85}b@c.co"));
        assert!(!is_valid_email("a\u{feff}b@c.co"));
        assert!(!is_valid_email("a@b\u{a0}c.co"));
        assert!(!is_valid_email("a@b.c\u{2028}"));
    }

    #[test]
    fn text_field_trims_browser_whitespace() {
        let mut field = FieldState::new(FieldKind::Text);
        field.set_value("\u{feff}");
        assert!(!field.validate());

        field.set_value("\u{3000}\u{a0}\n");
        assert!(!field.validate());

        field.set_value("\u{85}");
        assert!(field.validate());
    }

    #[test]
    fn text_field_needs_non_blank() {
        let mut field = FieldState::new(FieldKind::Text);
        assert!(!field.validate());
        assert!(field.has_error());

        field.set_value("   \t");
        assert!(!field.validate());

        field.set_value(" Ada ");
        assert!(field.validate());
        assert!(!field.has_error());
    }

    #[test]
    fn email_field_uses_pattern() {
        let mut field = FieldState::new(FieldKind::Email);
        field.set_value("ada@example");
        assert!(!field.validate());
        field.set_value("ada@example.com");
        assert!(field.validate());
    }

    #[test]
    fn validate_is_idempotent() {
        let mut field = FieldState::new(FieldKind::Email);
        field.set_value("nope");
        let first = (field.validate(), field.has_error());
        let second = (field.validate(), field.has_error());
        assert_eq!(first, second);
    }

    #[test]
    fn error_flag_does_not_accumulate() {
        let mut field = FieldState::new(FieldKind::Text);
        field.validate();
        field.validate();
        field.set_value("ok");
        field.validate();
        assert!(!field.has_error());
    }
}
