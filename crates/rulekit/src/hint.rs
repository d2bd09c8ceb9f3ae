//! Selector hints for filtering rules.

use regex::Regex;

/// Marker that switches a string hint to exact matching.
///
/// A form feed cannot appear in real selector text, so a hint starting
/// with it is never ambiguous.
pub const EXACT_MARKER: char = '\u{000C}';

/// How [`StylesheetHandle::get_rules_by_selector_hint`] filters rules.
///
/// [`StylesheetHandle::get_rules_by_selector_hint`]: crate::StylesheetHandle::get_rules_by_selector_hint
#[derive(Debug, Clone, Default)]
pub enum SelectorHint {
    /// Every rule.
    #[default]
    All,
    /// Selector text equals the string.
    Exact(String),
    /// Selector text contains the string.
    Substring(String),
    /// Selector text matches the pattern.
    Pattern(Regex),
}

impl SelectorHint {
    /// Match selector text exactly.
    pub fn exact(selector: impl Into<String>) -> Self {
        Self::Exact(selector.into())
    }

    /// Match selector text containing `needle`.
    pub fn substring(needle: impl Into<String>) -> Self {
        Self::Substring(needle.into())
    }

    /// Interpret a string hint using the marker convention.
    ///
    /// A leading [`EXACT_MARKER`] selects exact matching against the rest
    /// of the string; anything else is a substring match.
    pub fn from_marked(hint: &str) -> Self {
        match hint.strip_prefix(EXACT_MARKER) {
            Some(exact) => Self::Exact(exact.to_string()),
            None => Self::Substring(hint.to_string()),
        }
    }

    /// Check whether a selector satisfies this hint.
    pub fn matches(&self, selector_text: &str) -> bool {
        match self {
            Self::All => true,
            Self::Exact(exact) => selector_text == exact,
            Self::Substring(needle) => selector_text.contains(needle.as_str()),
            Self::Pattern(pattern) => pattern.is_match(selector_text),
        }
    }
}

impl From<&str> for SelectorHint {
    fn from(hint: &str) -> Self {
        Self::from_marked(hint)
    }
}

impl From<String> for SelectorHint {
    fn from(hint: String) -> Self {
        Self::from_marked(&hint)
    }
}

impl From<&String> for SelectorHint {
    fn from(hint: &String) -> Self {
        Self::from_marked(hint)
    }
}

impl From<Regex> for SelectorHint {
    fn from(pattern: Regex) -> Self {
        Self::Pattern(pattern)
    }
}

impl<T: Into<SelectorHint>> From<Option<T>> for SelectorHint {
    fn from(hint: Option<T>) -> Self {
        hint.map_or(Self::All, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marked_strings() {
        assert!(matches!(SelectorHint::from("\u{c}.class1"), SelectorHint::Exact(s) if s == ".class1"));
        assert!(matches!(SelectorHint::from("class1"), SelectorHint::Substring(s) if s == "class1"));
        assert!(matches!(SelectorHint::from(None::<&str>), SelectorHint::All));
    }

    #[test]
    fn matching_modes() {
        assert!(SelectorHint::All.matches("anything"));

        let exact = SelectorHint::exact(".class1");
        assert!(exact.matches(".class1"));
        assert!(!exact.matches(".class1 p"));

        let substring = SelectorHint::substring("class1");
        assert!(substring.matches(".class1 p"));
        assert!(substring.matches("div.class10"));
        assert!(!substring.matches(".class2"));

        let pattern = SelectorHint::from(Regex::new(r"\.class1$").unwrap());
        assert!(pattern.matches("div .class1"));
        assert!(!pattern.matches(".class10"));
    }

    #[test]
    fn empty_substring_matches_everything() {
        assert!(SelectorHint::from("").matches(".class1"));
    }

    #[test]
    fn bare_marker_matches_empty_selector_only() {
        let hint = SelectorHint::from("\u{c}");
        assert!(!hint.matches(".class1"));
        assert!(hint.matches(""));
    }
}
