//! Single style rule.

use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::Result;
use crate::declaration::StyleDeclaration;
use crate::parser::{ParsedRule, parse_rule_text};

/// Shared reference to a rule. Rule identity is pointer identity.
pub type CssRuleRef = Arc<CssRule>;

/// A style rule: a selector plus its style map.
///
/// The selector is fixed for the lifetime of the rule. The style map is
/// mutable in place, so every holder of the same [`CssRuleRef`] sees writes
/// made through any other holder.
#[derive(Debug)]
pub struct CssRule {
    selector_text: String,
    style: RwLock<StyleDeclaration>,
}

impl CssRule {
    /// Create a rule from a selector and a declaration block.
    pub fn new(selector_text: impl Into<String>, style: StyleDeclaration) -> Self {
        Self {
            selector_text: selector_text.into(),
            style: RwLock::new(style),
        }
    }

    /// Parse rule text of the form `selector { declarations }`.
    pub fn parse(text: &str) -> Result<Self> {
        parse_rule_text(text).map(Self::from)
    }

    /// The selector as text.
    pub fn selector_text(&self) -> &str {
        &self.selector_text
    }

    /// Full serialization: `selector { name: value; }`.
    pub fn css_text(&self) -> String {
        self.to_string()
    }

    /// Lock the style map for reading.
    pub fn style(&self) -> RwLockReadGuard<'_, StyleDeclaration> {
        self.style.read()
    }

    /// Lock the style map for writing.
    pub fn style_mut(&self) -> RwLockWriteGuard<'_, StyleDeclaration> {
        self.style.write()
    }

    /// Check whether two references point at the same rule.
    pub fn same(a: &CssRuleRef, b: &CssRuleRef) -> bool {
        Arc::ptr_eq(a, b)
    }
}

impl From<ParsedRule> for CssRule {
    fn from(parsed: ParsedRule) -> Self {
        Self::new(
            parsed.selector,
            StyleDeclaration::from_declarations(parsed.declarations),
        )
    }
}

impl fmt::Display for CssRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = self.style.read();
        if style.is_empty() {
            write!(f, "{} {{ }}", self.selector_text)
        } else {
            write!(f, "{} {{ {} }}", self.selector_text, *style)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_text_round_trip() {
        let rule = CssRule::parse(".frame{width:100%;background:green}").unwrap();
        assert_eq!(rule.selector_text(), ".frame");
        assert_eq!(rule.css_text(), ".frame { width: 100%; background: green; }");
    }

    #[test]
    fn empty_rule_text() {
        let rule = CssRule::parse("p {}").unwrap();
        assert_eq!(rule.css_text(), "p { }");
    }

    #[test]
    fn style_writes_show_in_css_text() {
        let rule = CssRule::parse("p { color: red; }").unwrap();
        rule.style_mut().set("fontSize", "12px");
        assert_eq!(rule.css_text(), "p { color: red; font-size: 12px; }");
    }

    #[test]
    fn identity() {
        let a: CssRuleRef = Arc::new(CssRule::parse("p { color: red }").unwrap());
        let b: CssRuleRef = Arc::new(CssRule::parse("p { color: red }").unwrap());
        assert!(CssRule::same(&a, &a.clone()));
        assert!(!CssRule::same(&a, &b));
    }
}
