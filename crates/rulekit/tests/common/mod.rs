//! Shared fixtures for integration tests.

#![allow(dead_code)]

use rulekit::prelude::*;

/// The external sheet linked by the test page.
pub const TINKER_CSS: &str = r#"
.class1 { color: green; font-weight: bold; }
.class2 { background-color: yellow; }
div .class3 { border-top: 1px solid black; padding: 2px; }
"#;

/// The page's internal sheet titled "local".
pub const LOCAL_CSS: &str = r#"
.class1 p { color: red; }
div.class1 { margin-left: 4px; }
"#;

/// A document shaped like the manual test page: one linked sheet and two
/// internal ones, the second initially empty.
pub fn page_document() -> Document {
    let mut document = Document::new();
    document.add_style_sheet(StyleSheet::external("file:///site/css/tinker.css", TINKER_CSS));
    document.add_style_sheet(StyleSheet::internal("local", LOCAL_CSS));
    document.add_style_sheet(StyleSheet::internal("otherLocal", ""));
    document
}

pub fn selectors(handle: &StylesheetHandle) -> Vec<String> {
    handle
        .get_rules_by_selector_hint(SelectorHint::All)
        .iter()
        .map(|rule| rule.selector_text().to_string())
        .collect()
}
