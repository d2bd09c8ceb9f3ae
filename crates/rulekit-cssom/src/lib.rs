//! In-memory CSS object model for rulekit.
//!
//! This crate plays the part of the host document: it owns the loaded
//! stylesheets, their live rule lists and each rule's style map.
//!
//! - **Documents**: ordered stylesheet collections, built in code or from a TOML manifest
//! - **Stylesheets**: external (href) or internal (title), with `insert_rule`,
//!   `delete_rule` and the legacy `add_rule`
//! - **Rules**: selector text, `css_text()` serialization and a camelCase style map
//!
//! # Example
//!
//! ```
//! use rulekit_cssom::prelude::*;
//!
//! let mut document = Document::new();
//! let sheet = document.add_style_sheet(StyleSheet::internal("local", ".a { color: red; }"));
//!
//! sheet.insert_rule(".b { margin: 0 }", sheet.len()).unwrap();
//! let rules = sheet.css_rules();
//! assert_eq!(rules.len(), 2);
//! assert_eq!(rules.get(1).unwrap().css_text(), ".b { margin: 0; }");
//! ```

pub mod declaration;
pub mod document;
pub mod logging;
pub mod parser;
pub mod properties;
pub mod rule;
pub mod sheet;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::declaration::{Declaration, StyleDeclaration};
    pub use crate::document::{Document, DocumentManifest, SheetSource};
    pub use crate::rule::{CssRule, CssRuleRef};
    pub use crate::sheet::{CssRuleList, SheetApi, StyleSheet, StyleSheetRef};
}
