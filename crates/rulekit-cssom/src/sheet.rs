//! Stylesheets and their live rule lists.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::logging::targets;
use crate::parser::parse_stylesheet;
use crate::rule::{CssRule, CssRuleRef};
use crate::{Error, Result};

/// Shared reference to a stylesheet.
pub type StyleSheetRef = Arc<StyleSheet>;

/// Which rule-append call a stylesheet exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetApi {
    /// `insert_rule(text, index)` is available.
    #[default]
    Standard,
    /// Only the older `add_rule(selector, body)` call is available.
    Legacy,
}

/// A stylesheet loaded into a document.
///
/// External sheets carry an href, internal sheets usually carry a title.
/// The rule list lives behind a lock so that every [`CssRuleList`] handed
/// out stays live.
#[derive(Debug)]
pub struct StyleSheet {
    href: Option<String>,
    title: Option<String>,
    api: SheetApi,
    rules: RwLock<Vec<CssRuleRef>>,
}

impl StyleSheet {
    /// Create an empty sheet with neither href nor title.
    pub fn new() -> Self {
        Self {
            href: None,
            title: None,
            api: SheetApi::Standard,
            rules: RwLock::new(vec![]),
        }
    }

    /// Create an external sheet from its href and CSS text.
    pub fn external(href: impl Into<String>, css: &str) -> Self {
        Self::from_css(css).with_href(href)
    }

    /// Create an internal sheet from its title and CSS text.
    pub fn internal(title: impl Into<String>, css: &str) -> Self {
        Self::from_css(css).with_title(title)
    }

    /// Parse a sheet from CSS text. Invalid rules are dropped.
    pub fn from_css(css: &str) -> Self {
        let rules = parse_stylesheet(css)
            .into_iter()
            .map(|parsed| Arc::new(CssRule::from(parsed)))
            .collect();
        Self {
            rules: RwLock::new(rules),
            ..Self::new()
        }
    }

    /// Load an external sheet from a CSS file.
    ///
    /// The href is the path as given, with `/` separators.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let href = path.to_string_lossy().replace('\\', "/");
        tracing::debug!(target: targets::SHEET, href = %href, "loaded stylesheet");
        Ok(Self::external(href, &content))
    }

    /// Set the href.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set which append call the sheet exposes.
    pub fn with_api(mut self, api: SheetApi) -> Self {
        self.api = api;
        self
    }

    /// Location of an external sheet.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// Title of the sheet.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The append call this sheet exposes.
    pub fn api(&self) -> SheetApi {
        self.api
    }

    /// Live view of the rule list.
    pub fn css_rules(self: &Arc<Self>) -> CssRuleList {
        CssRuleList {
            sheet: Arc::clone(self),
        }
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.read().len()
    }

    /// Check if the sheet has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.read().is_empty()
    }

    /// Parse `text` as one rule and insert it at `index`.
    ///
    /// Returns the index of the new rule.
    pub fn insert_rule(&self, text: &str, index: usize) -> Result<usize> {
        if self.api == SheetApi::Legacy {
            return Err(Error::NotSupported("insert_rule"));
        }

        let rule = Arc::new(CssRule::parse(text)?);

        let mut rules = self.rules.write();
        if index > rules.len() {
            return Err(Error::index_out_of_range(index, rules.len()));
        }
        tracing::trace!(
            target: targets::SHEET,
            index,
            selector = rule.selector_text(),
            "inserting rule"
        );
        rules.insert(index, rule);
        Ok(index)
    }

    /// Append a rule built from a selector and a declaration body.
    pub fn add_rule(&self, selector: &str, body: &str) -> Result<()> {
        let rule = Arc::new(CssRule::parse(&format!("{selector} {{ {body} }}"))?);
        tracing::trace!(
            target: targets::SHEET,
            selector = rule.selector_text(),
            "adding rule"
        );
        self.rules.write().push(rule);
        Ok(())
    }

    /// Remove the rule at `index`.
    pub fn delete_rule(&self, index: usize) -> Result<()> {
        let mut rules = self.rules.write();
        if index >= rules.len() {
            return Err(Error::index_out_of_range(index, rules.len()));
        }
        let removed = rules.remove(index);
        tracing::trace!(
            target: targets::SHEET,
            index,
            selector = removed.selector_text(),
            "deleted rule"
        );
        Ok(())
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::new()
    }
}

/// Live, index-addressable view of a stylesheet's rules.
///
/// Every call reads the sheet's current state; nothing is cached.
#[derive(Debug, Clone)]
pub struct CssRuleList {
    sheet: StyleSheetRef,
}

impl CssRuleList {
    /// Number of rules right now.
    pub fn len(&self) -> usize {
        self.sheet.len()
    }

    /// Check if the list is empty right now.
    pub fn is_empty(&self) -> bool {
        self.sheet.is_empty()
    }

    /// The rule at `index`, if any.
    pub fn get(&self, index: usize) -> Option<CssRuleRef> {
        self.sheet.rules.read().get(index).cloned()
    }

    /// Check whether the exact rule object is in the list.
    pub fn contains(&self, rule: &CssRuleRef) -> bool {
        self.sheet
            .rules
            .read()
            .iter()
            .any(|r| CssRule::same(r, rule))
    }

    /// Copy of the current rules, in order.
    pub fn snapshot(&self) -> Vec<CssRuleRef> {
        self.sheet.rules.read().clone()
    }

    /// Iterate over a snapshot of the current rules.
    pub fn iter(&self) -> std::vec::IntoIter<CssRuleRef> {
        self.snapshot().into_iter()
    }

    /// The sheet this list belongs to.
    pub fn sheet(&self) -> &StyleSheetRef {
        &self.sheet
    }
}

impl IntoIterator for &CssRuleList {
    type Item = CssRuleRef;
    type IntoIter = std::vec::IntoIter<CssRuleRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
