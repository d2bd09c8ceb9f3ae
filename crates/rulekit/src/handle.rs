//! The stylesheet handle.

use std::fmt;

use rulekit_cssom::document::Document;
use rulekit_cssom::rule::CssRuleRef;
use rulekit_cssom::sheet::{CssRuleList, SheetApi, StyleSheetRef};

use crate::count::BackCount;
use crate::hint::SelectorHint;
use crate::logging::targets;
use crate::property::normalize_property_name;
use crate::reference::SheetRef;

/// Guard consulted before [`StylesheetHandle::access_style_property`]
/// writes a value.
///
/// Called with the handle, the current value, the proposed value and the
/// rule; the write happens only if it returns `true`.
pub type StyleGuard<'a> = &'a dyn Fn(&StylesheetHandle, &str, &str, &CssRuleRef) -> bool;

/// Which call appends rules to the bound sheet. Chosen once at binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Appender {
    #[default]
    InsertRule,
    AddRule,
}

impl From<SheetApi> for Appender {
    fn from(api: SheetApi) -> Self {
        match api {
            SheetApi::Standard => Self::InsertRule,
            SheetApi::Legacy => Self::AddRule,
        }
    }
}

/// Read and write access to the rules of one loaded stylesheet.
///
/// A handle binds to its sheet once, at construction, and never retries.
/// Every operation works on the sheet's live rule list, so changes made
/// through other handles or directly on the sheet are visible here.
///
/// Nothing on a handle fails loudly. When the handle is unbound, when a
/// rule is not part of the sheet, or when a property is unknown, the
/// operation does nothing and returns `None`, an empty value or `()`.
///
/// # Example
///
/// ```
/// use rulekit::prelude::*;
///
/// let mut document = Document::new();
/// document.add_style_sheet(StyleSheet::internal("local", ".a { color: red; }"));
///
/// let handle = StylesheetHandle::new(&document, &SheetRef::title("local"));
/// handle.set_rule(".a", "color: blue;", 1);
///
/// assert_eq!(handle.to_string(), ".a {\n color: blue;\n}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StylesheetHandle {
    sheet: Option<StyleSheetRef>,
    appender: Appender,
}

impl StylesheetHandle {
    /// Bind to the sheet `reference` names in `document`.
    ///
    /// If nothing matches the handle stays unbound for good.
    pub fn new(document: &Document, reference: &SheetRef) -> Self {
        match reference.resolve(document) {
            Some(sheet) => Self::from_sheet(sheet),
            None => {
                tracing::debug!(target: targets::HANDLE, ?reference, "no stylesheet matched");
                Self::default()
            }
        }
    }

    /// Bind directly to a sheet.
    pub fn from_sheet(sheet: StyleSheetRef) -> Self {
        tracing::debug!(
            target: targets::HANDLE,
            href = ?sheet.href(),
            title = ?sheet.title(),
            rules = sheet.len(),
            "stylesheet bound"
        );
        Self {
            appender: Appender::from(sheet.api()),
            sheet: Some(sheet),
        }
    }

    /// Check whether the handle is bound to a sheet.
    pub fn is_resolved(&self) -> bool {
        self.sheet.is_some()
    }

    /// The bound sheet.
    pub fn sheet(&self) -> Option<&StyleSheetRef> {
        self.sheet.as_ref()
    }

    /// The live rule list, or `None` when unbound.
    pub fn get_rules(&self) -> Option<CssRuleList> {
        self.sheet.as_ref().map(|sheet| sheet.css_rules())
    }

    /// Check whether this exact rule object is in the live rule list.
    pub fn includes_rule(&self, rule: &CssRuleRef) -> bool {
        self.get_rules().is_some_and(|rules| rules.contains(rule))
    }

    /// Append `selector { body }` to the end of the sheet.
    ///
    /// `body` is a declaration list without braces, such as
    /// `"vertical-align: middle; overflow: hidden;"`.
    pub fn insert_rule(&self, selector: &str, body: &str) {
        let Some(sheet) = &self.sheet else {
            return;
        };

        let result = match self.appender {
            Appender::InsertRule => sheet
                .insert_rule(&format!("{selector}{{{body}}}"), sheet.len())
                .map(|_| ()),
            Appender::AddRule => sheet.add_rule(selector, body),
        };

        if let Err(e) = result {
            tracing::debug!(target: targets::HANDLE, selector, error = %e, "rule rejected");
        }
    }

    /// Remove rules whose selector text equals `selector`, newest first.
    ///
    /// At most `back_count` matches are removed (see [`BackCount`]). With
    /// `selector` set to `None` every rule is removed whatever the count.
    pub fn delete_rules(&self, selector: Option<&str>, back_count: impl Into<BackCount>) {
        let Some(sheet) = &self.sheet else {
            return;
        };

        let rules = sheet.css_rules();
        let mut remaining = match selector {
            Some(_) => back_count.into().limit(rules.len()),
            None => rules.len(),
        };

        let mut removed = 0usize;
        let mut index = rules.len();
        while index > 0 && remaining > 0 {
            index -= 1;
            let Some(rule) = rules.get(index) else {
                continue;
            };
            let matches = selector.is_none_or(|s| rule.selector_text() == s);
            if matches && sheet.delete_rule(index).is_ok() {
                remaining -= 1;
                removed += 1;
            }
        }

        tracing::debug!(target: targets::HANDLE, ?selector, removed, "rules deleted");
    }

    /// Remove every rule.
    pub fn delete_all_rules(&self) {
        self.delete_rules(None, BackCount::All);
    }

    /// Replace a rule: [`delete_rules`](Self::delete_rules) then
    /// [`insert_rule`](Self::insert_rule).
    ///
    /// Pass `1` to replace only the most recent definition and leave older
    /// ones in place, or `0` to purge every earlier definition.
    pub fn set_rule(&self, selector: &str, body: &str, back_count: impl Into<BackCount>) {
        self.delete_rules(Some(selector), back_count);
        self.insert_rule(selector, body);
    }

    /// List a rule's declarations one per line as `<prefix>name: value;`.
    ///
    /// Returns an empty string if the rule is not in this handle's sheet.
    pub fn styles_in_rule_as_str(&self, rule: &CssRuleRef, prefix: Option<&str>) -> String {
        if !self.includes_rule(rule) {
            return String::new();
        }
        declaration_lines(rule, prefix.unwrap_or(""))
    }

    /// Rules whose selector satisfies `hint`, in sheet order.
    ///
    /// The result is a new vector, not a live view.
    pub fn get_rules_by_selector_hint(&self, hint: impl Into<SelectorHint>) -> Vec<CssRuleRef> {
        let Some(rules) = self.get_rules() else {
            return vec![];
        };

        let hint = hint.into();
        let matched: Vec<_> = rules
            .iter()
            .filter(|rule| hint.matches(rule.selector_text()))
            .collect();

        tracing::trace!(target: targets::HANDLE, ?hint, matched = matched.len(), "rules filtered");
        matched
    }

    /// Read one style property of a rule and optionally overwrite it.
    ///
    /// `property` may be kebab, snake, space separated or camelCase
    /// (`font-family`, `fontFamily`). Returns the value held before any
    /// write, `""` for a recognized property the rule does not declare, or
    /// `None` if the rule is not in this sheet or the property is unknown.
    ///
    /// When `new_value` is given it is written unless `guard` is given and
    /// returns `false`. Use longhand names: shorthands are stored as
    /// written and never expanded.
    pub fn access_style_property(
        &self,
        rule: &CssRuleRef,
        property: &str,
        new_value: Option<&str>,
        guard: Option<StyleGuard<'_>>,
    ) -> Option<String> {
        if property.is_empty() || !self.includes_rule(rule) {
            return None;
        }

        let property = normalize_property_name(property);
        let old_value = rule.style().get(&property)?.to_string();

        if let Some(new_value) = new_value {
            if guard.is_none_or(|guard| guard(self, &old_value, new_value, rule)) {
                rule.style_mut().set(&property, new_value);
            } else {
                tracing::debug!(
                    target: targets::HANDLE,
                    %property,
                    %old_value,
                    new_value,
                    "write refused by guard"
                );
            }
        }

        Some(old_value)
    }

    /// Read one style property of a rule.
    pub fn style_property(&self, rule: &CssRuleRef, property: &str) -> Option<String> {
        self.access_style_property(rule, property, None, None)
    }

    /// Overwrite one style property of a rule, returning the previous value.
    pub fn set_style_property(
        &self,
        rule: &CssRuleRef,
        property: &str,
        value: &str,
    ) -> Option<String> {
        self.access_style_property(rule, property, Some(value), None)
    }

    /// Copy rules, typically from another handle, to the end of this sheet.
    ///
    /// Each copy first purges every rule with the same selector here.
    pub fn inject_rules(&self, rules: &[CssRuleRef]) {
        for rule in rules {
            let css_text = rule.css_text();
            let body: String = declaration_parts(&css_text)
                .map(|part| format!("{part}; "))
                .collect();
            self.set_rule(rule.selector_text(), &body, 0);
        }
    }

    /// Replace every rule of this sheet with a copy of `source`'s rules.
    pub fn clone_from_handle(&self, source: &StylesheetHandle) {
        let rules = source.get_rules_by_selector_hint(SelectorHint::All);
        self.delete_all_rules();
        self.inject_rules(&rules);
    }
}

impl fmt::Display for StylesheetHandle {
    /// Dump the sheet as CSS, one declaration per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(rules) = self.get_rules() else {
            return Ok(());
        };

        let rules = rules.snapshot();
        for (i, rule) in rules.iter().enumerate() {
            write!(f, "{} {{\n{}", rule.selector_text(), declaration_lines(rule, " "))?;
            f.write_str(if i + 1 < rules.len() { "}\n" } else { "}" })?;
        }
        Ok(())
    }
}

fn declaration_lines(rule: &CssRuleRef, prefix: &str) -> String {
    declaration_parts(&rule.css_text())
        .map(|part| format!("{prefix}{part};\n"))
        .collect()
}

/// Declarations of a serialized rule: the text between the last `{` and
/// the last `}`, split on `;`, trimmed, empty parts dropped.
fn declaration_parts(css_text: &str) -> impl Iterator<Item = &str> {
    let body = match (css_text.rfind('{'), css_text.rfind('}')) {
        (Some(open), Some(close)) if open < close => &css_text[open + 1..close],
        _ => "",
    };
    body.split(';').map(str::trim).filter(|part| !part.is_empty())
}
