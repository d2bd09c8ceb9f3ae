//! Stylesheet references.

use rulekit_cssom::document::Document;
use rulekit_cssom::sheet::StyleSheetRef;
use serde::{Deserialize, Serialize};

/// Describes which loaded stylesheet a handle binds to.
///
/// A `title` matches a sheet's title exactly. An `href` matches the
/// trailing part of an external sheet's href, so `"tinker.css"` finds
/// `"/site/css/tinker.css"`. When both are set the title wins, even if no
/// sheet carries that title. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetRef {
    /// Trailing part of an external sheet's href.
    pub href: Option<String>,
    /// Exact title of a sheet.
    pub title: Option<String>,
}

impl SheetRef {
    /// Reference an external sheet by the end of its href.
    pub fn href(suffix: impl Into<String>) -> Self {
        Self {
            href: Some(suffix.into()),
            title: None,
        }
    }

    /// Reference a sheet by its title.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            href: None,
            title: Some(title.into()),
        }
    }

    /// Find the referenced sheet in a document. First match wins.
    pub fn resolve(&self, document: &Document) -> Option<StyleSheetRef> {
        let sheets = document.style_sheets();

        if let Some(title) = non_empty(&self.title) {
            return sheets.iter().find(|s| s.title() == Some(title)).cloned();
        }

        if let Some(suffix) = non_empty(&self.href) {
            return sheets
                .iter()
                .find(|s| s.href().is_some_and(|href| href.ends_with(suffix)))
                .cloned();
        }

        None
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
