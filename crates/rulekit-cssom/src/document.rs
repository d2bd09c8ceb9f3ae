//! Documents and document manifests.
//!
//! A [`Document`] is the ordered collection of stylesheets a page has
//! loaded. Documents can be assembled in code or described by a TOML
//! manifest:
//!
//! ```toml
//! [[stylesheet]]
//! href = "css/tinker.css"
//!
//! [[stylesheet]]
//! title = "local"
//! css = ".class1 { color: red; }"
//! ```
//!
//! External entries are read from disk relative to the manifest's
//! directory. Internal entries carry their CSS inline.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::logging::targets;
use crate::sheet::{SheetApi, StyleSheet, StyleSheetRef};
use crate::{Error, Result};

/// One stylesheet entry of a manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetSource {
    /// Path of an external sheet, relative to the manifest.
    pub href: Option<String>,
    /// Title of the sheet.
    pub title: Option<String>,
    /// Inline CSS. Ignored when `href` is set.
    pub css: Option<String>,
    /// Model an old host that lacks `insert_rule`.
    pub legacy: bool,
}

/// The stylesheets a document loads, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentManifest {
    /// Stylesheet entries.
    #[serde(rename = "stylesheet")]
    pub stylesheets: Vec<SheetSource>,
}

impl DocumentManifest {
    /// Decode a manifest from TOML text.
    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// A document: the ordered collection of loaded stylesheets.
#[derive(Debug, Clone, Default)]
pub struct Document {
    style_sheets: Vec<StyleSheetRef>,
}

impl Document {
    /// Create a document with no stylesheets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a document described by a manifest file.
    pub fn from_manifest_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let manifest =
            DocumentManifest::from_toml(&text).map_err(|e| Error::manifest(path, e))?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_manifest(&manifest, base_dir)
    }

    /// Load a document from manifest text, resolving hrefs against `base_dir`.
    pub fn from_manifest_str(text: &str, base_dir: impl AsRef<Path>) -> Result<Self> {
        let manifest = DocumentManifest::from_toml(text)
            .map_err(|e| Error::manifest(PathBuf::from("<inline>"), e))?;
        Self::from_manifest(&manifest, base_dir.as_ref())
    }

    /// Build a document from a decoded manifest.
    pub fn from_manifest(manifest: &DocumentManifest, base_dir: &Path) -> Result<Self> {
        let mut document = Self::new();

        for source in &manifest.stylesheets {
            let mut sheet = match &source.href {
                Some(href) => StyleSheet::from_file(base_dir.join(href))?,
                None => StyleSheet::from_css(source.css.as_deref().unwrap_or_default()),
            };
            if let Some(title) = &source.title {
                sheet = sheet.with_title(title.clone());
            }
            if source.legacy {
                sheet = sheet.with_api(SheetApi::Legacy);
            }
            document.add_style_sheet(sheet);
        }

        tracing::debug!(
            target: targets::DOCUMENT,
            sheets = document.len(),
            "document loaded from manifest"
        );
        Ok(document)
    }

    /// Append a stylesheet and return a shared reference to it.
    pub fn add_style_sheet(&mut self, sheet: StyleSheet) -> StyleSheetRef {
        let sheet = Arc::new(sheet);
        self.style_sheets.push(Arc::clone(&sheet));
        sheet
    }

    /// All stylesheets in load order.
    pub fn style_sheets(&self) -> &[StyleSheetRef] {
        &self.style_sheets
    }

    /// Number of stylesheets.
    pub fn len(&self) -> usize {
        self.style_sheets.len()
    }

    /// Check if the document has no stylesheets.
    pub fn is_empty(&self) -> bool {
        self.style_sheets.is_empty()
    }
}
