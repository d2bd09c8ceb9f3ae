//! Convenience handle for the rules of a loaded stylesheet.
//!
//! A [`StylesheetHandle`] binds once to one stylesheet of a document, found
//! by the end of its href or by its title, and then offers rule-level
//! operations on the sheet's live rule list:
//!
//! - **Lookup**: [`get_rules`](StylesheetHandle::get_rules),
//!   [`get_rules_by_selector_hint`](StylesheetHandle::get_rules_by_selector_hint),
//!   [`includes_rule`](StylesheetHandle::includes_rule)
//! - **Mutation**: insert, delete newest-first, replace
//! - **Properties**: read and guarded write of one style property
//! - **Dumping**: per-rule declaration listings and a whole-sheet `Display`
//! - **Copying**: inject rules from another handle, or clone a whole sheet
//!
//! # Example
//!
//! ```
//! use rulekit::prelude::*;
//!
//! let mut document = Document::new();
//! document.add_style_sheet(StyleSheet::external("/css/tinker.css", ".a { color: red; }"));
//! document.add_style_sheet(StyleSheet::internal("copy", ""));
//!
//! let source = StylesheetHandle::new(&document, &SheetRef::href("tinker.css"));
//! let copy = StylesheetHandle::new(&document, &SheetRef::title("copy"));
//!
//! copy.clone_from_handle(&source);
//! assert_eq!(copy.to_string(), source.to_string());
//! ```

pub mod count;
pub mod handle;
pub mod hint;
pub mod logging;
pub mod property;
pub mod reference;

pub use count::BackCount;
pub use handle::{StyleGuard, StylesheetHandle};
pub use hint::SelectorHint;
pub use reference::SheetRef;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::count::BackCount;
    pub use crate::handle::{StyleGuard, StylesheetHandle};
    pub use crate::hint::{EXACT_MARKER, SelectorHint};
    pub use crate::reference::SheetRef;

    pub use rulekit_cssom::prelude::*;
}
