//! Tracing targets used by the object model.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Rule text parsing: dropped rules and declarations.
    pub const PARSER: &str = "rulekit_cssom::parser";
    /// Rule list mutations and sheet loading.
    pub const SHEET: &str = "rulekit_cssom::sheet";
    /// Manifest loading.
    pub const DOCUMENT: &str = "rulekit_cssom::document";
    /// Style map writes that were refused.
    pub const STYLE: &str = "rulekit_cssom::style";
}
