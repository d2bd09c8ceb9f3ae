//! Tracing targets used by rulekit.
//!
//! rulekit logs through the `tracing` crate and never installs a
//! subscriber itself. Install one in your application to see the output:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_max_level(tracing::Level::DEBUG)
//!     .init();
//! ```
//!
//! Handle operations never fail loudly, so the debug-level events on
//! [`targets::HANDLE`] are the place to look when a call turned out to be
//! a no-op. The object model logs under
//! [`rulekit_cssom::logging::targets`].

/// Target names for log filtering.
pub mod targets {
    /// Stylesheet handle target: resolution, insertions, deletions, guards.
    pub const HANDLE: &str = "rulekit::handle";
}
