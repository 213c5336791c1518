//! Help-text handling, including build-time stripping.
//!
//! Enabling the `strip-help` cargo feature replaces the help text of
//! every declared flag with [`STRIPPED_HELP`]. Cargo unifies features
//! across a build graph, so enabling the feature on any dependency strips
//! help program-wide; there is no per-crate opt-out.

/// Replacement help installed when the `strip-help` feature is enabled.
///
/// The value is deliberately distinctive so listing tools can recognise a
/// stripped entry rather than rendering an empty column.
pub const STRIPPED_HELP: &str = "\u{1}\u{2}\u{3}\u{4} (unknown) \u{4}\u{3}\u{2}\u{1}";

/// Applies the `strip-help` feature to one declared help string.
///
/// Identity when the feature is disabled; otherwise every declaration's
/// help collapses to [`STRIPPED_HELP`] and the declared text stays out of
/// the binary.
#[must_use]
pub const fn maybe_stripped(help: &'static str) -> &'static str {
    if cfg!(feature = "strip-help") {
        STRIPPED_HELP
    } else {
        help
    }
}
