//! Error types surfaced by the flag registry.

use thiserror::Error;

use crate::value::FlagKind;

/// Errors produced when resolving or assigning flags by name.
///
/// Declaring a flag cannot fail at runtime; errors arise only from the
/// dynamic registry surface.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlagError {
    /// No flag with the requested name is registered.
    #[error("unknown flag: {0}")]
    UnknownFlag(String),

    /// The supplied value's kind does not match the flag's declared kind.
    #[error("type mismatch for flag `{name}`: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Name of the flag being assigned.
        name: String,
        /// The flag's declared kind.
        expected: FlagKind,
        /// The kind of the rejected value.
        actual: FlagKind,
    },
}
