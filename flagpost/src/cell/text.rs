//! Lazily initialised storage for text flag values.
//!
//! A text cell is `const`-constructible from its seed literal, so text
//! flags keep the same static-initialisation guarantees as scalar flags.
//! The owned [`String`] is materialised on first access, which means a
//! read that happens before `main` observes the declared default rather
//! than an empty or uninitialised buffer.

use std::sync::{OnceLock, PoisonError, RwLock};

/// Storage for a text flag.
///
/// Holds the declared default as a `&'static str` seed and promotes it to
/// an owned, lockable [`String`] on the first read or write.
#[derive(Debug)]
pub struct TextCell {
    seed: &'static str,
    slot: OnceLock<RwLock<String>>,
}

impl TextCell {
    /// Creates a cell seeded with `value`.
    #[must_use]
    pub const fn new(value: &'static str) -> Self {
        Self {
            seed: value,
            slot: OnceLock::new(),
        }
    }

    /// Returns the seed literal the cell was declared with.
    ///
    /// The seed never changes; [`TextCell::get`] reflects later writes.
    #[must_use]
    pub const fn seed(&self) -> &'static str {
        self.seed
    }

    fn slot(&self) -> &RwLock<String> {
        self.slot.get_or_init(|| RwLock::new(self.seed.to_owned()))
    }

    /// Returns a clone of the stored text.
    #[must_use]
    pub fn get(&self) -> String {
        let guard = self.slot().read().unwrap_or_else(PoisonError::into_inner);
        guard.clone()
    }

    /// Replaces the stored text.
    pub fn set(&self, value: impl Into<String>) {
        let mut guard = self.slot().write().unwrap_or_else(PoisonError::into_inner);
        *guard = value.into();
    }
}
