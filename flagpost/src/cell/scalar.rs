//! Atomic storage cells for scalar flag values.
//!
//! Each cell owns one scalar and is constructible in `const` context, so
//! declaration macros can place cells in `static` items that need no
//! life-before-`main` initialisation. Reads and writes use
//! [`Ordering::Relaxed`]: a flag is an independent value, not a
//! synchronisation point, and callers needing cross-thread ordering must
//! provide their own.

use std::sync::atomic::{AtomicBool, AtomicI32, AtomicI64, AtomicU32, AtomicU64, Ordering};

macro_rules! scalar_cell {
    ($(#[$meta:meta])* $cell:ident, $value:ty, $atomic:ty) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $cell($atomic);

        impl $cell {
            /// Creates a cell holding `value`.
            #[must_use]
            pub const fn new(value: $value) -> Self {
                Self(<$atomic>::new(value))
            }

            /// Returns the stored value.
            #[must_use]
            pub fn get(&self) -> $value {
                self.0.load(Ordering::Relaxed)
            }

            /// Replaces the stored value.
            pub fn set(&self, value: $value) {
                self.0.store(value, Ordering::Relaxed);
            }
        }
    };
}

scalar_cell!(
    /// Storage for a `bool` flag.
    BoolCell,
    bool,
    AtomicBool
);

scalar_cell!(
    /// Storage for an `i32` flag.
    I32Cell,
    i32,
    AtomicI32
);

scalar_cell!(
    /// Storage for a `u32` flag.
    U32Cell,
    u32,
    AtomicU32
);

scalar_cell!(
    /// Storage for an `i64` flag.
    I64Cell,
    i64,
    AtomicI64
);

scalar_cell!(
    /// Storage for a `u64` flag.
    U64Cell,
    u64,
    AtomicU64
);

/// Storage for an `f64` flag.
///
/// The IEEE 754 bit pattern is held in an [`AtomicU64`] so the cell stays
/// `const`-constructible; `to_bits`/`from_bits` round-trip every value,
/// NaN payloads included.
#[derive(Debug)]
pub struct F64Cell(AtomicU64);

impl F64Cell {
    /// Creates a cell holding `value`.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(AtomicU64::new(value.to_bits()))
    }

    /// Returns the stored value.
    #[must_use]
    pub fn get(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }

    /// Replaces the stored value.
    pub fn set(&self, value: f64) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}
