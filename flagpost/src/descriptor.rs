//! Flag descriptors and typed references to their storage cells.
//!
//! A [`FlagDescriptor`] is the registry's record of one declared flag: its
//! name, help, declaring file, and two [`CellRef`]s pointing at the live
//! and default storage cells. Descriptors are built in `static`
//! initialisers by the declaration macros and live for the whole program.

use std::fmt;

use crate::cell::{BoolCell, F64Cell, I32Cell, I64Cell, TextCell, U32Cell, U64Cell};
use crate::error::FlagError;
use crate::value::{FlagKind, FlagValue};

/// A typed reference to one storage cell.
#[derive(Clone, Copy, Debug)]
pub enum CellRef {
    /// Reference to boolean storage.
    Bool(&'static BoolCell),
    /// Reference to signed 32-bit integer storage.
    I32(&'static I32Cell),
    /// Reference to unsigned 32-bit integer storage.
    U32(&'static U32Cell),
    /// Reference to signed 64-bit integer storage.
    I64(&'static I64Cell),
    /// Reference to unsigned 64-bit integer storage.
    U64(&'static U64Cell),
    /// Reference to 64-bit floating point storage.
    F64(&'static F64Cell),
    /// Reference to text storage.
    Text(&'static TextCell),
}

impl CellRef {
    /// Returns the kind of value the referenced cell stores.
    #[must_use]
    pub const fn kind(self) -> FlagKind {
        match self {
            Self::Bool(_) => FlagKind::Bool,
            Self::I32(_) => FlagKind::I32,
            Self::U32(_) => FlagKind::U32,
            Self::I64(_) => FlagKind::I64,
            Self::U64(_) => FlagKind::U64,
            Self::F64(_) => FlagKind::F64,
            Self::Text(_) => FlagKind::Text,
        }
    }

    /// Returns a snapshot of the referenced cell's value.
    #[must_use]
    pub fn value(self) -> FlagValue {
        match self {
            Self::Bool(cell) => FlagValue::Bool(cell.get()),
            Self::I32(cell) => FlagValue::I32(cell.get()),
            Self::U32(cell) => FlagValue::U32(cell.get()),
            Self::I64(cell) => FlagValue::I64(cell.get()),
            Self::U64(cell) => FlagValue::U64(cell.get()),
            Self::F64(cell) => FlagValue::F64(cell.get()),
            Self::Text(cell) => FlagValue::Text(cell.get()),
        }
    }

    fn copy_from(self, source: Self) {
        match (self, source) {
            (Self::Bool(target), Self::Bool(origin)) => target.set(origin.get()),
            (Self::I32(target), Self::I32(origin)) => target.set(origin.get()),
            (Self::U32(target), Self::U32(origin)) => target.set(origin.get()),
            (Self::I64(target), Self::I64(origin)) => target.set(origin.get()),
            (Self::U64(target), Self::U64(origin)) => target.set(origin.get()),
            (Self::F64(target), Self::F64(origin)) => target.set(origin.get()),
            (Self::Text(target), Self::Text(origin)) => target.set(origin.get()),
            (target, origin) => tracing::warn!(
                expected = target.kind().tag(),
                found = origin.kind().tag(),
                "mismatched storage cells; value left unchanged"
            ),
        }
    }
}

/// Everything the registry knows about one declared flag.
pub struct FlagDescriptor {
    name: &'static str,
    help: &'static str,
    file: &'static str,
    current: CellRef,
    default: CellRef,
}

impl FlagDescriptor {
    /// Builds a descriptor from its parts.
    ///
    /// `current` is the live cell read and written at runtime; `default`
    /// is the shadow cell holding the declared default and is never
    /// written after construction.
    ///
    /// # Panics
    /// Panics when `current` and `default` store different kinds. In the
    /// `static` initialisers produced by the declaration macros this is
    /// evaluated at compile time, so a mismatch fails the build.
    #[must_use]
    pub const fn new(
        name: &'static str,
        help: &'static str,
        file: &'static str,
        current: CellRef,
        default: CellRef,
    ) -> Self {
        assert!(
            current.kind().matches(default.kind()),
            "a flag's live and default cells must store the same kind"
        );
        Self {
            name,
            help,
            file,
            current,
            default,
        }
    }

    /// Returns the flag's declared name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the flag's help text.
    ///
    /// Builds with the `strip-help` feature enabled see
    /// [`STRIPPED_HELP`](crate::help::STRIPPED_HELP) here instead of the
    /// declared text.
    #[must_use]
    pub const fn help(&self) -> &'static str {
        self.help
    }

    /// Returns the source file that declared the flag.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Returns the flag's storage kind.
    #[must_use]
    pub const fn kind(&self) -> FlagKind {
        self.current.kind()
    }

    /// Returns the lowercase type tag, e.g. `"int32"`.
    #[must_use]
    pub const fn type_tag(&self) -> &'static str {
        self.kind().tag()
    }

    /// Returns the live cell reference.
    #[must_use]
    pub const fn current(&self) -> CellRef {
        self.current
    }

    /// Returns the default cell reference.
    #[must_use]
    pub const fn default(&self) -> CellRef {
        self.default
    }

    /// Returns a snapshot of the current value.
    #[must_use]
    pub fn value(&self) -> FlagValue {
        self.current.value()
    }

    /// Returns a snapshot of the declared default.
    #[must_use]
    pub fn default_value(&self) -> FlagValue {
        self.default.value()
    }

    /// Reports whether the current value equals the declared default.
    ///
    /// Comparison is by value, so an `f64` flag whose default is NaN never
    /// reports as default.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.value() == self.default_value()
    }

    /// Replaces the current value.
    ///
    /// # Errors
    /// Returns [`FlagError::TypeMismatch`] when `value` does not match the
    /// flag's declared kind; the stored value is left unchanged.
    pub fn set_value(&self, value: FlagValue) -> Result<(), FlagError> {
        match (self.current, value) {
            (CellRef::Bool(cell), FlagValue::Bool(requested)) => cell.set(requested),
            (CellRef::I32(cell), FlagValue::I32(requested)) => cell.set(requested),
            (CellRef::U32(cell), FlagValue::U32(requested)) => cell.set(requested),
            (CellRef::I64(cell), FlagValue::I64(requested)) => cell.set(requested),
            (CellRef::U64(cell), FlagValue::U64(requested)) => cell.set(requested),
            (CellRef::F64(cell), FlagValue::F64(requested)) => cell.set(requested),
            (CellRef::Text(cell), FlagValue::Text(requested)) => cell.set(requested),
            (_, rejected) => {
                return Err(FlagError::TypeMismatch {
                    name: self.name.to_owned(),
                    expected: self.kind(),
                    actual: rejected.kind(),
                });
            }
        }
        Ok(())
    }

    /// Restores the current value to the declared default.
    pub fn reset(&self) {
        self.current.copy_from(self.default);
    }
}

impl fmt::Debug for FlagDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .field("file", &self.file)
            .finish_non_exhaustive()
    }
}
