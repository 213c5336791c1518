//! Runtime type tags and dynamically typed flag values.
//!
//! Flags are stored in typed cells, but the registry surfaces them
//! uniformly: [`FlagKind`] names a flag's storage kind and [`FlagValue`]
//! carries a snapshot of a value of any kind. Typed accessors recover the
//! underlying scalar or text without panicking.

use std::fmt;

/// Type tag identifying the storage kind of a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    /// Boolean flag.
    Bool,
    /// Signed 32-bit integer flag.
    I32,
    /// Unsigned 32-bit integer flag.
    U32,
    /// Signed 64-bit integer flag.
    I64,
    /// Unsigned 64-bit integer flag.
    U64,
    /// 64-bit floating point flag.
    F64,
    /// Text flag.
    Text,
}

impl FlagKind {
    /// Returns the lowercase tag used when naming the kind to humans.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I32 => "int32",
            Self::U32 => "uint32",
            Self::I64 => "int64",
            Self::U64 => "uint64",
            Self::F64 => "double",
            Self::Text => "string",
        }
    }

    /// Reports whether `self` and `other` are the same kind.
    ///
    /// Equivalent to `==` but usable in `const` context, which lets static
    /// initialisers verify kinds at compile time.
    #[must_use]
    pub const fn matches(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Bool, Self::Bool)
                | (Self::I32, Self::I32)
                | (Self::U32, Self::U32)
                | (Self::I64, Self::I64)
                | (Self::U64, Self::U64)
                | (Self::F64, Self::F64)
                | (Self::Text, Self::Text)
        )
    }
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FlagKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.tag())
    }
}

/// A dynamically typed snapshot of a flag's value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FlagValue {
    /// Boolean value.
    Bool(bool),
    /// Signed 32-bit integer value.
    I32(i32),
    /// Unsigned 32-bit integer value.
    U32(u32),
    /// Signed 64-bit integer value.
    I64(i64),
    /// Unsigned 64-bit integer value.
    U64(u64),
    /// 64-bit floating point value.
    F64(f64),
    /// Text value.
    Text(String),
}

macro_rules! scalar_accessor {
    ($(#[$meta:meta])* $accessor:ident, $variant:ident, $value:ty) => {
        $(#[$meta])*
        #[must_use]
        pub const fn $accessor(&self) -> Option<$value> {
            match self {
                Self::$variant(value) => Some(*value),
                _ => None,
            }
        }
    };
}

impl FlagValue {
    /// Returns the kind of value held.
    #[must_use]
    pub const fn kind(&self) -> FlagKind {
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

    scalar_accessor!(
        /// Returns the boolean when the kind is [`FlagKind::Bool`].
        as_bool,
        Bool,
        bool
    );

    scalar_accessor!(
        /// Returns the integer when the kind is [`FlagKind::I32`].
        as_i32,
        I32,
        i32
    );

    scalar_accessor!(
        /// Returns the integer when the kind is [`FlagKind::U32`].
        as_u32,
        U32,
        u32
    );

    scalar_accessor!(
        /// Returns the integer when the kind is [`FlagKind::I64`].
        as_i64,
        I64,
        i64
    );

    scalar_accessor!(
        /// Returns the integer when the kind is [`FlagKind::U64`].
        as_u64,
        U64,
        u64
    );

    scalar_accessor!(
        /// Returns the float when the kind is [`FlagKind::F64`].
        as_f64,
        F64,
        f64
    );

    /// Returns the text when the kind is [`FlagKind::Text`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::I32(value) => write!(f, "{value}"),
            Self::U32(value) => write!(f, "{value}"),
            Self::I64(value) => write!(f, "{value}"),
            Self::U64(value) => write!(f, "{value}"),
            Self::F64(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

macro_rules! value_from {
    ($source:ty, $variant:ident) => {
        impl From<$source> for FlagValue {
            fn from(value: $source) -> Self {
                Self::$variant(value)
            }
        }
    };
}

value_from!(bool, Bool);
value_from!(i32, I32);
value_from!(u32, U32);
value_from!(i64, I64);
value_from!(u64, U64);
value_from!(f64, F64);
value_from!(String, Text);

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}
