//! Compile-time guards applied to declared defaults.
//!
//! Each declaration macro funnels its default expression through one of
//! these `const` functions. The guards add no runtime behaviour; they
//! exist so a default of the wrong shape is rejected when the flag is
//! compiled instead of misbehaving when it is read.

/// Passes a `bool` default through unchanged.
///
/// Rust performs no implicit conversions here, so anything that is not
/// exactly a `bool` fails to compile:
///
/// ```
/// const DEFAULT: bool = flagpost::guard::bool_flag_default(true);
/// assert!(DEFAULT);
/// ```
///
/// ```compile_fail
/// const DEFAULT: bool = flagpost::guard::bool_flag_default(1);
/// ```
///
/// ```compile_fail
/// const DEFAULT: bool = flagpost::guard::bool_flag_default(&true);
/// ```
#[must_use]
pub const fn bool_flag_default(value: bool) -> bool {
    value
}

/// Passes a text default through unchanged.
///
/// Only `&'static str` expressions are accepted; in particular a numeric
/// `0` is not an empty string:
///
/// ```
/// const DEFAULT: &str = flagpost::guard::text_flag_default("");
/// assert!(DEFAULT.is_empty());
/// ```
///
/// ```compile_fail
/// const DEFAULT: &str = flagpost::guard::text_flag_default(0);
/// ```
#[must_use]
pub const fn text_flag_default(value: &'static str) -> &'static str {
    value
}
