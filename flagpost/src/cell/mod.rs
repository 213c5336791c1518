//! Storage cells backing flag values.
//!
//! Declaration macros place two cells per flag in `static` items: a live
//! cell holding the current value and a shadow cell holding the declared
//! default. Every cell type here is `const`-constructible, so those
//! statics never run code before `main`, and every accessor takes `&self`,
//! so cells can be read and written from any thread.

mod scalar;
mod text;

pub use scalar::{BoolCell, F64Cell, I32Cell, I64Cell, U32Cell, U64Cell};
pub use text::TextCell;
