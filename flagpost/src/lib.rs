//! Startup-safe definition and registration of typed program flags.
//!
//! Any crate linked into a program can declare a named, typed flag with a
//! default and a help string. A declaration expands to `const`-initialised
//! static storage plus a link-time registry entry, so every flag is
//! readable and fully registered before `main` with no reliance on
//! initialisation order between crates or modules.
//!
//! ```
//! flagpost::define_bool!(verbose, false, "Emit per-step diagnostics");
//! flagpost::define_text!(greeting, "hello", "Greeting printed at startup");
//!
//! fn main() {
//!     // Direct, typed access through the generated statics.
//!     assert!(!FLAGS_verbose.get());
//!     FLAGS_verbose.set(true);
//!     assert!(FLAGS_verbose.get());
//!
//!     // Dynamic, name-based access through the registry.
//!     let flag = flagpost::find("greeting").expect("declared above");
//!     assert_eq!(flag.type_tag(), "string");
//!     assert_eq!(flag.value().as_str(), Some("hello"));
//!     assert_eq!(flagpost::iter().count(), 2);
//! }
//! ```
//!
//! # Reading and writing
//!
//! Each declaration exports two statics with unmangled names: the live
//! cell `FLAGS_<name>`, read and written directly, and the shadow cell
//! `FLAGS_no<name>` holding the declared default. The live cell is the
//! fast path; [`find`], [`iter`] and [`FlagRegistry`] provide dynamic
//! access for listing and tooling.
//!
//! # Name collisions
//!
//! The exported symbols double as a program-wide uniqueness check:
//! declaring the same flag name twice, in any two crates or modules,
//! fails the build rather than producing two flags.
//!
//! ```compile_fail
//! mod feature_a {
//!     flagpost::define_u32!(threads, 4, "Worker thread count");
//! }
//! mod feature_b {
//!     flagpost::define_u32!(threads, 8, "Colliding declaration");
//! }
//! fn main() {}
//! ```
//!
//! # Stripping help text
//!
//! Builds with the `strip-help` feature enabled replace every declared
//! help string with [`help::STRIPPED_HELP`], keeping the original text
//! out of the shipped binary. Cargo feature unification makes the effect
//! program-wide.

pub mod cell;
mod descriptor;
mod error;
pub mod guard;
pub mod help;
mod macros;
pub mod registry;
#[cfg(feature = "serde")]
mod snapshot;
mod value;

pub use descriptor::{CellRef, FlagDescriptor};
pub use error::FlagError;
pub use registry::{FlagRegistry, NameCollision, registry};
#[cfg(feature = "serde")]
pub use snapshot::FlagInfo;
pub use value::{FlagKind, FlagValue};

#[doc(hidden)]
pub mod __private {
    //! Re-exports used by the declaration macros; not public API.
    pub use linkme;
    pub use paste;
}

/// Looks up a registered flag by name.
#[must_use]
pub fn find(name: &str) -> Option<&'static FlagDescriptor> {
    registry().find(name)
}

/// Iterates every registered flag in name order.
pub fn iter() -> impl Iterator<Item = &'static FlagDescriptor> {
    registry().iter()
}
