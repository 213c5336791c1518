//! Declaration macros for defining flags.
//!
//! Each `define_*!` invocation expands, at module scope, to three items:
//!
//! * `FLAGS_<name>`, the live storage cell read and written at runtime;
//! * `FLAGS_no<name>`, a shadow cell holding the declared default;
//! * a private [`FlagDescriptor`](crate::FlagDescriptor) contributed to
//!   the [`FLAGS`](crate::registry::FLAGS) distributed slice.
//!
//! Both cells are exported with unmangled symbol names. Exporting the
//! default under `FLAGS_no<name>` means two declarations of the same name
//! anywhere in a program collide at the symbol level, so a duplicate flag
//! is a build failure rather than a runtime surprise.

/// Implementation detail of the `define_*!` macros.
#[doc(hidden)]
#[macro_export]
macro_rules! __define_flag {
    ($cell:ident, $variant:ident, $ty:ty, $name:ident, $default:expr, $help:expr) => {
        $crate::__private::paste::paste! {
            #[allow(non_upper_case_globals)]
            const [<FLAGS_nono $name>]: $ty = $default;

            #[doc = concat!("Live value of the `", stringify!($name), "` flag.")]
            #[allow(non_upper_case_globals)]
            #[unsafe(no_mangle)]
            pub static [<FLAGS_ $name>]: $crate::cell::$cell =
                $crate::cell::$cell::new([<FLAGS_nono $name>]);

            #[doc = concat!(
                "Declared default of the `",
                stringify!($name),
                "` flag; never written after startup."
            )]
            #[allow(non_upper_case_globals)]
            #[unsafe(no_mangle)]
            pub static [<FLAGS_no $name>]: $crate::cell::$cell =
                $crate::cell::$cell::new([<FLAGS_nono $name>]);

            #[$crate::__private::linkme::distributed_slice($crate::registry::FLAGS)]
            #[linkme(crate = $crate::__private::linkme)]
            #[allow(non_upper_case_globals)]
            static [<__FLAGPOST_REGISTERER_ $name>]: $crate::FlagDescriptor =
                $crate::FlagDescriptor::new(
                    stringify!($name),
                    $crate::help::maybe_stripped($help),
                    file!(),
                    $crate::CellRef::$variant(&[<FLAGS_ $name>]),
                    $crate::CellRef::$variant(&[<FLAGS_no $name>]),
                );
        }
    };
}

/// Defines a boolean flag.
///
/// ```
/// flagpost::define_bool!(verbose, false, "Emit per-step diagnostics");
///
/// fn main() {
///     assert!(!FLAGS_verbose.get());
///     FLAGS_verbose.set(true);
///     assert!(FLAGS_verbose.get());
///     assert!(!FLAGS_noverbose.get());
/// }
/// ```
///
/// The default must be a genuine `bool`; values that are merely
/// convertible are rejected at compile time:
///
/// ```compile_fail
/// flagpost::define_bool!(cache, 1, "Enable the cache");
/// fn main() {}
/// ```
///
/// Because the default is exported as `FLAGS_no<name>`, a flag may not
/// share its name with the negation of another flag, wherever the two are
/// declared:
///
/// ```compile_fail
/// mod first {
///     flagpost::define_bool!(enabled, true, "Enable the feature");
/// }
/// mod second {
///     flagpost::define_bool!(noenabled, true, "Colliding name");
/// }
/// fn main() {}
/// ```
#[macro_export]
macro_rules! define_bool {
    ($name:ident, $default:expr, $help:expr $(,)?) => {
        $crate::__define_flag!(
            BoolCell,
            Bool,
            bool,
            $name,
            $crate::guard::bool_flag_default($default),
            $help
        );
    };
}

/// Defines a signed 32-bit integer flag.
///
/// ```
/// flagpost::define_i32!(retries, 3, "Attempts before giving up");
///
/// fn main() {
///     assert_eq!(FLAGS_retries.get(), 3);
///     FLAGS_retries.set(5);
///     assert_eq!(FLAGS_retries.get(), 5);
///     assert_eq!(FLAGS_noretries.get(), 3);
/// }
/// ```
#[macro_export]
macro_rules! define_i32 {
    ($name:ident, $default:expr, $help:expr $(,)?) => {
        $crate::__define_flag!(I32Cell, I32, i32, $name, $default, $help);
    };
}

/// Defines an unsigned 32-bit integer flag.
#[macro_export]
macro_rules! define_u32 {
    ($name:ident, $default:expr, $help:expr $(,)?) => {
        $crate::__define_flag!(U32Cell, U32, u32, $name, $default, $help);
    };
}

/// Defines a signed 64-bit integer flag.
#[macro_export]
macro_rules! define_i64 {
    ($name:ident, $default:expr, $help:expr $(,)?) => {
        $crate::__define_flag!(I64Cell, I64, i64, $name, $default, $help);
    };
}

/// Defines an unsigned 64-bit integer flag.
#[macro_export]
macro_rules! define_u64 {
    ($name:ident, $default:expr, $help:expr $(,)?) => {
        $crate::__define_flag!(U64Cell, U64, u64, $name, $default, $help);
    };
}

/// Defines a 64-bit floating point flag.
#[macro_export]
macro_rules! define_f64 {
    ($name:ident, $default:expr, $help:expr $(,)?) => {
        $crate::__define_flag!(F64Cell, F64, f64, $name, $default, $help);
    };
}

/// Defines a text flag.
///
/// Text storage is seeded with the declared literal and only promoted to
/// an owned string on first access, so reads that happen before `main`
/// still observe the default.
///
/// ```
/// flagpost::define_text!(greeting, "hello", "Greeting printed at startup");
///
/// fn main() {
///     assert_eq!(FLAGS_greeting.get(), "hello");
///     FLAGS_greeting.set("good evening");
///     assert_eq!(FLAGS_greeting.get(), "good evening");
///     assert_eq!(FLAGS_nogreeting.seed(), "hello");
/// }
/// ```
///
/// The default must be a string; in particular `0` is not an empty
/// string:
///
/// ```compile_fail
/// flagpost::define_text!(greeting, 0, "Numeric defaults are rejected");
/// fn main() {}
/// ```
#[macro_export]
macro_rules! define_text {
    ($name:ident, $default:expr, $help:expr $(,)?) => {
        $crate::__define_flag!(
            TextCell,
            Text,
            &'static str,
            $name,
            $crate::guard::text_flag_default($default),
            $help
        );
    };
}
