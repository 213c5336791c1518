//! Fixture crate declaring flags for the flagpost integration tests.
//!
//! Declaring flags from a separate crate exercises cross-crate
//! registration: the tests observe these flags through the registry even
//! though no code in this crate runs before they look.

flagpost::define_bool!(fixture_logging, true, "Enable fixture logging output");
flagpost::define_i32!(fixture_retries, 3, "Attempts before the fixture gives up");
flagpost::define_u32!(fixture_threads, 8, "Worker threads in the fixture pool");
flagpost::define_i64!(
    fixture_epoch_offset,
    -40_000_000_000,
    "Offset applied to fixture timestamps"
);
flagpost::define_u64!(
    fixture_capacity,
    5_000_000_000,
    "Fixture cache capacity in bytes"
);
flagpost::define_f64!(
    fixture_sample_rate,
    0.25,
    "Fraction of fixture events sampled"
);
flagpost::define_text!(
    fixture_greeting,
    "hello from the fixture",
    "Greeting the fixture prints"
);

/// Names of every flag this crate declares, in declaration order.
#[must_use]
pub const fn declared_names() -> [&'static str; 7] {
    [
        "fixture_logging",
        "fixture_retries",
        "fixture_threads",
        "fixture_epoch_offset",
        "fixture_capacity",
        "fixture_sample_rate",
        "fixture_greeting",
    ]
}

/// Reads the fixture greeting through its live cell.
#[must_use]
pub fn greeting() -> String {
    FLAGS_fixture_greeting.get()
}
