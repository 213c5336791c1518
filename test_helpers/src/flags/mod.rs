//! Helpers for safely mutating flag values in tests.
//!
//! Flags are process-wide state, so tests that write them race with any
//! concurrently running test reading the same flag. Each helper acquires
//! a global re-entrant mutex for the duration of the write, returning an
//! RAII guard that:
//! - Restores the prior value when dropped.
//! - Re-acquires the mutex during restoration to avoid overlapping
//!   writes.
//!
//! Behaviour:
//! - Stacking multiple guards for the same flag is supported and restores
//!   in LIFO order.
//! - Writes to different flags may interleave between guard creation and
//!   drop; use [`lock`] when a test needs exclusive access across several
//!   operations.
//!
//! # Examples
//!
//! ```
//! use flagpost::FlagValue;
//! use flagpost_test_helpers::flags;
//!
//! flagpost::define_u32!(helper_doc_threads, 4, "Worker thread count");
//!
//! fn main() {
//!     let flag = flagpost::find("helper_doc_threads").expect("declared above");
//!     let _g = flags::set(flag, FlagValue::U32(8)).expect("matching kind");
//!     assert_eq!(FLAGS_helper_doc_threads.get(), 8);
//! }
//! ```

use std::fmt;
use std::sync::LazyLock;

use flagpost::{FlagDescriptor, FlagError, FlagValue};
use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

static FLAG_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// Helper for replacing a flag's value when the lock is already held.
fn set_locked(
    flag: &'static FlagDescriptor,
    value: FlagValue,
    _guard: &ReentrantMutexGuard<'static, ()>,
) -> Result<FlagValueGuard, FlagError> {
    let original = flag.value();
    flag.set_value(value)?;
    Ok(FlagValueGuard { flag, original })
}

/// Helper for resetting a flag when the lock is already held.
fn reset_locked(
    flag: &'static FlagDescriptor,
    _guard: &ReentrantMutexGuard<'static, ()>,
) -> FlagValueGuard {
    let original = flag.value();
    flag.reset();
    FlagValueGuard { flag, original }
}

/// RAII guard restoring a flag to its prior value on drop.
#[must_use = "dropping restores the prior value"]
pub struct FlagValueGuard {
    flag: &'static FlagDescriptor,
    original: FlagValue,
}

impl fmt::Debug for FlagValueGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagValueGuard")
            .field("flag", &self.flag.name())
            .field("original", &self.original)
            .finish_non_exhaustive()
    }
}

impl Drop for FlagValueGuard {
    fn drop(&mut self) {
        let _guard = FLAG_MUTEX.lock();
        let original = self.original.clone();
        #[expect(
            clippy::let_underscore_must_use,
            reason = "the captured value always matches the flag's kind"
        )]
        let _ = self.flag.set_value(original);
    }
}

/// RAII guard that serialises flag writes for its lifetime.
///
/// Use this when a test needs exclusive access across multiple writes,
/// such as asserting registry-wide state while several flags are moved
/// off their defaults.
#[must_use = "dropping releases the flag lock"]
pub struct FlagLock {
    guard: ReentrantMutexGuard<'static, ()>,
}

impl FlagLock {
    /// Replaces a flag's value while holding the global lock.
    ///
    /// # Errors
    /// Returns [`FlagError::TypeMismatch`] when `value` does not match the
    /// flag's declared kind; the flag is left unchanged.
    pub fn set(
        &self,
        flag: &'static FlagDescriptor,
        value: FlagValue,
    ) -> Result<FlagValueGuard, FlagError> {
        set_locked(flag, value, &self.guard)
    }

    /// Resets a flag to its declared default while holding the global
    /// lock.
    pub fn reset(&self, flag: &'static FlagDescriptor) -> FlagValueGuard {
        reset_locked(flag, &self.guard)
    }
}

/// Replaces a flag's value and returns a guard restoring the prior value.
///
/// # Errors
/// Returns [`FlagError::TypeMismatch`] when `value` does not match the
/// flag's declared kind; the flag is left unchanged and no guard is
/// produced.
///
/// # Examples
/// ```
/// use flagpost::FlagValue;
/// use flagpost_test_helpers::flags;
///
/// flagpost::define_bool!(helper_doc_dry_run, false, "Skip side effects");
///
/// fn main() {
///     let flag = flagpost::find("helper_doc_dry_run").expect("declared above");
///     let _g = flags::set(flag, FlagValue::Bool(true)).expect("matching kind");
///     assert!(FLAGS_helper_doc_dry_run.get());
///     // Dropping `_g` restores the prior value.
/// }
/// ```
pub fn set(
    flag: &'static FlagDescriptor,
    value: FlagValue,
) -> Result<FlagValueGuard, FlagError> {
    let guard = FLAG_MUTEX.lock();
    set_locked(flag, value, &guard)
}

/// Resets a flag to its declared default and returns a guard restoring
/// the pre-reset value.
pub fn reset(flag: &'static FlagDescriptor) -> FlagValueGuard {
    let guard = FLAG_MUTEX.lock();
    reset_locked(flag, &guard)
}

/// Acquire the global flag lock for the lifetime of the guard.
///
/// # Examples
/// ```
/// use flagpost_test_helpers::flags;
///
/// let _lock = flags::lock();
/// // Flag writes stay serialised while `_lock` is alive.
/// ```
pub fn lock() -> FlagLock {
    FlagLock {
        guard: FLAG_MUTEX.lock(),
    }
}

/// Run a closure while holding the global flag lock.
///
/// # Examples
/// ```
/// use flagpost_test_helpers::flags;
///
/// let observed = flags::with_lock(|| flagpost::registry().len());
/// assert_eq!(observed, flagpost::iter().count());
/// ```
pub fn with_lock<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = FLAG_MUTEX.lock();
    f()
}
