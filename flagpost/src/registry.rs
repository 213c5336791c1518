//! Process-wide collection of every registered flag.
//!
//! Declaring a flag contributes a [`FlagDescriptor`] to the [`FLAGS`]
//! distributed slice. The linker assembles the slice, so the full set of
//! flags exists before `main` and registration can never fail or race at
//! runtime. [`FlagRegistry`] is a name-indexed view over that slice,
//! built once on first use.
//!
//! Duplicate names cannot arise from the declaration macros (the build
//! fails first), but manually constructed slice entries may collide. The
//! registry keeps the first descriptor per name, records the rest as
//! [`NameCollision`]s, and logs a warning for each.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::sync::LazyLock;

use linkme::distributed_slice;

use crate::descriptor::FlagDescriptor;
use crate::error::FlagError;
use crate::value::FlagValue;

/// Distributed slice gathering every flag descriptor linked into the
/// program.
///
/// The declaration macros contribute one entry per flag; manually built
/// descriptors may be added with `#[distributed_slice(FLAGS)]`. Element
/// order is decided by the linker and carries no meaning.
#[distributed_slice]
pub static FLAGS: [FlagDescriptor];

static REGISTRY: LazyLock<FlagRegistry> = LazyLock::new(|| FlagRegistry::from_slice(&FLAGS));

/// Returns the process-wide registry, indexing the linked flags on first
/// use.
#[must_use]
pub fn registry() -> &'static FlagRegistry {
    &REGISTRY
}

/// Record of a flag name claimed by more than one descriptor.
#[derive(Clone, Copy, Debug)]
pub struct NameCollision {
    /// The contested flag name.
    pub name: &'static str,
    /// The descriptor that kept the name.
    pub kept: &'static FlagDescriptor,
    /// The descriptor that was ignored.
    pub ignored: &'static FlagDescriptor,
}

/// Name-indexed view over the registered flags.
pub struct FlagRegistry {
    by_name: BTreeMap<&'static str, &'static FlagDescriptor>,
    collisions: Vec<NameCollision>,
}

impl FlagRegistry {
    fn from_slice(descriptors: &'static [FlagDescriptor]) -> Self {
        let mut by_name = BTreeMap::new();
        let mut collisions = Vec::new();
        for descriptor in descriptors {
            match by_name.entry(descriptor.name()) {
                Entry::Vacant(slot) => {
                    slot.insert(descriptor);
                }
                Entry::Occupied(existing) => {
                    let collision = NameCollision {
                        name: descriptor.name(),
                        kept: *existing.get(),
                        ignored: descriptor,
                    };
                    tracing::warn!(
                        name = collision.name,
                        kept = collision.kept.file(),
                        ignored = collision.ignored.file(),
                        "duplicate flag name; keeping the first registration"
                    );
                    collisions.push(collision);
                }
            }
        }
        Self {
            by_name,
            collisions,
        }
    }

    /// Looks up a flag by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&'static FlagDescriptor> {
        self.by_name.get(name).copied()
    }

    /// Iterates the registered flags in name order.
    pub fn iter(&self) -> impl Iterator<Item = &'static FlagDescriptor> + '_ {
        self.by_name.values().copied()
    }

    /// Number of distinct flag names registered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Reports whether no flags are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Duplicate registrations observed while indexing, in link order.
    #[must_use]
    pub fn collisions(&self) -> &[NameCollision] {
        &self.collisions
    }

    /// Returns the current value of the named flag.
    ///
    /// # Errors
    /// Returns [`FlagError::UnknownFlag`] when no flag has that name.
    pub fn value_of(&self, name: &str) -> Result<FlagValue, FlagError> {
        self.find(name)
            .map(FlagDescriptor::value)
            .ok_or_else(|| FlagError::UnknownFlag(name.to_owned()))
    }

    /// Replaces the current value of the named flag.
    ///
    /// # Errors
    /// Returns [`FlagError::UnknownFlag`] when no flag has that name and
    /// [`FlagError::TypeMismatch`] when the value's kind differs from the
    /// flag's declared kind.
    pub fn set(&self, name: &str, value: FlagValue) -> Result<(), FlagError> {
        self.find(name)
            .ok_or_else(|| FlagError::UnknownFlag(name.to_owned()))?
            .set_value(value)
    }

    /// Restores the named flag to its declared default.
    ///
    /// # Errors
    /// Returns [`FlagError::UnknownFlag`] when no flag has that name.
    pub fn reset(&self, name: &str) -> Result<(), FlagError> {
        self.find(name)
            .map(FlagDescriptor::reset)
            .ok_or_else(|| FlagError::UnknownFlag(name.to_owned()))
    }
}

impl fmt::Debug for FlagRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagRegistry")
            .field("flags", &self.len())
            .field("collisions", &self.collisions.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "tests panic to surface unexpected failures"
    )]

    use crate::cell::{BoolCell, I32Cell, TextCell};
    use crate::descriptor::CellRef;
    use crate::error::FlagError;
    use crate::value::{FlagKind, FlagValue};

    use super::{FlagDescriptor, FlagRegistry, registry};

    static VERBOSE_LIVE: BoolCell = BoolCell::new(false);
    static VERBOSE_SHADOW: BoolCell = BoolCell::new(false);
    static RETRIES_LIVE: I32Cell = I32Cell::new(2);
    static RETRIES_SHADOW: I32Cell = I32Cell::new(2);
    static MODE_LIVE: TextCell = TextCell::new("fast");
    static MODE_SHADOW: TextCell = TextCell::new("fast");

    static DESCRIPTORS: [FlagDescriptor; 3] = [
        FlagDescriptor::new(
            "verbose",
            "Emit per-step diagnostics",
            "src/a.rs",
            CellRef::Bool(&VERBOSE_LIVE),
            CellRef::Bool(&VERBOSE_SHADOW),
        ),
        FlagDescriptor::new(
            "retries",
            "Attempts before giving up",
            "src/b.rs",
            CellRef::I32(&RETRIES_LIVE),
            CellRef::I32(&RETRIES_SHADOW),
        ),
        FlagDescriptor::new(
            "mode",
            "Scheduling mode",
            "src/c.rs",
            CellRef::Text(&MODE_LIVE),
            CellRef::Text(&MODE_SHADOW),
        ),
    ];

    fn indexed() -> FlagRegistry {
        FlagRegistry::from_slice(&DESCRIPTORS)
    }

    #[test]
    fn find_is_keyed_by_name() {
        let flags = indexed();
        let found = flags.find("retries").expect("registered flag resolves");
        assert_eq!(found.name(), "retries");
        assert_eq!(found.kind(), FlagKind::I32);
        assert!(flags.find("absent").is_none());
    }

    #[test]
    fn iteration_is_in_name_order() {
        let flags = indexed();
        let names: Vec<_> = flags.iter().map(FlagDescriptor::name).collect();
        assert_eq!(names, ["mode", "retries", "verbose"]);
        assert_eq!(flags.len(), 3);
        assert!(!flags.is_empty());
        assert!(flags.collisions().is_empty());
    }

    #[test]
    fn first_registration_wins_a_contested_name() {
        static FIRST_LIVE: I32Cell = I32Cell::new(1);
        static FIRST_SHADOW: I32Cell = I32Cell::new(1);
        static SECOND_LIVE: I32Cell = I32Cell::new(9);
        static SECOND_SHADOW: I32Cell = I32Cell::new(9);
        static CONTESTED: [FlagDescriptor; 2] = [
            FlagDescriptor::new(
                "budget",
                "First declaration",
                "src/first.rs",
                CellRef::I32(&FIRST_LIVE),
                CellRef::I32(&FIRST_SHADOW),
            ),
            FlagDescriptor::new(
                "budget",
                "Second declaration",
                "src/second.rs",
                CellRef::I32(&SECOND_LIVE),
                CellRef::I32(&SECOND_SHADOW),
            ),
        ];

        let flags = FlagRegistry::from_slice(&CONTESTED);
        assert_eq!(flags.len(), 1);
        let kept = flags.find("budget").expect("contested name still resolves");
        assert_eq!(kept.file(), "src/first.rs");

        let collision = flags
            .collisions()
            .first()
            .expect("the duplicate is recorded");
        assert_eq!(collision.name, "budget");
        assert_eq!(collision.kept.file(), "src/first.rs");
        assert_eq!(collision.ignored.file(), "src/second.rs");
    }

    #[test]
    fn named_access_reads_and_writes_the_live_cell() {
        static LIVE: I32Cell = I32Cell::new(10);
        static SHADOW: I32Cell = I32Cell::new(10);
        static ONE: [FlagDescriptor; 1] = [FlagDescriptor::new(
            "limit",
            "Upper bound",
            "src/limit.rs",
            CellRef::I32(&LIVE),
            CellRef::I32(&SHADOW),
        )];

        let flags = FlagRegistry::from_slice(&ONE);
        assert_eq!(
            flags.value_of("limit").expect("registered flag resolves"),
            FlagValue::I32(10)
        );

        flags
            .set("limit", FlagValue::I32(99))
            .expect("matching kind is accepted");
        assert_eq!(LIVE.get(), 99);

        flags.reset("limit").expect("registered flag resolves");
        assert_eq!(LIVE.get(), 10);
    }

    #[test]
    fn named_access_reports_precise_errors() {
        let flags = indexed();

        assert!(matches!(
            flags.value_of("absent"),
            Err(FlagError::UnknownFlag(name)) if name == "absent"
        ));
        assert!(matches!(
            flags.reset("absent"),
            Err(FlagError::UnknownFlag(_))
        ));
        assert!(matches!(
            flags.set("mode", FlagValue::Bool(true)),
            Err(FlagError::TypeMismatch {
                expected: FlagKind::Text,
                actual: FlagKind::Bool,
                ..
            })
        ));
    }

    #[test]
    fn library_itself_declares_no_flags() {
        assert!(registry().is_empty());
        assert!(registry().collisions().is_empty());
    }
}
