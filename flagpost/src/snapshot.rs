//! Serialisable point-in-time views of the registry.
//!
//! Available with the `serde` feature. A snapshot captures each flag's
//! metadata alongside its value at the moment of capture, in a shape
//! suited to diagnostics endpoints and external tooling.

use serde::Serialize;

use crate::descriptor::FlagDescriptor;
use crate::registry::FlagRegistry;
use crate::value::{FlagKind, FlagValue};

/// Point-in-time description of a single flag.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FlagInfo {
    /// Flag name as declared.
    pub name: &'static str,
    /// Storage kind tag, serialised as e.g. `"uint64"`.
    pub kind: FlagKind,
    /// Help text, possibly stripped at build time.
    pub help: &'static str,
    /// Source file that declared the flag.
    pub file: &'static str,
    /// Value at the time the snapshot was taken.
    pub value: FlagValue,
    /// Declared default value.
    pub default: FlagValue,
    /// Whether `value` equalled `default` when captured.
    pub is_default: bool,
}

impl From<&FlagDescriptor> for FlagInfo {
    fn from(descriptor: &FlagDescriptor) -> Self {
        let value = descriptor.value();
        let default = descriptor.default_value();
        let is_default = value == default;
        Self {
            name: descriptor.name(),
            kind: descriptor.kind(),
            help: descriptor.help(),
            file: descriptor.file(),
            value,
            default,
            is_default,
        }
    }
}

impl FlagRegistry {
    /// Captures a snapshot of every registered flag, in name order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<FlagInfo> {
        self.iter().map(FlagInfo::from).collect()
    }
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "tests panic to surface unexpected failures"
    )]

    use crate::cell::U64Cell;
    use crate::descriptor::CellRef;

    use super::{FlagDescriptor, FlagInfo};

    #[test]
    fn snapshots_serialise_with_bare_values() {
        static LIVE: U64Cell = U64Cell::new(8_192);
        static SHADOW: U64Cell = U64Cell::new(8_192);
        static FLAG: FlagDescriptor = FlagDescriptor::new(
            "cache_bytes",
            "Cache capacity in bytes",
            "src/cache.rs",
            CellRef::U64(&LIVE),
            CellRef::U64(&SHADOW),
        );

        let info = FlagInfo::from(&FLAG);
        let rendered = serde_json::to_value(&info).expect("snapshot serialises");
        let expected = serde_json::json!({
            "name": "cache_bytes",
            "kind": "uint64",
            "help": "Cache capacity in bytes",
            "file": "src/cache.rs",
            "value": 8_192,
            "default": 8_192,
            "is_default": true,
        });
        assert_eq!(rendered, expected);
    }
}
