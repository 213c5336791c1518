//! Serialised registry snapshots behind the `serde` feature.

#![cfg(feature = "serde")]
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface unexpected failures"
)]

use flagpost::FlagValue;
use serde_json::json;
use serial_test::serial;
use test_helpers::flags;

flagpost::define_bool!(snap_verify, true, "Verify checksums after download");
flagpost::define_u64!(snap_chunk_bytes, 65_536, "Transfer chunk size in bytes");

#[test]
#[serial]
fn snapshots_serialise_every_registered_flag() {
    let verify = flagpost::find("snap_verify").expect("declared above");
    let chunk = flagpost::find("snap_chunk_bytes").expect("declared above");

    let snapshot = flagpost::registry().snapshot();
    let rendered = serde_json::to_value(&snapshot).expect("snapshots serialise");
    assert_eq!(
        rendered,
        json!([
            {
                "name": "snap_chunk_bytes",
                "kind": "uint64",
                "help": chunk.help(),
                "file": file!(),
                "value": 65_536_u64,
                "default": 65_536_u64,
                "is_default": true,
            },
            {
                "name": "snap_verify",
                "kind": "bool",
                "help": verify.help(),
                "file": file!(),
                "value": true,
                "default": true,
                "is_default": true,
            },
        ])
    );
}

#[test]
#[serial]
fn snapshots_track_values_off_their_defaults() {
    let flag = flagpost::find("snap_verify").expect("declared above");
    let guard = flags::set(flag, FlagValue::Bool(false)).expect("matching kind is accepted");

    let snapshot = flagpost::registry().snapshot();
    let entry = snapshot
        .iter()
        .find(|info| info.name == "snap_verify")
        .expect("the snapshot covers every flag");
    assert!(!entry.is_default);
    assert_eq!(entry.value, FlagValue::Bool(false));
    assert_eq!(entry.default, FlagValue::Bool(true));

    drop(guard);
}
