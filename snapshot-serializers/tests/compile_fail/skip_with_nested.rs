//! Test: `skip` and `nested` on the same field should fail.
//!
//! A skipped field contributes nothing, so asking for its nested names is a
//! contradiction.

use snapshot_serializers::Properties;

#[derive(Properties)]
struct Audit {
    created_at: String,
}

#[derive(Properties)]
struct Record {
    // ERROR: skip cannot be combined with nested
    #[properties(skip, nested)]
    audit: Audit,
}

fn main() {}
