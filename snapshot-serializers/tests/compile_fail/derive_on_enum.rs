//! Test: Deriving `Properties` on an enum should fail.
//!
//! Variants serialize to different shapes, so there is no single key list.
//! Derive on the struct held by each variant instead.

use snapshot_serializers::Properties;

#[derive(Properties)]
enum Status {
    // ERROR: enums are rejected
    Active,
    Disabled,
}

fn main() {}
