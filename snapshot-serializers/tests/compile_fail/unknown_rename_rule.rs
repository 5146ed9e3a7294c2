//! Test: An unknown `rename_all` rule should fail.
//!
//! Only the case rules serde understands are accepted.

use snapshot_serializers::Properties;

#[derive(Properties)]
// ERROR: "shouting" is not a rename rule
#[properties(rename_all = "shouting")]
struct Record {
    record_id: u64,
}

fn main() {}
