//! Test: `#[properties(nested)]` on a type without a `Properties` impl.
//!
//! `SystemTime` serializes to an object but lists no names.
//! Drop `nested` to keep only the field's own key.

use snapshot_serializers::Properties;
use std::time::SystemTime;

#[derive(Properties)]
struct Session {
    // ERROR: SystemTime doesn't implement Properties
    #[properties(nested)]
    started_at: SystemTime,
}

fn main() {}
