//! Adapters for emitting snapshot-stable values through `slog`.
//!
//! This module connects `crate::TransformRule` with `slog` by providing a
//! `slog::Value` that serializes a rewritten value as structured JSON via
//! `slog`'s nested-value support. The same rules that keep snapshots stable then
//! keep log lines free of identifiers, timestamps, and secrets.
//!
//! It is responsible for:
//! - Ensuring the logged representation is the output of the rules, never the
//!   original value.
//! - Avoiding fallible logging APIs: serialization failures are represented as
//!   placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog` or decide which rules are appropriate.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{rewrite_all, TransformRule};

/// A `slog::Value` that emits an owned, rewritten payload as structured JSON.
///
/// This type does not return serialization errors to `slog`; if converting the
/// original value into JSON failed, it holds a JSON string instead.
pub struct SnapshotJson {
    value: JsonValue,
}

impl SnapshotJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }

    /// The JSON that will be logged.
    pub fn as_json(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for SnapshotJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts values into a `slog::Value` that logs their rewritten JSON form.
///
/// ## Example
/// ```ignore
/// use snapshot_serializers::slog::IntoSnapshotJson;
///
/// info!(logger, "created"; "user" => user.into_snapshot_json(&rules));
/// ```
pub trait IntoSnapshotJson: Serialize {
    /// Serializes `self` to JSON and applies `rules` in order.
    ///
    /// If serialization fails, the returned value stores the JSON string
    /// `"Failed to serialize snapshot value"`.
    fn into_snapshot_json(&self, rules: &[TransformRule]) -> SnapshotJson {
        let json_value = serde_json::to_value(self).map_or_else(
            |_| JsonValue::String("Failed to serialize snapshot value".to_string()),
            |value| rewrite_all(&value, rules),
        );
        SnapshotJson::new(json_value)
    }
}

impl<T> IntoSnapshotJson for T where T: Serialize + ?Sized {}
