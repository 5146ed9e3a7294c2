//! Recursive copy-and-transform pass over JSON values.
//!
//! The input is borrowed and never touched; every container on the way down is
//! rebuilt, so the output shares nothing with the original.

use serde_json::{Map, Value};

use super::rule::{Operation, TransformRule};

/// Rewrites `value` with `rule` applied at every depth.
///
/// - Scalars (including `null`) are returned as-is.
/// - Arrays keep their length and order; each element is rewritten.
/// - Objects keep their key order. Matching keys are replaced or dropped
///   according to the rule's operation; every other key's value is rewritten
///   recursively. A matching key's original value is not descended into.
///
/// Replacing is idempotent: rewriting an already rewritten value changes
/// nothing. Removing a key that is not present is a no-op.
#[must_use]
pub fn rewrite(value: &Value, rule: &TransformRule) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(|item| rewrite(item, rule)).collect()),
        Value::Object(fields) => Value::Object(rewrite_fields(fields, rule)),
        scalar => scalar.clone(),
    }
}

fn rewrite_fields(fields: &Map<String, Value>, rule: &TransformRule) -> Map<String, Value> {
    fields
        .iter()
        .filter_map(|(key, value)| {
            if !rule.selector().matches(key) {
                return Some((key.clone(), rewrite(value, rule)));
            }
            match rule.operation() {
                Operation::Replace { placeholder } => {
                    Some((key.clone(), Value::String(placeholder.to_string())))
                }
                Operation::Remove => None,
            }
        })
        .collect()
}

/// Applies each rule in turn, feeding one rule's output to the next.
///
/// Rules that target disjoint keys commute, so their order only matters when
/// two rules select the same key.
#[must_use]
pub fn rewrite_all(value: &Value, rules: &[TransformRule]) -> Value {
    match rules.split_first() {
        None => value.clone(),
        Some((first, rest)) => rest
            .iter()
            .fold(first.rewrite(value), |value, rule| rule.rewrite(&value)),
    }
}
