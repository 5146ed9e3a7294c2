//! Snapshot serializers that replace or remove volatile fields.
//!
//! Snapshot tests compare printed values against stored text. Identifiers,
//! timestamps, and secrets make that text change on every run. This crate
//! provides two rules that rewrite a value before it is printed:
//!
//! - [`replace_property`]: overwrite matching fields with a placeholder
//!   (default [`PLACEHOLDER`]).
//! - [`remove_property`]: drop matching fields.
//!
//! A field is matched by key name: one name, a list of names, or a regular
//! expression. Rules apply at every depth of nested objects and arrays.
//!
//! Key rules:
//! - Values are `serde_json::Value`s; key order is preserved.
//! - The input is never mutated; rewriting builds a new value.
//! - A replace rule does not claim a value whose matching fields already hold
//!   its placeholder.
//!
//! What this crate does:
//! - resolves selectors and decides whether a rule applies to a value
//! - rewrites values and hands them to a host-supplied [`Printer`]
//! - lists the property names of a record type ([`Properties`]) so selectors
//!   can be checked with [`Property::of`]
//! - provides integrations behind feature flags (e.g. `slog`)
//!
//! What it does not do:
//! - print values, store snapshots, or diff them
//! - perform I/O or logging
//!
//! The `Properties` derive macro lives in `snapshot-serializers-derive` and is
//! re-exported when the `derive` feature is enabled.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[cfg(feature = "derive")]
pub use snapshot_serializers_derive::Properties;

// Module declarations
mod properties;
mod snapshot;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
pub use properties::{Properties, PropertyNames, UnknownProperty};
pub use snapshot::{
    remove_property, replace_property, rewrite, rewrite_all, Operation, Printer, Property,
    RemoveProperty, ReplaceProperty, Selector, SnapshotSerializer, TransformRule, PLACEHOLDER,
};
