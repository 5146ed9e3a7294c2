//! Selectors, rules, rewriting, and the printer-facing plugin surface.
//!
//! This module ties the pieces together:
//!
//! - **`selector`**: which keys a rule targets (`Property`, `Selector`)
//! - **`rule`**: what happens to them (`TransformRule`, `replace_property`, `remove_property`)
//! - **`rewrite`**: the recursive copy-and-transform pass
//! - **`serializer`**: how a host printer consults a rule (`SnapshotSerializer`, `Printer`)

mod rewrite;
mod rule;
mod selector;
mod serializer;

pub use rewrite::{rewrite, rewrite_all};
pub use rule::{
    remove_property, replace_property, Operation, RemoveProperty, ReplaceProperty, TransformRule,
    PLACEHOLDER,
};
pub use selector::{Property, Selector};
pub use serializer::{Printer, SnapshotSerializer};
