//! The plugin surface a snapshot printer calls into.
//!
//! A host printer walks a value and, at each node, asks its registered
//! serializers whether they want it ([`SnapshotSerializer::test`]). The first one
//! that does gets [`SnapshotSerializer::serialize`], along with the host's own
//! recursive print callback and whatever formatting context the host tracks
//! (indentation, depth, seen references). That context is opaque here: it is
//! handed back to the callback exactly as received.

use serde_json::Value;

use super::rule::TransformRule;

/// The host's recursive print callback.
///
/// Implemented for every `FnMut(&Value, C) -> Result<String, E>`, so a closure
/// is usually all a host needs.
pub trait Printer<C> {
    /// Whatever the host's printing can fail with.
    type Error;

    /// Prints `value` with the given formatting context.
    fn print(&mut self, value: &Value, context: C) -> Result<String, Self::Error>;
}

impl<C, E, F> Printer<C> for F
where
    F: FnMut(&Value, C) -> Result<String, E>,
{
    type Error = E;

    fn print(&mut self, value: &Value, context: C) -> Result<String, E> {
        self(value, context)
    }
}

/// A value transformer a snapshot printer can consult.
pub trait SnapshotSerializer {
    /// Returns true when this serializer wants to print `value`.
    fn test(&self, value: &Value) -> bool;

    /// Prints `value` through `printer`.
    ///
    /// The printer's output and errors are returned unchanged.
    fn serialize<C, P>(&self, value: &Value, context: C, printer: &mut P) -> Result<String, P::Error>
    where
        P: Printer<C> + ?Sized;
}

impl SnapshotSerializer for TransformRule {
    fn test(&self, value: &Value) -> bool {
        self.is_applicable(value)
    }

    fn serialize<C, P>(&self, value: &Value, context: C, printer: &mut P) -> Result<String, P::Error>
    where
        P: Printer<C> + ?Sized,
    {
        printer.print(&self.rewrite(value), context)
    }
}

impl TransformRule {
    /// Tests `value` and, if the rule applies, prints its rewritten form.
    ///
    /// `None` means the rule does not apply and the caller should try the next
    /// serializer (or fall back to its default printing).
    pub fn render<C, P>(
        &self,
        value: &Value,
        context: C,
        printer: &mut P,
    ) -> Option<Result<String, P::Error>>
    where
        P: Printer<C> + ?Sized,
    {
        if !self.test(value) {
            return None;
        }
        Some(self.serialize(value, context, printer))
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use serde_json::{json, Value};

    use super::SnapshotSerializer;
    use crate::snapshot::rule::{remove_property, replace_property, RemoveProperty, ReplaceProperty};

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct Indent(usize);

    #[test]
    fn render_defers_when_not_applicable() {
        let rule = remove_property(RemoveProperty::new("password"));
        let mut calls = 0;
        let mut printer = |_: &Value, _: Indent| {
            calls += 1;
            Ok::<_, Infallible>(String::new())
        };

        assert!(rule.render(&json!({ "id": 1 }), Indent(0), &mut printer).is_none());
        assert!(rule.render(&json!([{ "password": 1 }]), Indent(0), &mut printer).is_none());
        assert_eq!(calls, 0);
    }

    #[test]
    fn render_prints_rewritten_value_with_context_unchanged() {
        let rule = remove_property(RemoveProperty::new("password"));
        let mut seen = Vec::new();
        let mut printer = |value: &Value, indent: Indent| {
            seen.push((value.clone(), indent));
            Ok::<_, Infallible>("printed".to_string())
        };

        let output = rule.render(&json!({ "id": 1, "password": "p" }), Indent(4), &mut printer);

        assert_eq!(output, Some(Ok("printed".to_string())));
        assert_eq!(seen, [(json!({ "id": 1 }), Indent(4))]);
    }

    #[test]
    fn printer_errors_propagate_unchanged() {
        #[derive(Debug, PartialEq, Eq)]
        struct Boom(&'static str);

        let rule = replace_property(ReplaceProperty::new("id"));
        let mut printer = |_: &Value, (): ()| Err::<String, _>(Boom("printer failed"));

        let output = rule.render(&json!({ "id": 1 }), (), &mut printer);
        assert_eq!(output, Some(Err(Boom("printer failed"))));
    }

    #[test]
    fn serialize_does_not_retest() {
        let rule = replace_property(ReplaceProperty::new("id"));
        let mut printer = |value: &Value, (): ()| Ok::<_, Infallible>(value.to_string());

        let output = rule.serialize(&json!({ "name": "x" }), (), &mut printer);
        assert_eq!(output, Ok(r#"{"name":"x"}"#.to_string()));
    }
}
