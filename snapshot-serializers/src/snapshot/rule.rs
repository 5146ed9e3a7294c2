//! Transform rules and their registration entrypoints.
//!
//! A [`TransformRule`] pairs a resolved [`Selector`] with an [`Operation`]. It is
//! built once by [`replace_property`] or [`remove_property`] and never changes
//! afterwards, so a single rule can be shared by every snapshot in a test run.

use std::borrow::Cow;

use serde_json::Value;

use super::{
    rewrite::rewrite,
    selector::{Property, Selector},
};

/// Default placeholder written over replaced values.
pub const PLACEHOLDER: &str = "[SNAPSHOT_PLACEHOLDER]";

/// What a rule does to a matching field.
// `Cow` so the default placeholder stays borrowed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Overwrite the field's value with a placeholder string.
    Replace {
        /// The placeholder text to use.
        placeholder: Cow<'static, str>,
    },
    /// Drop the field entirely.
    Remove,
}

impl Operation {
    /// Constructs [`Operation::Replace`] using [`PLACEHOLDER`].
    #[must_use]
    pub fn default_replace() -> Self {
        Self::Replace {
            placeholder: Cow::Borrowed(PLACEHOLDER),
        }
    }

    /// Constructs [`Operation::Replace`] using a custom placeholder.
    #[must_use]
    pub fn replace_with<P>(placeholder: P) -> Self
    where
        P: Into<Cow<'static, str>>,
    {
        Self::Replace {
            placeholder: placeholder.into(),
        }
    }
}

/// Configuration for [`replace_property`].
#[derive(Clone, Debug)]
pub struct ReplaceProperty {
    property: Property,
    placeholder: Cow<'static, str>,
}

impl ReplaceProperty {
    /// Replaces `property` with [`PLACEHOLDER`].
    #[must_use]
    pub fn new(property: impl Into<Property>) -> Self {
        Self {
            property: property.into(),
            placeholder: Cow::Borrowed(PLACEHOLDER),
        }
    }

    /// Uses a specific placeholder instead of [`PLACEHOLDER`].
    #[must_use]
    pub fn with_placeholder<P>(mut self, placeholder: P) -> Self
    where
        P: Into<Cow<'static, str>>,
    {
        self.placeholder = placeholder.into();
        self
    }
}

/// Configuration for [`remove_property`].
#[derive(Clone, Debug)]
pub struct RemoveProperty {
    property: Property,
}

impl RemoveProperty {
    /// Removes `property`.
    #[must_use]
    pub fn new(property: impl Into<Property>) -> Self {
        Self {
            property: property.into(),
        }
    }
}

/// Builds a rule that replaces matching fields with a placeholder.
///
/// ```rust
/// use serde_json::json;
/// use snapshot_serializers::{replace_property, ReplaceProperty};
///
/// let rule = replace_property(ReplaceProperty::new("id"));
/// let value = json!({ "id": "abc", "name": "John" });
///
/// assert_eq!(
///     rule.rewrite(&value),
///     json!({ "id": "[SNAPSHOT_PLACEHOLDER]", "name": "John" })
/// );
/// ```
#[must_use]
pub fn replace_property(config: ReplaceProperty) -> TransformRule {
    TransformRule::new(
        Selector::resolve(config.property),
        Operation::Replace {
            placeholder: config.placeholder,
        },
    )
}

/// Builds a rule that removes matching fields.
///
/// ```rust
/// use serde_json::json;
/// use snapshot_serializers::{remove_property, RemoveProperty};
///
/// let rule = remove_property(RemoveProperty::new("password"));
/// let value = json!({ "id": "abc", "password": "p" });
///
/// assert_eq!(rule.rewrite(&value), json!({ "id": "abc" }));
/// ```
#[must_use]
pub fn remove_property(config: RemoveProperty) -> TransformRule {
    TransformRule::new(Selector::resolve(config.property), Operation::Remove)
}

/// A selector bound to an operation.
#[derive(Clone, Debug)]
pub struct TransformRule {
    selector: Selector,
    operation: Operation,
}

impl TransformRule {
    /// Pairs a selector with an operation.
    #[must_use]
    pub fn new(selector: Selector, operation: Operation) -> Self {
        Self {
            selector,
            operation,
        }
    }

    /// The resolved key predicate.
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// What happens to matching fields.
    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    /// Returns true when the rule has work to do on `value`'s own fields.
    ///
    /// Only objects qualify. Arrays and scalars are never applicable here; their
    /// contents are reached by [`TransformRule::rewrite`] or by the host
    /// printing each element.
    ///
    /// A replace rule skips fields that already hold its placeholder, so a
    /// value it has printed once is not claimed again.
    pub fn is_applicable(&self, value: &Value) -> bool {
        let Value::Object(fields) = value else {
            return false;
        };

        fields.iter().any(|(key, field)| {
            self.selector.matches(key)
                && match &self.operation {
                    Operation::Replace { placeholder } => {
                        field.as_str() != Some(&**placeholder)
                    }
                    Operation::Remove => true,
                }
        })
    }

    /// Returns a rewritten copy of `value`. See [`rewrite`].
    #[must_use]
    pub fn rewrite(&self, value: &Value) -> Value {
        rewrite(value, self)
    }
}
