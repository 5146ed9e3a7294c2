//! Property names a record type can expose to a snapshot selector.
//!
//! [`Properties`] is usually derived. The derive lists every serialized field
//! name of a struct and, for fields marked `#[properties(nested)]` or
//! `#[serde(flatten)]`, the names of the field's own type. That mirrors how a
//! [`crate::TransformRule`] reaches keys at every depth of the printed value.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    error::Error,
    fmt,
    rc::Rc,
    sync::Arc,
};

/// A type whose serialized form has a known set of property names.
///
/// ```rust
/// use snapshot_serializers::{Properties, PropertyNames};
///
/// struct Audit;
///
/// impl Properties for Audit {
///     fn collect_properties(names: &mut PropertyNames) {
///         if names.enter::<Self>() {
///             names.push("createdAt");
///             names.push("updatedAt");
///         }
///     }
/// }
///
/// assert_eq!(Audit::properties(), ["createdAt", "updatedAt"]);
/// ```
pub trait Properties {
    /// Adds the names reachable from `Self` to `names`.
    fn collect_properties(names: &mut PropertyNames);

    /// Every property name reachable from `Self`, once each, in declaration
    /// order.
    #[must_use]
    fn properties() -> Vec<&'static str> {
        let mut names = PropertyNames::default();
        Self::collect_properties(&mut names);
        names.into_vec()
    }
}

/// Accumulates property names while walking a type.
///
/// Names are de-duplicated. Each type is entered at most once per walk, which
/// keeps recursive types such as trees from looping.
#[derive(Clone, Debug, Default)]
pub struct PropertyNames {
    names: Vec<&'static str>,
    entered: Vec<&'static str>,
}

impl PropertyNames {
    /// Marks `T` as visited. Returns false if it was already entered.
    pub fn enter<T: ?Sized>(&mut self) -> bool {
        let type_name = std::any::type_name::<T>();
        if self.entered.contains(&type_name) {
            return false;
        }
        self.entered.push(type_name);
        true
    }

    /// Records one property name.
    pub fn push(&mut self, name: &'static str) {
        if !self.names.contains(&name) {
            self.names.push(name);
        }
    }

    /// Consumes the collector, returning the names in first-seen order.
    #[must_use]
    pub fn into_vec(self) -> Vec<&'static str> {
        self.names
    }
}

/// Returned by [`crate::Property::of`] when a selector names a property the
/// target type does not have.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownProperty {
    property: String,
    type_name: &'static str,
}

impl UnknownProperty {
    pub(crate) fn new(property: &str, type_name: &'static str) -> Self {
        Self {
            property: property.to_string(),
            type_name,
        }
    }

    /// The offending name (or pattern source).
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The type that was checked.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Display for UnknownProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` is not a property of `{}`",
            self.property, self.type_name
        )
    }
}

impl Error for UnknownProperty {}

macro_rules! impl_properties_forward {
    ($(?Sized $ty:ty),* $(,)?) => {
        $(
            impl<T> Properties for $ty
            where
                T: Properties + ?Sized,
            {
                fn collect_properties(names: &mut PropertyNames) {
                    T::collect_properties(names);
                }
            }
        )*
    };
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T> Properties for $ty
            where
                T: Properties,
            {
                fn collect_properties(names: &mut PropertyNames) {
                    T::collect_properties(names);
                }
            }
        )*
    };
}

impl_properties_forward!(?Sized &T, ?Sized Box<T>, ?Sized Rc<T>, ?Sized Arc<T>);
impl_properties_forward!(Option<T>, Vec<T>, VecDeque<T>, [T]);

impl<T, const N: usize> Properties for [T; N]
where
    T: Properties,
{
    fn collect_properties(names: &mut PropertyNames) {
        T::collect_properties(names);
    }
}

impl<T> Properties for BTreeSet<T>
where
    T: Properties,
{
    fn collect_properties(names: &mut PropertyNames) {
        T::collect_properties(names);
    }
}

impl<T, S> Properties for HashSet<T, S>
where
    T: Properties,
{
    fn collect_properties(names: &mut PropertyNames) {
        T::collect_properties(names);
    }
}

// Map keys are data, not property names; only the values contribute.
impl<K, V> Properties for BTreeMap<K, V>
where
    V: Properties,
{
    fn collect_properties(names: &mut PropertyNames) {
        V::collect_properties(names);
    }
}

impl<K, V, S> Properties for HashMap<K, V, S>
where
    V: Properties,
{
    fn collect_properties(names: &mut PropertyNames) {
        V::collect_properties(names);
    }
}

// Untyped JSON: every key is data, so there is nothing to list.
impl Properties for serde_json::Value {
    fn collect_properties(_names: &mut PropertyNames) {}
}

impl<K, V> Properties for serde_json::Map<K, V> {
    fn collect_properties(_names: &mut PropertyNames) {}
}
