//! Property selectors: which object keys a rule targets.
//!
//! A [`Property`] is the configuration shape a caller writes (one name, a list
//! of names, or a pattern). It is resolved once into a [`Selector`], and from
//! then on the rest of the engine only ever asks `matches(key)`.

use std::collections::BTreeSet;

use regex::Regex;

use crate::properties::{Properties, UnknownProperty};

/// The property (or properties) a rule applies to.
///
/// Only key names are ever inspected. Values are never matched against a
/// pattern.
#[derive(Clone, Debug)]
pub enum Property {
    /// A single exact key name.
    Name(String),
    /// Any of several exact key names. An empty list matches nothing.
    Names(Vec<String>),
    /// Every key name the pattern matches.
    Pattern(Regex),
}

impl Property {
    /// Compiles `pattern` into a [`Property::Pattern`].
    ///
    /// Unanchored patterns match anywhere in the key, so `^id` targets `id`
    /// and `identifier` while `^id$` targets only `id`.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self::Pattern)
    }

    /// Checks the property against the names `T` can contain.
    ///
    /// Every exact name must be one of `T`'s properties; a pattern must match at
    /// least one of them.
    pub fn of<T>(property: impl Into<Self>) -> Result<Self, UnknownProperty>
    where
        T: Properties + ?Sized,
    {
        let property = property.into();
        let known = T::properties();
        let type_name = std::any::type_name::<T>();

        match &property {
            Self::Name(name) => check_known(&known, name, type_name)?,
            Self::Names(names) => {
                for name in names {
                    check_known(&known, name, type_name)?;
                }
            }
            Self::Pattern(regex) => {
                if !known.iter().any(|name| regex.is_match(name)) {
                    return Err(UnknownProperty::new(regex.as_str(), type_name));
                }
            }
        }

        Ok(property)
    }
}

fn check_known(
    known: &[&'static str],
    name: &str,
    type_name: &'static str,
) -> Result<(), UnknownProperty> {
    if known.contains(&name) {
        Ok(())
    } else {
        Err(UnknownProperty::new(name, type_name))
    }
}

impl From<&str> for Property {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Property {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<Regex> for Property {
    fn from(regex: Regex) -> Self {
        Self::Pattern(regex)
    }
}

impl<S> From<Vec<S>> for Property
where
    S: Into<String>,
{
    fn from(names: Vec<S>) -> Self {
        Self::Names(names.into_iter().map(Into::into).collect())
    }
}

impl<S, const N: usize> From<[S; N]> for Property
where
    S: Into<String>,
{
    fn from(names: [S; N]) -> Self {
        Self::Names(names.into_iter().map(Into::into).collect())
    }
}

impl From<&[&str]> for Property {
    fn from(names: &[&str]) -> Self {
        Self::Names(names.iter().map(|name| (*name).to_string()).collect())
    }
}

/// A resolved key-name predicate.
///
/// Resolution happens once, when a rule is built. Name lists become a set, so
/// matching a list is a membership test regardless of how the list was
/// ordered.
#[derive(Clone, Debug)]
pub struct Selector {
    matcher: Matcher,
}

#[derive(Clone, Debug)]
enum Matcher {
    Exact(String),
    AnyOf(BTreeSet<String>),
    Pattern(Regex),
}

impl Selector {
    /// Resolves a property configuration into a predicate.
    #[must_use]
    pub fn resolve(property: impl Into<Property>) -> Self {
        let matcher = match property.into() {
            Property::Name(name) => Matcher::Exact(name),
            Property::Names(names) => Matcher::AnyOf(names.into_iter().collect()),
            Property::Pattern(regex) => Matcher::Pattern(regex),
        };
        Self { matcher }
    }

    /// Returns true when `key` is targeted by this selector.
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        match &self.matcher {
            Matcher::Exact(name) => name == key,
            Matcher::AnyOf(names) => names.contains(key),
            Matcher::Pattern(regex) => regex.is_match(key),
        }
    }
}

impl From<Property> for Selector {
    fn from(property: Property) -> Self {
        Self::resolve(property)
    }
}
