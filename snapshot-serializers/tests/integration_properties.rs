//! Integration tests for `#[derive(Properties)]` and typed selectors.
//!
//! These tests verify that:
//! - derived names follow the serialized keys (`serde` renames, skips, flatten)
//! - nested types contribute their names through containers
//! - `Property::of` accepts known names and rejects unknown ones

mod common;

use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use common::{user_list, Snapshot, User, UserList};
use regex::Regex;
use serde::Serialize;
use snapshot_serializers::{
    replace_property, Properties, Property, PropertyNames, ReplaceProperty, PLACEHOLDER,
};

#[test]
fn test_fixture_names_follow_serde_renames() {
    assert_eq!(User::properties(), ["id", "name", "password", "createdAt"]);
}

#[test]
fn test_nested_names_are_reachable() {
    assert_eq!(
        UserList::properties(),
        ["users", "active", "id", "name", "password", "createdAt"]
    );
}

#[test]
fn test_typed_selector_accepts_nested_names() {
    let property = Property::of::<UserList>(["id", "createdAt"]).unwrap();
    let mut snapshot = Snapshot::new();
    snapshot.add_snapshot_serializer(replace_property(ReplaceProperty::new(property)));

    let printed = snapshot.print(&user_list());
    assert_eq!(printed.matches(PLACEHOLDER).count(), 4);
}

#[test]
fn test_typed_selector_rejects_unknown_names() {
    let err = Property::of::<User>(["id", "email"]).unwrap_err();
    assert_eq!(err.property(), "email");
    assert!(err.type_name().ends_with("User"));
    assert!(err.to_string().starts_with("`email` is not a property of `"));
}

#[test]
fn test_typed_pattern_must_match_something() {
    assert!(Property::of::<User>(Regex::new("^id").unwrap()).is_ok());
    let err = Property::of::<User>(Regex::new("^email").unwrap()).unwrap_err();
    assert_eq!(err.property(), "^email");
}

#[test]
fn test_skip_rename_and_flatten() {
    #[derive(Serialize, Properties)]
    struct Audit {
        created_at: String,
        #[serde(rename = "updated")]
        updated_at: String,
    }

    #[derive(Serialize, Properties)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    struct Record {
        record_id: u64,
        #[serde(skip)]
        cache: Vec<u8>,
        #[properties(skip)]
        internal: String,
        #[properties(rename = "kind")]
        record_kind: String,
        #[serde(flatten)]
        audit: Audit,
    }

    assert_eq!(
        Record::properties(),
        ["RECORD_ID", "kind", "created_at", "updated"]
    );
}

#[test]
fn test_generic_nested_fields() {
    #[derive(Serialize, Properties)]
    struct Page<T> {
        #[properties(nested)]
        items: Vec<T>,
        total: usize,
    }

    #[derive(Serialize, Properties)]
    struct Lookup {
        #[properties(nested)]
        by_id: BTreeMap<String, Option<Box<User>>>,
    }

    assert_eq!(
        Page::<User>::properties(),
        ["items", "id", "name", "password", "createdAt", "total"]
    );
    assert_eq!(
        Lookup::properties(),
        ["by_id", "id", "name", "password", "createdAt"]
    );
}

#[test]
fn test_recursive_types_terminate() {
    #[derive(Serialize, Properties)]
    struct Node {
        label: String,
        #[properties(nested)]
        children: Vec<Node>,
    }

    assert_eq!(Node::properties(), ["label", "children"]);
}

#[test]
fn test_newtype_forwards_and_unit_is_empty() {
    #[derive(Serialize, Properties)]
    struct Users(#[properties(nested)] Vec<User>);

    #[derive(Serialize, Properties)]
    struct Nothing;

    assert_eq!(Users::properties(), User::properties());
    assert!(Nothing::properties().is_empty());
}

#[test]
fn test_manual_impl_composes_with_derive() {
    struct Opaque;

    impl Properties for Opaque {
        fn collect_properties(names: &mut PropertyNames) {
            if names.enter::<Self>() {
                names.push("token");
            }
        }
    }

    #[derive(Properties)]
    struct Session {
        #[properties(nested)]
        auth: Opaque,
    }

    assert_eq!(Session::properties(), ["auth", "token"]);
}

#[test]
fn test_flattened_catch_all_map_contributes_nothing() {
    #[derive(Serialize, Properties)]
    struct Event {
        id: String,
        #[serde(flatten)]
        extra: HashMap<String, serde_json::Value>,
    }

    assert_eq!(Event::properties(), ["id"]);
    assert!(Property::of::<Event>(["id"]).is_ok());
}

#[test]
fn test_borrowed_and_shared_nested_fields() {
    #[derive(Serialize, Properties)]
    struct Borrowed<'a> {
        #[properties(nested)]
        owner: &'a User,
    }

    #[derive(Serialize, Properties)]
    struct Shared {
        #[properties(nested)]
        owner: Arc<User>,
    }

    assert_eq!(
        Borrowed::properties(),
        ["owner", "id", "name", "password", "createdAt"]
    );
    assert_eq!(Shared::properties(), Borrowed::properties());
}
