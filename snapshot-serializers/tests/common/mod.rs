//! Test host: a small pretty-printer that consults registered serializers.
//!
//! The layout follows the inline snapshots of JS snapshot runners: sorted keys,
//! two-space indentation, a trailing comma after every entry. Every node is
//! offered to the serializers first, so a rule gets a chance at every depth the
//! printer reaches, exactly like a real host.

#![allow(dead_code)]

use std::convert::Infallible;

use serde::Serialize;
use serde_json::Value;
use snapshot_serializers::{Properties, TransformRule};

/// The formatting context threaded through the printer callback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Indentation {
    pub depth: usize,
}

impl Indentation {
    fn deeper(self) -> Self {
        Self {
            depth: self.depth + 1,
        }
    }

    fn pad(self) -> String {
        "  ".repeat(self.depth)
    }
}

#[derive(Default)]
pub struct Snapshot {
    serializers: Vec<TransformRule>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_snapshot_serializer(&mut self, serializer: TransformRule) -> &mut Self {
        self.serializers.push(serializer);
        self
    }

    pub fn print<T: Serialize + ?Sized>(&self, value: &T) -> String {
        let value = serde_json::to_value(value).expect("fixture should serialize");
        self.print_value(&value, Indentation::default())
    }

    pub fn print_value(&self, value: &Value, indentation: Indentation) -> String {
        let mut printer = |value: &Value, indentation: Indentation| {
            Ok::<_, Infallible>(self.print_value(value, indentation))
        };
        for serializer in &self.serializers {
            if let Some(output) = serializer.render(value, indentation, &mut printer) {
                return match output {
                    Ok(text) => text,
                    Err(never) => match never {},
                };
            }
        }
        self.print_plain(value, indentation)
    }

    fn print_plain(&self, value: &Value, indentation: Indentation) -> String {
        let inner = indentation.deeper();
        match value {
            Value::Object(fields) if fields.is_empty() => "{}".to_string(),
            Value::Object(fields) => {
                let mut keys: Vec<&String> = fields.keys().collect();
                keys.sort();
                let mut out = String::from("{\n");
                for key in keys {
                    out.push_str(&format!(
                        "{}{}: {},\n",
                        inner.pad(),
                        serde_json::to_string(key).expect("keys serialize"),
                        self.print_value(&fields[key], inner),
                    ));
                }
                out.push_str(&indentation.pad());
                out.push('}');
                out
            }
            Value::Array(items) if items.is_empty() => "[]".to_string(),
            Value::Array(items) => {
                let mut out = String::from("[\n");
                for item in items {
                    out.push_str(&format!("{}{},\n", inner.pad(), self.print_value(item, inner)));
                }
                out.push_str(&indentation.pad());
                out.push(']');
                out
            }
            scalar => scalar.to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Properties)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub created_at: String,
}

#[derive(Clone, Debug, Serialize, Properties)]
pub struct ActiveUsers {
    #[properties(nested)]
    pub active: Vec<User>,
}

#[derive(Clone, Debug, Serialize, Properties)]
pub struct UserList {
    #[properties(nested)]
    pub users: ActiveUsers,
}

pub fn user() -> User {
    User {
        id: "123e4567-e89b-12d3-a456-426614174000".to_string(),
        name: "John Doe".to_string(),
        created_at: "2024-03-20T12:00:00Z".to_string(),
        password: Some("secret123".to_string()),
    }
}

pub fn user_list() -> UserList {
    UserList {
        users: ActiveUsers {
            active: vec![user(), user()],
        },
    }
}
