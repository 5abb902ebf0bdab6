//! User Entity
//!
//! Profile of the signed-in teacher as the housing API returns it.
//!
//! Only the fields the portal reads are typed. Everything else the server
//! sends is kept verbatim in `extra`, so a profile written back to the
//! durable store after a merge never loses data.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Server identifier (`id` or `_id`, string or number on the wire)
    #[serde(alias = "_id", deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub email: String,
    /// Echoed by some endpoints; read but never written to disk
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_opt_string"
    )]
    pub phone: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_opt_string"
    )]
    pub state_of_origin: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_opt_string"
    )]
    pub property_type: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_opt_string"
    )]
    pub bvn: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_opt_string"
    )]
    pub nin: Option<String>,
    /// Application and server fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Full name for display
    pub fn display_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
            .trim()
            .to_string()
    }

    /// Whether the housing application has been sent (a BVN is on file)
    pub fn has_applied(&self) -> bool {
        self.bvn.as_deref().is_some_and(|bvn| !bvn.trim().is_empty())
    }

    /// Shallow-merge `fields` over this profile; keys in `fields` win.
    ///
    /// A merge that would leave the profile unreadable (e.g. `id: null`)
    /// is rejected and the profile is left untouched.
    pub fn merge(&mut self, fields: &Map<String, Value>) -> Result<(), serde_json::Error> {
        let mut current = match serde_json::to_value(&*self)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        for (key, value) in fields {
            current.insert(key.clone(), value.clone());
        }
        let password = self.password.take();
        match serde_json::from_value::<User>(Value::Object(current)) {
            Ok(mut merged) => {
                if merged.password.is_none() {
                    merged.password = password;
                }
                *self = merged;
                Ok(())
            }
            Err(e) => {
                self.password = password;
                Err(e)
            }
        }
    }

    /// Look up any field by its wire name
    pub fn field(&self, key: &str) -> Option<Value> {
        match serde_json::to_value(self).ok()? {
            Value::Object(mut map) => map.remove(key),
            _ => None,
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}
