//! Upstream list API resources.

use serde::{Deserialize, Deserializer, Serialize};

/// A course returned by the course list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    /// Opaque upstream id (numbers are kept in their decimal form)
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,

    /// Display name
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
}

/// A user enrolled in a course with the instructor role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Instructor {
    /// Display name, the only identity carried through
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
}

fn opaque_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

fn nullable_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
