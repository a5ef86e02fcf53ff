//! Custom serde helpers for Coinspaid's quirky serialization formats.
//!
//! Coinspaid is not fully consistent about wire types: identifiers arrive as
//! bare integers in some payloads and as numeric strings in others, and some
//! optional fields come back as empty strings instead of being omitted.
//! These modules normalize both shapes during decoding.

use std::fmt;

use serde::{Deserialize, Deserializer, de};

/// Deserialize an identifier that may be a JSON integer or a numeric string.
///
/// The withdrawal payload's `id` field has been observed in both shapes;
/// both normalize to `i64`.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use coinspaid_api_client::types::serde_helpers::int_or_string;
///
/// #[derive(Deserialize, Debug)]
/// struct Payload {
///     #[serde(deserialize_with = "int_or_string::deserialize")]
///     id: i64,
/// }
///
/// let payload: Payload = serde_json::from_str(r#"{"id":1}"#).unwrap();
/// assert_eq!(payload.id, 1);
///
/// let payload: Payload = serde_json::from_str(r#"{"id":"1"}"#).unwrap();
/// assert_eq!(payload.id, 1);
/// ```
pub mod int_or_string {
    use super::*;

    /// Deserialize an integer from either a JSON number or a numeric string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IntOrStringVisitor;

        impl<'de> de::Visitor<'de> for IntOrStringVisitor {
            type Value = i64;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or a string containing an integer")
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v)
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                i64::try_from(v).map_err(de::Error::custom)
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                v.trim().parse().map_err(de::Error::custom)
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                self.visit_str(&v)
            }
        }

        deserializer.deserialize_any(IntOrStringVisitor)
    }
}

/// Helper for empty strings that should be deserialized as None.
///
/// Coinspaid returns `""` instead of omitting fields like `tag` for
/// currencies that have no tag.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use coinspaid_api_client::types::serde_helpers::empty_string_as_none;
///
/// #[derive(Deserialize, Debug)]
/// struct Response {
///     #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
///     tag: Option<String>,
/// }
///
/// let response: Response = serde_json::from_str(r#"{"tag":""}"#).unwrap();
/// assert!(response.tag.is_none());
///
/// let response: Response = serde_json::from_str(r#"{"tag":"tag-123"}"#).unwrap();
/// assert_eq!(response.tag.unwrap(), "tag-123");
/// ```
pub mod empty_string_as_none {
    use super::*;

    /// Deserialize a string, returning None if empty.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.filter(|s| !s.is_empty()))
    }
}
