//! Serde helpers for request payloads.
//!
//! Incoming string fields are trimmed, and blank strings are treated as absent,
//! so `{"name": "   "}` behaves the same as a request without `name`. A value of
//! any other JSON type is kept as [`StringField::WrongType`] so validation can
//! report it per field instead of rejecting the whole body.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// A string field as it arrived in a request body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StringField {
    /// Absent, `null`, or blank after trimming.
    #[default]
    Missing,
    /// A trimmed, non-empty string.
    Text(String),
    /// Present but not a JSON string.
    WrongType,
}

impl StringField {
    pub fn is_wrong_type(&self) -> bool {
        matches!(self, StringField::WrongType)
    }

    /// The trimmed text, if any.
    pub fn into_option(self) -> Option<String> {
        match self {
            StringField::Text(text) => Some(text),
            StringField::Missing | StringField::WrongType => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Text(String),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for StringField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<RawField>::deserialize(deserializer)? {
            None => StringField::Missing,
            Some(RawField::Text(text)) => {
                let text = text.trim();
                if text.is_empty() {
                    StringField::Missing
                } else {
                    StringField::Text(text.to_string())
                }
            }
            Some(RawField::Other(_)) => StringField::WrongType,
        })
    }
}
