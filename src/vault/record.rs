//! Tag and SecretRecord types stored inside a vault.
//!
//! A record pairs a user-chosen tag with the secret value sealed under
//! the master passphrase.  In JSON a record is `{"tag": ..., "ciphertext": ...}`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, VaultError};

/// A validated record tag: non-empty, ASCII letters and digits only.
///
/// Tags are compared case-sensitively.  Deserialization goes through
/// `Tag::parse`, so a vault file can never hydrate a malformed tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    /// Validate `raw` and wrap it as a tag.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(VaultError::InvalidTag(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Tag {
    type Error = VaultError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

/// A single tagged secret stored in the vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecretRecord {
    /// The unique name of the secret (e.g. "email").
    pub tag: Tag,

    /// The secret value sealed under the master passphrase.
    /// Never stored or compared in plaintext.
    pub ciphertext: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_alphanumeric_tags() {
        assert!(Tag::parse("email").is_ok());
        assert!(Tag::parse("GitHub2").is_ok());
        assert!(Tag::parse("42").is_ok());
    }

    #[test]
    fn rejects_empty_tag() {
        assert!(matches!(Tag::parse(""), Err(VaultError::InvalidTag(_))));
    }

    #[test]
    fn rejects_non_alphanumeric_tags() {
        for raw in ["my site", "a-b", "a_b", "tag!", "ümlaut", " email"] {
            assert!(
                matches!(Tag::parse(raw), Err(VaultError::InvalidTag(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert_ne!(Tag::parse("Email").unwrap(), Tag::parse("email").unwrap());
    }

    #[test]
    fn record_json_shape() {
        let record = SecretRecord {
            tag: Tag::parse("email").unwrap(),
            ciphertext: "c2VhbGVk".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"tag":"email","ciphertext":"c2VhbGVk"}"#);
    }

    #[test]
    fn deserializing_a_bad_tag_fails() {
        let json = r#"{"tag":"not valid","ciphertext":"x"}"#;
        assert!(serde_json::from_str::<SecretRecord>(json).is_err());
    }
}
