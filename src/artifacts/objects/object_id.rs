//! Object identifier (SHA-256 hash)
//!
//! Object IDs are 64-character lowercase hexadecimal strings. They are stored in
//! `.lit/objects/<first-2-chars>/<remaining-62-chars>`.

use crate::artifacts::objects::{OBJECT_DIR_CHARS, OBJECT_ID_LENGTH};
use crate::errors::{LitError, LitResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Number of characters shown for abbreviated IDs
const SHORT_ID_LENGTH: usize = 7;

/// Validated object identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID
    ///
    /// Upper-case input is accepted and normalized to lower case.
    pub fn try_parse(id: impl Into<String>) -> LitResult<Self> {
        let id = id.into();

        if id.len() != OBJECT_ID_LENGTH || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(LitError::InvalidObjectId(id));
        }

        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Build an ID from a finished digest
    pub(crate) fn from_digest(digest: &[u8]) -> Self {
        Self(hex::encode(digest))
    }

    /// Relative storage path, split as `XX/YYYY...`
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(OBJECT_DIR_CHARS);
        PathBuf::from(dir).join(file)
    }

    /// First 7 characters of the hash
    pub fn to_short_oid(&self) -> &str {
        &self.0[..SHORT_ID_LENGTH]
    }
}

impl TryFrom<String> for ObjectId {
    type Error = LitError;

    fn try_from(value: String) -> LitResult<Self> {
        Self::try_parse(value)
    }
}

impl From<ObjectId> for String {
    fn from(value: ObjectId) -> Self {
        value.0
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
