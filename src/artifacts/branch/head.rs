//! HEAD state
//!
//! ## File Format
//!
//! ```json
//! { "Detached": false, "Location": "main" }
//! { "Detached": true, "Location": "<commit id>" }
//! ```

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::LitError;
use serde::{Deserialize, Serialize};

/// Where HEAD points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    /// Follows a branch; commits move the branch
    Attached(BranchName),
    /// Pinned to a commit; commits move HEAD itself
    Detached(ObjectId),
}

impl Head {
    pub fn is_detached(&self) -> bool {
        matches!(self, Head::Detached(_))
    }

    pub fn branch(&self) -> Option<&BranchName> {
        match self {
            Head::Attached(branch) => Some(branch),
            Head::Detached(_) => None,
        }
    }
}

impl std::fmt::Display for Head {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Head::Attached(branch) => write!(f, "{branch}"),
            Head::Detached(oid) => write!(f, "detached at {}", oid.to_short_oid()),
        }
    }
}

/// On-disk form of [`Head`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HeadRecord {
    detached: bool,
    location: String,
}

impl From<&Head> for HeadRecord {
    fn from(head: &Head) -> Self {
        match head {
            Head::Attached(branch) => HeadRecord {
                detached: false,
                location: branch.to_string(),
            },
            Head::Detached(oid) => HeadRecord {
                detached: true,
                location: oid.to_string(),
            },
        }
    }
}

impl TryFrom<HeadRecord> for Head {
    type Error = LitError;

    fn try_from(record: HeadRecord) -> Result<Self, Self::Error> {
        if record.detached {
            Ok(Head::Detached(ObjectId::try_parse(record.location)?))
        } else {
            Ok(Head::Attached(BranchName::try_parse(record.location)?))
        }
    }
}
