//! Commit object
//!
//! Commits are named, timestamped snapshots. They contain:
//! - A tree object ID (directory snapshot)
//! - Parent commit ID(s), empty for the first commit
//! - A timestamp
//! - A name (the commit message)
//!
//! ## Format
//!
//! Canonical payload:
//! ```text
//! tree <tree-hash>
//! parent <parent-hash>
//! timestamp <rfc3339 utc, nanoseconds>
//!
//! <name>
//! ```
//! On disk: `{"Type": "Commit", "Object": {"Name", "Tree", "Parents", "Time"}}`

use crate::artifacts::objects::object::{Object, ObjectRef};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use chrono::{DateTime, SecondsFormat, Utc};
use derive_new::new;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
#[serde(rename_all = "PascalCase")]
pub struct Commit {
    name: String,
    tree: ObjectId,
    parents: Vec<ObjectId>,
    #[serde(rename = "Time")]
    timestamp: DateTime<Utc>,
}

impl Commit {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// First line of the commit name
    pub fn short_message(&self) -> &str {
        self.name.lines().next().unwrap_or_default()
    }

    /// Timestamp as it appears in the canonical payload
    pub fn canonical_timestamp(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn canonical_payload(&self) -> Vec<u8> {
        let mut lines = vec![format!("tree {}", self.tree)];
        lines.extend(self.parents.iter().map(|parent| format!("parent {parent}")));
        lines.push(format!("timestamp {}", self.canonical_timestamp()));
        lines.push(String::new());
        lines.push(self.name.clone());

        lines.join("\n").into_bytes()
    }

    fn as_envelope(&self) -> ObjectRef<'_> {
        ObjectRef::Commit(self)
    }
}
