//! Tree object
//!
//! Trees are directory snapshots: a set of uniquely named entries, each pointing
//! to a blob (file) or another tree (subdirectory).
//!
//! ## Format
//!
//! Canonical payload: entries sorted by name, each `<Kind> <hash> <name>\0`.
//! On disk: `{"Type": "Tree", "Object": {"Entries": {"<name>": {"Type": .., "Hash": ..}}}}`
//!
//! Entry order never influences the ID since `BTreeMap` keeps names sorted.

use crate::artifacts::objects::object::{Object, ObjectRef};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of object a tree entry points to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntryKind {
    Blob,
    Tree,
}

impl From<EntryKind> for ObjectType {
    fn from(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Blob => ObjectType::Blob,
            EntryKind::Tree => ObjectType::Tree,
        }
    }
}

/// A single named entry of a tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct TreeEntry {
    #[serde(rename = "Type")]
    pub kind: EntryKind,
    #[serde(rename = "Hash")]
    pub hash: ObjectId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, new)]
#[serde(rename_all = "PascalCase")]
pub struct Tree {
    entries: BTreeMap<String, TreeEntry>,
}

impl Tree {
    pub fn entries(&self) -> impl Iterator<Item = (&String, &TreeEntry)> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> impl Iterator<Item = (String, TreeEntry)> {
        self.entries.into_iter()
    }

    pub fn get(&self, name: &str) -> Option<&TreeEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn canonical_payload(&self) -> Vec<u8> {
        let mut payload = Vec::new();

        for (name, entry) in &self.entries {
            let kind: ObjectType = entry.kind.into();
            payload.extend_from_slice(format!("{} {} {}", kind.as_tag(), entry.hash, name).as_bytes());
            payload.push(0);
        }

        payload
    }

    fn as_envelope(&self) -> ObjectRef<'_> {
        ObjectRef::Tree(self)
    }
}
