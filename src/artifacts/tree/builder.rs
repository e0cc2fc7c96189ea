use crate::areas::database::Database;
use crate::artifacts::index::{FlatIndex, parent_dirs};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::{EntryKind, Tree, TreeEntry};
use crate::errors::{LitError, LitResult};
use std::collections::{BTreeMap, BTreeSet};

/// Directory path used for the root tree
const ROOT_DIR: &str = "";

/// Split `a/b/c.txt` into (`a/b`, `c.txt`)
fn split_parent(path: &str) -> (&str, &str) {
    match path.rsplit_once('/') {
        Some((parent, name)) => (parent, name),
        None => (ROOT_DIR, path),
    }
}

/// Store the trees describing `entries` and return the root tree ID.
///
/// Every directory containing at least one file becomes a tree node. Nodes are
/// written deepest first, so a parent is only written once all its subtree IDs
/// are known. Equal inputs always give the same root ID, and an empty index
/// gives the empty tree.
pub fn build_tree(database: &Database, entries: &FlatIndex) -> LitResult<ObjectId> {
    let mut files = BTreeMap::<&str, BTreeMap<String, TreeEntry>>::new();
    let mut dirs = BTreeSet::<&str>::new();

    for (path, oid) in entries {
        if path.is_empty() || path.split('/').any(|segment| segment.is_empty()) {
            return Err(LitError::InvalidPath(path.clone()));
        }

        let (parent, name) = split_parent(path);
        files
            .entry(parent)
            .or_default()
            .insert(name.to_string(), TreeEntry::new(EntryKind::Blob, oid.clone()));
        dirs.extend(parent_dirs(path));
    }

    // a path cannot be both a file and a directory
    if let Some(clash) = dirs.iter().find(|dir| entries.contains_key(**dir)) {
        return Err(LitError::InvalidPath(clash.to_string()));
    }

    // deepest first; within a depth the order does not matter
    let mut work_list = dirs.into_iter().collect::<Vec<_>>();
    work_list.sort_by_key(|dir| std::cmp::Reverse(dir.matches('/').count()));
    work_list.push(ROOT_DIR);

    let mut root_oid = None;
    for dir in work_list {
        let tree = Tree::new(files.remove(dir).unwrap_or_default());
        let oid = database.write_tree(&tree)?;

        if dir == ROOT_DIR {
            root_oid = Some(oid);
        } else {
            let (parent, name) = split_parent(dir);
            files
                .entry(parent)
                .or_default()
                .insert(name.to_string(), TreeEntry::new(EntryKind::Tree, oid));
        }
    }

    let root_oid = root_oid.ok_or_else(|| LitError::InvalidPath(ROOT_DIR.to_string()))?;
    tracing::debug!(oid = %root_oid, files = entries.len(), "tree built");

    Ok(root_oid)
}
