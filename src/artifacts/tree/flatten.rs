use crate::areas::database::Database;
use crate::artifacts::index::FlatIndex;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::EntryKind;
use crate::errors::LitResult;

/// Every file reachable from the tree `oid`, keyed by its full path
pub fn flatten_tree(database: &Database, oid: &ObjectId) -> LitResult<FlatIndex> {
    flatten_tree_at(database, oid, "")
}

/// Same as [`flatten_tree`], with every path prefixed by `base`.
///
/// `base` is either empty or ends with `/`.
pub fn flatten_tree_at(database: &Database, oid: &ObjectId, base: &str) -> LitResult<FlatIndex> {
    let mut flat = FlatIndex::new();
    let mut pending = vec![(oid.clone(), base.to_string())];

    while let Some((tree_oid, prefix)) = pending.pop() {
        for (name, entry) in database.read_tree(&tree_oid)?.into_entries() {
            match entry.kind {
                EntryKind::Blob => {
                    flat.insert(format!("{prefix}{name}"), entry.hash);
                }
                EntryKind::Tree => pending.push((entry.hash, format!("{prefix}{name}/"))),
            }
        }
    }

    Ok(flat)
}
