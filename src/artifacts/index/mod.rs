//! Staging index data
//!
//! The index is a flat mapping from repository-relative path to blob ID.
//! Paths always use forward slashes and never start with `./` or `/`.
//!
//! ## File Format
//!
//! ```json
//! {
//!   "docs/readme.md": "<blob id>",
//!   "main.rs": "<blob id>"
//! }
//! ```

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{LitError, LitResult};
use std::collections::BTreeMap;
use std::path::{Component, Path};

/// Path to blob ID mapping, ordered by path
pub type FlatIndex = BTreeMap<String, ObjectId>;

/// Pathspec matching every path
pub const ALL_PATHS: &str = ".";

/// Normalize a user-supplied, repository-relative path.
///
/// `./a//b/` becomes `a/b`, a bare `.` (or empty input) becomes [`ALL_PATHS`].
/// Paths escaping the repository with `..` or rooted paths are rejected.
pub fn clean_path(path: &str) -> LitResult<String> {
    let mut segments = Vec::new();

    for component in Path::new(&path.replace('\\', "/")).components() {
        match component {
            Component::Normal(segment) => segments.push(segment.to_string_lossy().to_string()),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(LitError::InvalidPath(path.to_string()));
            }
        }
    }

    if segments.is_empty() {
        Ok(ALL_PATHS.to_string())
    } else {
        Ok(segments.join("/"))
    }
}

/// Whether `path` equals `pathspec` or lives below it
pub fn is_sub_path(path: &str, pathspec: &str) -> bool {
    pathspec == ALL_PATHS
        || path == pathspec
        || path
            .strip_prefix(pathspec)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Every ancestor directory of `path`, outermost first (`a/b/c` gives `a`, `a/b`)
pub fn parent_dirs(path: &str) -> Vec<&str> {
    path.match_indices('/').map(|(at, _)| &path[..at]).collect()
}
