use serde::{Deserialize, Serialize};

/// Kind tag of a stored object, also used as the kind of a tree entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ObjectType {
    Blob,
    Tree,
    Commit,
}

impl ObjectType {
    /// Lowercase name used in the hash header
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Tree => "tree",
            ObjectType::Commit => "commit",
        }
    }

    /// Capitalized tag used in the envelope and in tree entries
    pub fn as_tag(&self) -> &'static str {
        match self {
            ObjectType::Blob => "Blob",
            ObjectType::Tree => "Tree",
            ObjectType::Commit => "Commit",
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
