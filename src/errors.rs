//! Error types for repository operations.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use std::path::PathBuf;

/// Errors that can occur while operating on a repository.
#[derive(Debug, thiserror::Error)]
pub enum LitError {
    /// A ref, branch, object or path does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// The object exists but carries another type tag.
    #[error("object {id} is a {actual}, not a {expected}")]
    WrongType {
        id: ObjectId,
        expected: ObjectType,
        actual: ObjectType,
    },

    /// I/O error from the underlying storage.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted record could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The name is already taken.
    #[error("{0} already exists")]
    AlreadyExists(String),

    /// HEAD would point to something that is not a branch or a commit.
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    /// Checkout refused because of staged or unstaged drift.
    #[error("uncommitted changes in: {}", .paths.join(", "))]
    UncommittedChanges { paths: Vec<String> },

    /// Checkout refused because untracked files sit where the target needs
    /// a file or a directory.
    #[error("untracked files would be overwritten by checkout: {}", .paths.join(", "))]
    UntrackedInTheWay { paths: Vec<String> },

    /// More than one commit matches an abbreviated hash.
    #[error("hash prefix {prefix} is ambiguous: {}", .candidates.iter().map(ObjectId::to_string).collect::<Vec<_>>().join(", "))]
    AmbiguousPrefix {
        prefix: String,
        candidates: Vec<ObjectId>,
    },

    /// `add` matched no modified, deleted or untracked file.
    #[error("nothing to stage at {0}")]
    NothingToStage(String),

    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// No `.lit` directory at the repository root.
    #[error("not a lit repository: {}", .0.display())]
    NotARepository(PathBuf),

    /// The operation needs HEAD to resolve to a commit.
    #[error("HEAD does not point to a commit yet")]
    NoCommitYet,
}

/// Result alias for repository operations.
pub type LitResult<T> = Result<T, LitError>;
