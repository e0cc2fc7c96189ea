//! Core repository components
//!
//! - `database`: Object database for storing blobs, trees, and commits
//! - `index`: Staging area tracking the next commit's files
//! - `refs`: Reference management (branches, HEAD)
//! - `repository`: Handle tying the areas together
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
