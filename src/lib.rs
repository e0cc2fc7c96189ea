//! lit, a minimal content-addressed version control engine
//!
//! - `areas`: the on-disk parts of a repository (object database, index, refs, workspace)
//! - `artifacts`: the data types and algorithms working on top of those areas
//! - `commands`: the user-facing operations (init, add, commit, status, log, branch, checkout)
//! - `errors`: the error taxonomy shared by all of the above

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

pub use areas::repository::Repository;
pub use errors::{LitError, LitResult};
