//! Command implementations
//!
//! - `porcelain`: user-facing workflows (init, add, commit, status, log, branch, checkout)

pub mod porcelain;
