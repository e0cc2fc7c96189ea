//! Porcelain commands (user-facing operations)
//!
//! Each command is an `impl Repository` block. The data-returning operation
//! (`stage`, `create_commit`, `history`, `branches`, `switch`) lives next to
//! the command that prints its result.
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files for commit
//! - `commit`: Create a new commit
//! - `status`: Show working tree status
//! - `log`: Show commit history
//! - `branch`: Create, list, or delete branches
//! - `checkout`: Switch branches or detach HEAD on a commit

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod status;
