//! Branch names and the HEAD pointer
//!
//! - `branch_name`: validated branch names
//! - `head`: the attached/detached HEAD state and its on-disk record

pub mod branch_name;
pub mod head;

/// Rejects names starting with `.` or `/`, containing `..`, `/.` or `@{`,
/// ending with `/` or `.lock`, and names with control, space or `*:?[\~^`
/// characters.
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";
