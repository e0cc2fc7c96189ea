//! Object types and their storage contract
//!
//! All content is stored as immutable objects identified by SHA-256 hashes:
//!
//! - **Blob**: file content (raw bytes)
//! - **Tree**: directory listing (names mapped to kind + object ID)
//! - **Commit**: snapshot with a name, a root tree, parent commits and a timestamp
//!
//! ## Identity
//!
//! An object ID is `sha256("<kind> <len>\0" || payload)` in lowercase hex, where
//! `payload` is the canonical form produced by [`object::Object::canonical_payload`].
//! The JSON envelope written to disk is only the storage encoding and is never hashed.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-256 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 64;

/// Number of leading hash characters used as the object directory name
pub const OBJECT_DIR_CHARS: usize = 2;
