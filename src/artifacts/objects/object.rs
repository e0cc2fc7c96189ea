use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Compute the ID of an object of the given kind from its canonical payload
pub fn digest(object_type: ObjectType, payload: &[u8]) -> ObjectId {
    let mut hasher = Sha256::new();
    hasher.update(format!("{} {}\0", object_type.as_str(), payload.len()).as_bytes());
    hasher.update(payload);

    ObjectId::from_digest(&hasher.finalize())
}

pub trait Object {
    fn object_type(&self) -> ObjectType;

    /// The byte form the object ID is computed from
    fn canonical_payload(&self) -> Vec<u8>;

    /// Borrowed envelope used when writing the object to disk
    fn as_envelope(&self) -> ObjectRef<'_>;

    fn object_id(&self) -> ObjectId {
        digest(self.object_type(), &self.canonical_payload())
    }
}

/// Decoded on-disk envelope: `{"Type": <tag>, "Object": <fields>}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "Type", content = "Object")]
pub enum ObjectBox {
    Blob(Box<Blob>),
    Tree(Box<Tree>),
    Commit(Box<Commit>),
}

impl ObjectBox {
    pub fn object_type(&self) -> ObjectType {
        match self {
            ObjectBox::Blob(_) => ObjectType::Blob,
            ObjectBox::Tree(_) => ObjectType::Tree,
            ObjectBox::Commit(_) => ObjectType::Commit,
        }
    }
}

/// Same envelope as [`ObjectBox`], borrowing the object for serialization
#[derive(Debug, Serialize)]
#[serde(tag = "Type", content = "Object")]
pub enum ObjectRef<'o> {
    Blob(&'o Blob),
    Tree(&'o Tree),
    Commit(&'o Commit),
}
