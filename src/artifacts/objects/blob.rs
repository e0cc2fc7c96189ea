//! Blob object
//!
//! Blobs store file content. They carry only the raw bytes, without the file
//! name (that lives in the parent tree).
//!
//! ## Format
//!
//! Canonical payload: the bytes themselves.
//! On disk: `{"Type": "Blob", "Object": {"Content": "<hex>"}}`

use crate::artifacts::objects::object::{Object, ObjectRef};
use crate::artifacts::objects::object_type::ObjectType;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// File content stored in the object database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
#[serde(rename_all = "PascalCase")]
pub struct Blob {
    #[serde(with = "hex")]
    content: Vec<u8>,
}

impl Blob {
    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }

    fn canonical_payload(&self) -> Vec<u8> {
        self.content.clone()
    }

    fn as_envelope(&self) -> ObjectRef<'_> {
        ObjectRef::Blob(self)
    }
}
