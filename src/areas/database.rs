//! Object database
//!
//! Objects live under `objects/<first 2 hex>/<remaining 62 hex>` as JSON
//! envelopes tagged with their kind. Writes go through a temp file in the same
//! directory followed by a rename, and an object already on disk is never
//! rewritten.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, ObjectBox, digest};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::artifacts::objects::OBJECT_DIR_CHARS;
use crate::errors::{LitError, LitResult};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// ID the given bytes would get as a blob, without storing anything
    pub fn hash(&self, content: &[u8]) -> ObjectId {
        digest(ObjectType::Blob, content)
    }

    pub fn write_blob(&self, content: Vec<u8>) -> LitResult<ObjectId> {
        self.store(&Blob::new(content))
    }

    pub fn write_tree(&self, tree: &Tree) -> LitResult<ObjectId> {
        self.store(tree)
    }

    pub fn write_commit(&self, commit: &Commit) -> LitResult<ObjectId> {
        self.store(commit)
    }

    fn store(&self, object: &impl Object) -> LitResult<ObjectId> {
        let object_id = object.object_id();
        let object_path = self.path.join(object_id.to_path());

        if object_path.exists() {
            tracing::trace!(oid = %object_id, "object already stored");
            return Ok(object_id);
        }

        let object_dir = object_path
            .parent()
            .ok_or_else(|| LitError::InvalidPath(object_path.display().to_string()))?;
        std::fs::create_dir_all(object_dir)?;

        let content = serde_json::to_vec_pretty(&object.as_envelope())?;
        self.write_object(&object_path, &content)?;

        tracing::debug!(oid = %object_id, kind = %object.object_type(), "object written");
        Ok(object_id)
    }

    fn write_object(&self, object_path: &Path, content: &[u8]) -> LitResult<()> {
        let object_dir = object_path
            .parent()
            .ok_or_else(|| LitError::InvalidPath(object_path.display().to_string()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)?;
        file.write_all(content)?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, object_path)?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }

    pub fn read_object(&self, object_id: &ObjectId) -> LitResult<ObjectBox> {
        let object_path = self.path.join(object_id.to_path());

        let content = match std::fs::read(&object_path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(LitError::NotFound(format!("object {object_id}")));
            }
            Err(err) => return Err(err.into()),
        };

        Ok(serde_json::from_slice(&content)?)
    }

    pub fn read_blob(&self, object_id: &ObjectId) -> LitResult<Blob> {
        match self.read_object(object_id)? {
            ObjectBox::Blob(blob) => Ok(*blob),
            other => Err(Self::wrong_type(object_id, ObjectType::Blob, &other)),
        }
    }

    pub fn read_tree(&self, object_id: &ObjectId) -> LitResult<Tree> {
        match self.read_object(object_id)? {
            ObjectBox::Tree(tree) => Ok(*tree),
            other => Err(Self::wrong_type(object_id, ObjectType::Tree, &other)),
        }
    }

    pub fn read_commit(&self, object_id: &ObjectId) -> LitResult<Commit> {
        match self.read_object(object_id)? {
            ObjectBox::Commit(commit) => Ok(*commit),
            other => Err(Self::wrong_type(object_id, ObjectType::Commit, &other)),
        }
    }

    fn wrong_type(object_id: &ObjectId, expected: ObjectType, actual: &ObjectBox) -> LitError {
        LitError::WrongType {
            id: object_id.clone(),
            expected,
            actual: actual.object_type(),
        }
    }

    pub fn is_commit(&self, object_id: &ObjectId) -> bool {
        self.read_commit(object_id).is_ok()
    }

    /// Resolve an abbreviated commit hash.
    ///
    /// Only commits are considered. Returns `None` when nothing matches and
    /// `AmbiguousPrefix` (with sorted candidates) when several commits do.
    pub fn expand_hash(&self, prefix: &str) -> LitResult<Option<ObjectId>> {
        let prefix = prefix.to_ascii_lowercase();
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(None);
        }

        let mut candidates = self
            .find_objects_by_prefix(&prefix)?
            .into_iter()
            .filter(|oid| self.is_commit(oid))
            .collect::<Vec<_>>();
        candidates.sort();

        match candidates.len() {
            0 => Ok(None),
            1 => Ok(candidates.pop()),
            _ => Err(LitError::AmbiguousPrefix { prefix, candidates }),
        }
    }

    /// Every stored object whose ID starts with `prefix`.
    ///
    /// With two or more characters only the matching shard directory is
    /// searched, otherwise every shard is scanned.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> LitResult<Vec<ObjectId>> {
        let shards: Vec<PathBuf> = match prefix.get(..OBJECT_DIR_CHARS) {
            Some(shard) => vec![self.path.join(shard)],
            None if self.path.is_dir() => std::fs::read_dir(&self.path)?
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|path| path.is_dir())
                .collect(),
            None => vec![],
        };

        let mut matches = Vec::new();
        for shard in shards.iter().filter(|shard| shard.is_dir()) {
            let dir_name = shard
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default();

            for entry in std::fs::read_dir(shard)? {
                let full_oid = format!("{}{}", dir_name, entry?.file_name().to_string_lossy());

                // temp files and stray entries never parse as an ID
                if full_oid.starts_with(prefix)
                    && let Ok(oid) = ObjectId::try_parse(full_oid)
                {
                    matches.push(oid);
                }
            }
        }

        Ok(matches)
    }
}
