use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::status::status_info::{Status, StatusInfo};
use crate::errors::{LitError, LitResult};
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Metadata directory at the repository root
pub const METADATA_DIR: &str = ".lit";
const INDEX_FILE: &str = "index";
const OBJECTS_DIR: &str = "objects";

/// Handle bundling every area of a repository rooted at `path`.
///
/// Porcelain commands print through `writer`, so callers decide where output
/// goes (stdout for the binary, a buffer in tests).
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: RefCell<Index>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Open the repository rooted at `path`, creating the directory if needed.
    ///
    /// Nothing is read yet, so this also works before `init`.
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> LitResult<Self> {
        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }
        let path = path.canonicalize()?;
        let metadata_path = path.join(METADATA_DIR);

        let index = Index::new(metadata_path.join(INDEX_FILE).into_boxed_path());
        let database = Database::new(metadata_path.join(OBJECTS_DIR).into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(metadata_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: RefCell::new(index),
            database,
            workspace,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata_path(&self) -> Box<Path> {
        self.path.join(METADATA_DIR).into_boxed_path()
    }

    pub fn is_initialized(&self) -> bool {
        self.metadata_path().is_dir()
    }

    /// Fail with `NotARepository` unless `init` ran here
    pub fn ensure_initialized(&self) -> LitResult<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(LitError::NotARepository(self.path.to_path_buf()))
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    /// Current drift between working tree, index and HEAD
    pub fn status_info(&self) -> LitResult<StatusInfo> {
        self.ensure_initialized()?;

        let mut index = self.index();
        index.rehydrate()?;

        Status::new(self).initialize(&index)
    }
}
