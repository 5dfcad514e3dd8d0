//! # Argument Store
//!
//! Persists the parameters of the last generation run so a bare
//! `uigw-client-gen` repeats it. There is a single record, overwritten on
//! every save.
//!
//! Record layout:
//!
//! ```json
//! {"file": "https://example.org/openapi.json", "asyncio": false}
//! ```

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Parameters of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationArgs {
    /// OpenAPI document location: a URL or a local file path.
    pub file: String,
    /// Generate the asyncio flavor of the client.
    pub asyncio: bool,
}

impl InvocationArgs {
    pub fn new(file: impl Into<String>, asyncio: bool) -> Self {
        Self {
            file: file.into(),
            asyncio,
        }
    }
}

/// Storage for the last-used [`InvocationArgs`].
pub trait ArgsStore {
    /// Whether a record is present.
    fn exists(&self) -> bool;

    /// Replace the record with `args`.
    fn save(&self, args: &InvocationArgs) -> Result<(), StoreError>;

    /// Read the record. Fails if it is missing or malformed.
    fn load(&self) -> Result<InvocationArgs, StoreError>;
}

/// JSON record at a fixed path on disk.
#[derive(Debug, Clone)]
pub struct FileArgsStore {
    path: PathBuf,
}

impl FileArgsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ArgsStore for FileArgsStore {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn save(&self, args: &InvocationArgs) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let json = serde_json::to_string(args).map_err(StoreError::Serialize)?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), "saved generator arguments");
        Ok(())
    }

    fn load(&self) -> Result<InvocationArgs, StoreError> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let args = serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "loaded saved generator arguments");
        Ok(args)
    }
}

/// In-process store, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryArgsStore {
    record: RefCell<Option<InvocationArgs>>,
}

impl MemoryArgsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(args: InvocationArgs) -> Self {
        Self {
            record: RefCell::new(Some(args)),
        }
    }

    /// Current record, if any.
    pub fn record(&self) -> Option<InvocationArgs> {
        self.record.borrow().clone()
    }
}

impl ArgsStore for MemoryArgsStore {
    fn exists(&self) -> bool {
        self.record.borrow().is_some()
    }

    fn save(&self, args: &InvocationArgs) -> Result<(), StoreError> {
        *self.record.borrow_mut() = Some(args.clone());
        Ok(())
    }

    fn load(&self) -> Result<InvocationArgs, StoreError> {
        self.record.borrow().clone().ok_or_else(|| StoreError::Io {
            path: PathBuf::from("<memory>"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no stored arguments"),
        })
    }
}
