//! File-backed JSON document store.
//!
//! Every save replaces the whole document. The new content is written to a
//! temporary file beside the target and renamed over it, so readers see
//! either the previous document or the new one. Concurrent writers are not
//! coordinated: the last rename wins.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::Serialize;
use serde_json::{Map, Value, ser::PrettyFormatter};
use showreel_model::Catalog;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;

const INDENT: &[u8] = b"    ";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to create data file {path}")]
    Seed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write data file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize document")]
    Serialize(#[from] serde_json::Error),
    #[error("store task failed")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: Arc<PathBuf>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the data file with an empty catalog if it does not exist yet.
    /// Returns whether a file was created.
    pub fn ensure_seeded(&self) -> Result<bool, StoreError> {
        seed(&self.path)
    }

    /// Replace the stored document.
    pub async fn save(
        &self,
        document: Map<String, Value>,
    ) -> Result<(), StoreError> {
        let path = Arc::clone(&self.path);
        tokio::task::spawn_blocking(move || {
            seed(&path)?;
            write_document(&path, &Value::Object(document))
        })
        .await?
    }
}

fn seed(path: &Path) -> Result<bool, StoreError> {
    if path.exists() {
        return Ok(false);
    }
    let bytes = to_pretty_bytes(&Catalog::empty())?;
    replace_file(path, &bytes).map_err(|source| StoreError::Seed {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "created data file");
    Ok(true)
}

fn write_document(path: &Path, document: &Value) -> Result<(), StoreError> {
    let bytes = to_pretty_bytes(document)?;
    replace_file(path, &bytes).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Pretty JSON with a four-space indent. Non-ASCII text is kept as is.
pub fn to_pretty_bytes<T: Serialize + ?Sized>(
    value: &T,
) -> Result<Vec<u8>, serde_json::Error> {
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(
        &mut out,
        PrettyFormatter::with_indent(INDENT),
    );
    value.serialize(&mut serializer)?;
    Ok(out)
}

fn replace_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(bytes)?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|err| err.error)?;
    Ok(())
}
