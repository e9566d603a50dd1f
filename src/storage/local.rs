// src/storage/local.rs
//! Local filesystem marker store.
//!
//! The marker lives in a plain-text file holding a single announcement
//! id. Writes go through a temp file plus rename and are fsynced
//! first, so a crash mid-write never leaves a partial value behind.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::StateError;
use crate::storage::MarkerStore;

/// Marker store backed by a single text file.
#[derive(Debug, Clone)]
pub struct LocalMarkerStore {
    path: PathBuf,
}

impl LocalMarkerStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the parent directory exists.
    async fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            // A bare filename has an empty parent; nothing to create.
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        Ok(())
    }

    async fn write_durable(&self, bytes: &[u8]) -> std::io::Result<()> {
        self.ensure_dir().await?;

        let tmp = self.path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        file.sync_all().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await
    }
}

#[async_trait]
impl MarkerStore for LocalMarkerStore {
    async fn load(&self) -> Result<Option<String>, StateError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => {
                let id = content.trim();
                if id.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(id.to_string()))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StateError::read(&self.path, e)),
        }
    }

    async fn save(&self, id: &str) -> Result<(), StateError> {
        self.write_durable(id.as_bytes())
            .await
            .map_err(|e| StateError::write(&self.path, e))
    }
}
