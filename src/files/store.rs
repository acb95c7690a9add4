//! Filesystem access below the storage root.

use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Failure while storing a file, split by the step that failed.
#[derive(Debug)]
pub enum StoreError {
    /// Missing parent directories could not be created
    CreateDir(io::Error),
    /// The file contents could not be written into place
    Write(io::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::CreateDir(e) => write!(f, "could not create directory: {}", e),
            StoreError::Write(e) => write!(f, "could not write file: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::CreateDir(e) | StoreError::Write(e) => Some(e),
        }
    }
}

/// Files stored under a single root directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Joins a request path onto the root.
    ///
    /// Leading slashes are dropped. Returns `None` when the path contains a
    /// `..`, root or prefix component, so the result never leaves the root.
    pub fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        let relative = Path::new(request_path.trim_start_matches('/'));

        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

        if escapes {
            return None;
        }

        Some(self.root.join(relative))
    }

    pub async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    /// Replaces `target` with `contents`, creating parent directories.
    ///
    /// Contents go to a temporary sibling first and are renamed over the
    /// target, so readers see either the old file or the complete new one.
    pub async fn write(&self, target: &Path, contents: &[u8]) -> Result<(), StoreError> {
        let parent = target.parent().unwrap_or(self.root.as_path());
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(StoreError::CreateDir)?;

        let file_name = target.file_name().ok_or_else(|| {
            StoreError::Write(io::Error::new(
                io::ErrorKind::InvalidInput,
                "target has no file name",
            ))
        })?;

        let tmp = parent.join(format!(
            ".{}.{}.{}.tmp",
            file_name.to_string_lossy(),
            std::process::id(),
            TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));

        if let Err(e) = tokio::fs::write(&tmp, contents).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(StoreError::Write(e));
        }

        if let Err(e) = tokio::fs::rename(&tmp, target).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(StoreError::Write(e));
        }

        Ok(())
    }
}
