//! Local cache store for the feed body and its revalidation token.
//!
//! Reads never fail: a missing, unreadable or empty file is simply `None`.
//! Writes go to a temp file in the cache directory that is then renamed over
//! the target, so a concurrent reader sees either the old or the new file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::config::{BODY_FILE_NAME, TOKEN_FILE_NAME};

/// Errors from cache directory and file operations.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The cache path exists but is not a directory.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// Failed to create the cache directory.
    #[error("Failed to create cache directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    /// Failed to write or remove a cache file.
    #[error("Failed to write cache file {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },
}

/// The cache directory and its two artifacts.
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
    body_path: PathBuf,
    token_path: PathBuf,
}

impl CacheStore {
    /// Create a store rooted at `dir`. Nothing is touched on disk.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            body_path: dir.join(BODY_FILE_NAME),
            token_path: dir.join(TOKEN_FILE_NAME),
            dir,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn body_path(&self) -> &Path {
        &self.body_path
    }

    pub fn token_path(&self) -> &Path {
        &self.token_path
    }

    /// Create the cache directory (and parents) if it does not exist.
    pub fn ensure_directory(&self) -> Result<(), CacheError> {
        if self.dir.exists() {
            if !self.dir.is_dir() {
                return Err(CacheError::NotADirectory(self.dir.clone()));
            }
            return Ok(());
        }

        fs::create_dir_all(&self.dir).map_err(|e| CacheError::CreateFailed {
            path: self.dir.clone(),
            reason: e.to_string(),
        })
    }

    /// Last good feed body.
    pub fn read_body(&self) -> Option<Vec<u8>> {
        fs::read(&self.body_path).ok().filter(|body| !body.is_empty())
    }

    /// Last revalidation token, trimmed.
    pub fn read_token(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.token_path).ok()?;
        let token = raw.trim();
        (!token.is_empty()).then(|| token.to_string())
    }

    /// Replace the cached body.
    pub fn write_body(&self, body: &[u8]) -> Result<(), CacheError> {
        self.write_atomic(&self.body_path, body)
    }

    /// Replace the cached token.
    pub fn write_token(&self, token: &str) -> Result<(), CacheError> {
        self.write_atomic(&self.token_path, token.as_bytes())
    }

    /// Forget the cached token so the next request is unconditional.
    pub fn clear_token(&self) -> Result<(), CacheError> {
        match fs::remove_file(&self.token_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(write_failed(&self.token_path, &e)),
        }
    }

    fn write_atomic(&self, path: &Path, contents: &[u8]) -> Result<(), CacheError> {
        let mut file = NamedTempFile::new_in(&self.dir).map_err(|e| write_failed(path, &e))?;
        file.write_all(contents).map_err(|e| write_failed(path, &e))?;
        file.persist(path).map_err(|e| write_failed(path, &e.error))?;
        Ok(())
    }
}

fn write_failed(path: &Path, err: &std::io::Error) -> CacheError {
    CacheError::WriteFailed {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}
