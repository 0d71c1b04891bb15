// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary directory management for integration tests.
//!
//! This module provides utilities for creating and managing temporary
//! directories with automatic cleanup on drop.

use std::path::PathBuf;
use tokio::fs;

/// Temporary directories used for testing.
///
/// Automatically cleans up all created directories when dropped.
#[derive(Debug)]
pub struct TempDirs {
    /// Directory holding catalog documents.
    pub data_dir: PathBuf,
    /// State directory for database files.
    pub state_dir: PathBuf,
}

impl TempDirs {
    /// Creates new temporary directories for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let base = tempfile::tempdir()?.keep();

        let data_dir = base.join("data");
        let state_dir = base.join("state");

        fs::create_dir_all(&data_dir).await?;

        Ok(Self {
            data_dir,
            state_dir,
        })
    }

    /// Gets the base temporary directory.
    #[must_use]
    pub fn base(&self) -> PathBuf {
        self.data_dir
            .parent()
            .expect("temp directories should have a parent")
            .to_path_buf()
    }

    /// Writes a catalog document into the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub async fn write_catalog(
        &self,
        content: &str,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = self.data_dir.join("events.json");
        fs::write(&path, content).await?;
        Ok(path)
    }
}

/// Sets up temporary directories for integration tests.
///
/// This is a convenience wrapper around [`TempDirs::new`].
///
/// # Errors
///
/// Returns an error if directory creation fails.
pub async fn setup_temp_dirs() -> Result<TempDirs, Box<dyn std::error::Error>> {
    TempDirs::new().await
}

impl Drop for TempDirs {
    fn drop(&mut self) {
        let base = self.base();
        if let Err(e) = std::fs::remove_dir_all(&base) {
            tracing::warn!(path = %base.display(), err = %e, "failed to clean up temp directory");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn temp_dirs_creates_data_directory() {
        let dirs = TempDirs::new().await.unwrap();

        assert!(dirs.data_dir.is_dir());
        assert!(!dirs.state_dir.exists());
        assert_eq!(dirs.data_dir.parent(), dirs.state_dir.parent());
    }

    #[tokio::test]
    async fn temp_dirs_write_catalog() {
        let dirs = TempDirs::new().await.unwrap();

        let path = dirs.write_catalog("[]").await.unwrap();

        assert!(path.starts_with(&dirs.data_dir));
        assert_eq!(fs::read_to_string(&path).await.unwrap(), "[]");
    }

    #[tokio::test]
    async fn temp_dirs_cleanup_on_drop() {
        let base = {
            let dirs = TempDirs::new().await.unwrap();
            let base = dirs.base();
            assert!(base.exists());
            base
        };

        assert!(!base.exists());
    }
}
