//! Local filesystem store for generated clearance letters
//!
//! One file per NIM under the configured directory. Writing again for the
//! same NIM replaces the previous letter.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::error::AppError;
use crate::shared::constants::LETTER_FILE_PREFIX;

/// Filesystem-backed letter store
#[derive(Debug, Clone)]
pub struct LetterStore {
    output_dir: PathBuf,
}

impl LetterStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// File name of the letter for a NIM, e.g. `surat_bebas_202401001.txt`
    pub fn file_name(nim: &str) -> String {
        format!("{}{}.txt", LETTER_FILE_PREFIX, nim)
    }

    /// Deterministic path of the letter for a NIM
    pub fn path_for(&self, nim: &str) -> PathBuf {
        self.output_dir.join(Self::file_name(nim))
    }

    /// Write the letter, creating the output directory first if needed.
    /// Returns the path written.
    pub async fn write(&self, nim: &str, content: &str) -> Result<PathBuf, AppError> {
        tokio::fs::create_dir_all(&self.output_dir).await?;

        let path = self.path_for(nim);
        tokio::fs::write(&path, content.as_bytes()).await?;

        info!(
            "Letter written: nim={}, path={}, bytes={}",
            nim,
            path.display(),
            content.len()
        );

        Ok(path)
    }

    /// Read back a letter. `None` when no letter was generated for the NIM.
    pub async fn read(&self, nim: &str) -> Result<Option<Vec<u8>>, AppError> {
        let path = self.path_for(nim);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Letter not found at {}", path.display());
                Ok(None)
            }
            Err(e) => Err(AppError::Storage(e)),
        }
    }
}
