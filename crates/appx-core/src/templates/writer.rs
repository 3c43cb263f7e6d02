//! File-system writes into the project being generated

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Writes files relative to the project root and remembers what it wrote.
///
/// Every failure is fatal for the run; nothing already written is removed.
pub struct ProjectWriter {
    root: PathBuf,
    written: Vec<PathBuf>,
}

impl ProjectWriter {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            written: Vec::new(),
        }
    }

    /// Create a directory (and any missing parents)
    pub async fn mkdir(&self, relative: impl AsRef<Path>) -> Result<()> {
        let path = self.root.join(relative);
        fs::create_dir_all(&path)
            .await
            .with_context(|| format!("Failed to create directory: {}", path.display()))
    }

    /// Write `contents` to a file, replacing anything already there
    pub async fn write(&mut self, relative: impl AsRef<Path>, contents: &str) -> Result<()> {
        let relative = relative.as_ref();
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&path, contents)
            .await
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        self.written.push(relative.to_path_buf());
        Ok(())
    }

    /// Append to an existing file
    pub async fn append(&self, relative: impl AsRef<Path>, contents: &str) -> Result<()> {
        let path = self.root.join(relative);
        let mut file = fs::OpenOptions::new()
            .append(true)
            .open(&path)
            .await
            .with_context(|| format!("Failed to open file: {}", path.display()))?;
        file.write_all(contents.as_bytes())
            .await
            .with_context(|| format!("Failed to append to file: {}", path.display()))?;
        file.flush().await?;
        Ok(())
    }

    /// Files written so far, relative to the root, in write order
    #[cfg(test)]
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn into_written(self) -> Vec<PathBuf> {
        self.written
    }
}
