//! Fatal conditions a scaffolding run can end with
//!
//! Everything else travels as plain `anyhow` context; these variants exist so
//! callers (and tests) can tell a refused run apart from an I/O failure with
//! `err.downcast_ref::<ScaffoldError>()`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The target already holds a project
    #[error("package.json already exists in {}", .0.display())]
    ManifestExists(PathBuf),

    /// The target exists and has other entries in it
    #[error("directory {} already exists and is not empty", .0.display())]
    DirectoryNotEmpty(PathBuf),

    #[error(
        "invalid import alias '{0}': expected one of ! @ # $ % ^ & optionally followed by / and *"
    )]
    InvalidImportAlias(String),

    /// A prompt had to be answered but nobody is at the terminal
    #[error("\"{question}\" needs an answer but no terminal is attached; pass the matching flag or --yes")]
    NonInteractive { question: String },

    #[error("`{command}` failed ({status})")]
    CommandFailed { command: String, status: String },
}
