//! Template assets and project generation
//!
//! This module provides:
//! - The embedded asset table and its YAML manifest
//! - package.json construction from the preferences
//! - The materializer that writes a project and its folder skeleton

pub mod assets;
pub mod manifest;
pub mod materializer;
pub mod package_json;
pub mod skeleton;
pub mod writer;

use std::path::Path;
use walkdir::{DirEntry, WalkDir};

pub use manifest::{ComponentGroup, ComponentTemplate, RouteFile, SharedFile, TemplateManifest};
pub use materializer::{materialize, scaffold};
pub use package_json::{build_manifest, PackageJson};

/// Line ending of every generated text file
pub const EOL: &str = if cfg!(windows) { "\r\n" } else { "\n" };

fn is_tooling_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && matches!(entry.file_name().to_str(), Some("node_modules" | ".git"))
}

/// Count the files of a project, ignoring installed packages and git metadata
pub fn count_project_files(root: &Path) -> usize {
    WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_tooling_dir(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_count_skips_node_modules_and_git() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        std::fs::create_dir_all(root.join("node_modules/next")).unwrap();
        std::fs::create_dir_all(root.join(".git")).unwrap();
        std::fs::create_dir_all(root.join("src/hooks")).unwrap();
        std::fs::write(root.join("node_modules/next/package.json"), "{}").unwrap();
        std::fs::write(root.join(".git/HEAD"), "ref").unwrap();
        std::fs::write(root.join("package.json"), "{}").unwrap();
        std::fs::write(root.join("src/hooks/index.ts"), "").unwrap();

        assert_eq!(count_project_files(root), 2);
    }
}
