//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to brand the prompts and decide what to
//! tell the user once the project exists.

use crate::preferences::Preferences;
use std::path::Path;

/// Configuration trait for the scaffolding CLI
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// URL of the generated framework's documentation
    fn docs_url(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, prefs: &Preferences, installed: bool) -> Vec<String>;
}
