//! Appx Core - Shared library behind the `create-appx-app` CLI
//!
//! This library turns a set of answered preferences into a ready-to-run
//! Next.js project: configuration files, a package manifest, a fixed folder
//! skeleton with starter components, and optionally installed dependencies.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Preference store, config generators,
//!   embedded templates, external command invocation
//! - **Layer 2: Workflow Orchestration** - `resolve` (flags + prompts),
//!   `materialize` and `scaffold`, and the `ProductConfig` trait
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use appx_core::preferences::{resolve, DefaultsPrompter, Overrides};
//! use appx_core::runtime::SystemRunner;
//!
//! let cwd = std::env::current_dir()?;
//! let prefs = resolve(&Overrides::default(), &mut DefaultsPrompter, &cwd)?;
//! appx_core::scaffold(&prefs, &cwd.join(&prefs.name), &SystemRunner).await?;
//! ```

pub mod config;
pub mod error;
pub mod preferences;
pub mod product;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::ScaffoldError;
pub use preferences::{Overrides, Preferences};
pub use product::ProductConfig;
pub use templates::{materialize, scaffold};

#[cfg(feature = "tui")]
pub use tui::run;
