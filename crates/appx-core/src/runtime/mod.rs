//! External tools: detection, process execution and dependency install
//!
//! This module provides:
//! - Toolchain detection (git, Node.js, package managers)
//! - The `CommandRunner` seam every external command goes through
//! - The package-install step

pub mod check;
pub mod install;
pub mod process;
pub mod version;

pub use check::{check_toolchain, Preflight, RuntimeInfo};
pub use install::{install_dependencies, install_invocation};
pub use process::{CommandRunner, Invocation, SystemRunner};
