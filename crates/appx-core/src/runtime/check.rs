//! Toolchain detection for git, Node.js and the selected package manager

use crate::preferences::PackageManager;
use crate::runtime::version::{self, MIN_NODE_VERSION};
use std::process::Command;

/// Tool detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Run `<binary> --version` and report what came back
pub fn probe(name: &'static str, binary: &str) -> RuntimeInfo {
    let output = if cfg!(windows) {
        Command::new("cmd").args(["/C", binary, "--version"]).output()
    } else {
        Command::new(binary).arg("--version").output()
    };

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

pub fn check_git() -> RuntimeInfo {
    probe("git", "git")
}

pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node")
}

pub fn check_package_manager(package_manager: PackageManager) -> RuntimeInfo {
    probe(package_manager.binary(), package_manager.binary())
}

/// Outcome of the preflight: detected tools plus advisory warnings
#[derive(Debug, Clone)]
pub struct Preflight {
    pub tools: Vec<RuntimeInfo>,
    pub warnings: Vec<String>,
}

/// Check the tools a run will launch. Nothing here is fatal; a missing tool
/// only fails the run once it is actually invoked.
pub fn check_toolchain(package_manager: PackageManager, install: bool) -> Preflight {
    let mut tools = vec![check_git()];
    if install {
        tools.push(check_node());
        tools.push(check_package_manager(package_manager));
    }
    summarize(tools)
}

fn summarize(tools: Vec<RuntimeInfo>) -> Preflight {
    let mut warnings = Vec::new();

    for tool in &tools {
        match (&tool.version, tool.available) {
            (_, false) => warnings.push(format!("{} was not found on PATH", tool.name)),
            (Some(installed), true) if tool.name == "Node.js" => {
                if let Some(warning) =
                    version::check_compatibility(tool.name, installed, MIN_NODE_VERSION)
                {
                    warnings.push(warning);
                }
            }
            _ => {}
        }
    }

    Preflight { tools, warnings }
}
