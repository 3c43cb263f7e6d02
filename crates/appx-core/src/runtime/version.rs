//! Version comparison for installed tools

use anyhow::Result;
use semver::Version;

/// Oldest Node.js release supported by Next.js 14
pub const MIN_NODE_VERSION: &str = "18.17.0";

/// Compare an installed tool version against the minimum it needs.
/// Returns a warning message if the installed version is older.
pub fn check_compatibility(tool: &str, installed: &str, required: &str) -> Option<String> {
    let installed_ver = match parse_version(installed) {
        Ok(v) => v,
        Err(_) => return None, // Can't compare, skip warning
    };

    let required_ver = match parse_version(required) {
        Ok(v) => v,
        Err(_) => return None,
    };

    if installed_ver < required_ver {
        Some(format!(
            "{} {} is older than {}, the generated project may not start.",
            tool, installed_ver, required_ver
        ))
    } else {
        None
    }
}

/// Parse version string, handling a leading `v` and surrounding whitespace
pub fn parse_version(version_str: &str) -> Result<Version> {
    let trimmed = version_str.trim();
    let cleaned = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_older_than_minimum() {
        let warning = check_compatibility("Node.js", "v16.20.2", MIN_NODE_VERSION);
        assert!(warning.is_some());
        assert!(warning.unwrap().contains("18.17.0"));
    }

    #[test]
    fn test_node_same_as_minimum() {
        assert!(check_compatibility("Node.js", "v18.17.0", MIN_NODE_VERSION).is_none());
    }

    #[test]
    fn test_node_newer_than_minimum() {
        assert!(check_compatibility("Node.js", "v20.11.1\n", MIN_NODE_VERSION).is_none());
    }

    #[test]
    fn test_invalid_versions() {
        // Should return None (no warning) for invalid versions
        assert!(check_compatibility("Node.js", "unknown", MIN_NODE_VERSION).is_none());
    }
}
