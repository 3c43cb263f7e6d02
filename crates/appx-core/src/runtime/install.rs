//! Package-install step: the last thing a run does

use crate::preferences::PackageManager;
use crate::runtime::process::{CommandRunner, Invocation};
use anyhow::Result;
use std::path::Path;

/// The install command for `package_manager`, run inside `project_dir`
pub fn install_invocation(package_manager: PackageManager, project_dir: &Path) -> Invocation {
    Invocation::new(
        package_manager.binary(),
        package_manager.install_args(),
        project_dir,
    )
}

/// Install the generated project's dependencies. A failing installer ends
/// the run; nothing is retried.
pub async fn install_dependencies<R: CommandRunner>(
    runner: &R,
    package_manager: PackageManager,
    project_dir: &Path,
) -> Result<()> {
    runner
        .run(&install_invocation(package_manager, project_dir))
        .await
}
