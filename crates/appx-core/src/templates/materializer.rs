//! Turns resolved preferences into a project on disk
//!
//! One pass, in a fixed order, with no rollback: a failure leaves whatever
//! was already written in place.

use crate::config::{jsconfig, to_json_file, tsconfig};
use crate::error::ScaffoldError;
use crate::preferences::{Language, Preferences, Style, UiLibrary};
use crate::runtime::install::install_dependencies;
use crate::runtime::process::{CommandRunner, Invocation};
use crate::templates::assets::{self, text};
use crate::templates::manifest::TemplateManifest;
use crate::templates::package_json::build_manifest;
use crate::templates::skeleton::{create_skeleton, write_global_styles};
use crate::templates::writer::ProjectWriter;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// `git init` with a fixed default branch
pub fn git_init_invocation(project_dir: &Path) -> Invocation {
    Invocation::new("git", &["init", "-b", "main"], project_dir)
}

/// The shadcn-ui initializer; it asks its own questions, so it gets the terminal
pub fn shadcn_invocation(project_dir: &Path) -> Invocation {
    Invocation::new("npx", &["shadcn-ui@latest", "init"], project_dir).interactive()
}

/// Package name for the manifest: the last component of the resolved
/// target, so `.` and `..` name the directory they point at
fn package_name(prefs: &Preferences, target: &Path) -> Result<String> {
    let resolved = target
        .canonicalize()
        .with_context(|| format!("Failed to resolve directory: {}", target.display()))?;
    Ok(resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| prefs.package_name()))
}

/// Generate the project into `target`, without installing dependencies.
///
/// Returns the files written, relative to `target`.
pub async fn materialize<R: CommandRunner>(
    prefs: &Preferences,
    target: &Path,
    runner: &R,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(target)
        .await
        .with_context(|| format!("Failed to create directory: {}", target.display()))?;

    if target.join("package.json").exists() {
        return Err(ScaffoldError::ManifestExists(target.to_path_buf()).into());
    }

    runner.run(&git_init_invocation(target)).await?;

    let manifest = TemplateManifest::embedded()?;
    let mut out = ProjectWriter::new(target);

    for file in &manifest.root_files {
        out.write(file.destination(), &text(assets::get(&file.source)?))
            .await?;
    }

    match prefs.language {
        Language::TypeScript => {
            out.write("next-env.d.ts", &text(assets::get("config/next-env.d.ts")?))
                .await?;
            out.write("tsconfig.json", &to_json_file(&tsconfig(prefs))?)
                .await?;
        }
        Language::JavaScript => {
            out.write("jsconfig.json", &to_json_file(&jsconfig(prefs))?)
                .await?;
        }
    }

    if prefs.eslint {
        out.write(".eslintrc.json", &text(assets::get("config/eslintrc.json")?))
            .await?;
    }

    if prefs.style == Style::TailwindCss {
        let config = format!("tailwind.config.{}", prefs.language.module_ext());
        out.write(&config, &text(assets::get(&format!("config/{}", config))?))
            .await?;
        out.write(
            "postcss.config.js",
            &text(assets::get("config/postcss.config.js")?),
        )
        .await?;
    }

    if prefs.unit_testing {
        out.write("jest.config.js", &text(assets::get("config/jest.config.js")?))
            .await?;
        out.write("jest.setup.js", &text(assets::get("config/jest.setup.js")?))
            .await?;
    }

    if prefs.e2e_testing {
        out.write(
            "cypress.config.js",
            &text(assets::get("config/cypress.config.js")?),
        )
        .await?;
    }

    let mut package = build_manifest(prefs);
    package.name = package_name(prefs, target)?;
    out.write("package.json", &to_json_file(&package)?).await?;

    create_skeleton(&mut out, prefs, &manifest).await?;
    write_global_styles(&mut out, prefs).await?;

    // Needs package.json and the tsconfig/jsconfig on disk
    if prefs.ui_library == UiLibrary::Shadcn {
        runner.run(&shadcn_invocation(target)).await?;
    }

    Ok(out.into_written())
}

/// Generate the project, then install its dependencies
pub async fn scaffold<R: CommandRunner>(
    prefs: &Preferences,
    target: &Path,
    runner: &R,
) -> Result<Vec<PathBuf>> {
    let written = materialize(prefs, target, runner).await?;
    install_dependencies(runner, prefs.package_manager, target).await?;
    Ok(written)
}
