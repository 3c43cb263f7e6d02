//! The fixed folder layout of a generated project
//!
//! Layout under the source root (`src/` or the project root):
//!
//! ```text
//! app/                      (app router only)
//!   (home)/page, (home)/sections/index
//!   layout, providers, types
//! components/{card,form,layout,list,ui}/index
//!   layout/{Header,Footer}
//!   ui/{AppxGroupSignature,Button,Icons,Section}
//! hooks/index  utils/index  context/index  data/index
//! styles/
//! ```

use crate::preferences::{Preferences, Router, Style};
use crate::templates::assets::{self, render, text};
use crate::templates::manifest::{ComponentGroup, TemplateManifest};
use crate::templates::writer::ProjectWriter;
use crate::templates::EOL;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Top-level folders under the source root, in creation order
pub const APP_FOLDERS: &[&str] = &["components", "hooks", "utils", "context", "data", "styles"];

/// Sub-folders of `components/`
pub const COMPONENT_FOLDERS: &[&str] = &["card", "form", "layout", "list", "ui"];

/// Folders that get no index stub of their own
const UNINDEXED_FOLDERS: &[&str] = &["components", "styles"];

fn index_file(dir: &Path, prefs: &Preferences) -> PathBuf {
    dir.join(format!("index.{}", prefs.language.module_ext()))
}

/// Create `public/`, the optional `src/`, the router tree and every folder
/// of the skeleton.
pub async fn create_skeleton(
    out: &mut ProjectWriter,
    prefs: &Preferences,
    manifest: &TemplateManifest,
) -> Result<()> {
    out.mkdir("public").await?;

    let root = PathBuf::from(prefs.source_root());
    if prefs.src_dir {
        out.mkdir(&root).await?;
    }

    match prefs.router {
        Router::App => create_app_router(out, prefs, manifest, &root).await?,
        // Page router scaffolding does not exist; the tree is simply omitted
        Router::Page => {}
    }

    for folder in APP_FOLDERS {
        let dir = root.join(folder);
        out.mkdir(&dir).await?;
        if !UNINDEXED_FOLDERS.contains(folder) {
            out.write(index_file(&dir, prefs), "").await?;
        }
    }

    for folder in COMPONENT_FOLDERS {
        let dir = root.join("components").join(folder);
        out.mkdir(&dir).await?;
        out.write(index_file(&dir, prefs), "").await?;

        if let Some(group) = manifest.group(folder) {
            create_component_group(out, prefs, group, &dir).await?;
        }
    }

    Ok(())
}

async fn create_app_router(
    out: &mut ProjectWriter,
    prefs: &Preferences,
    manifest: &TemplateManifest,
    root: &Path,
) -> Result<()> {
    let sections = root.join("app").join("(home)").join("sections");
    out.mkdir(&sections).await?;
    out.write(index_file(&sections, prefs), "").await?;

    for file in manifest
        .app_router
        .iter()
        .filter(|f| f.applies_to(prefs.language))
    {
        let content = assets::get(&file.asset_path(prefs.language))?;
        out.write(root.join(file.destination(prefs.language)), &render(content, prefs))
            .await?;
    }

    Ok(())
}

/// Write each component of the group, then re-export them all from the
/// group's index in declaration order.
async fn create_component_group(
    out: &mut ProjectWriter,
    prefs: &Preferences,
    group: &ComponentGroup,
    dir: &Path,
) -> Result<()> {
    for component in &group.components {
        let component_dir = dir.join(&component.name);
        out.mkdir(&component_dir).await?;

        let index = assets::get(&component.index_asset(&group.folder, prefs.language))?;
        out.write(
            component_dir.join(format!("index.{}", prefs.language.component_ext())),
            &render(index, prefs),
        )
        .await?;

        if component.styles && prefs.style == Style::Scss {
            let styles = assets::get(&component.styles_asset(&group.folder))?;
            out.write(component_dir.join("styles.scss"), &text(styles))
                .await?;
        }

        if component.types && prefs.language.is_typescript() {
            let types = assets::get(&component.types_asset(&group.folder))?;
            out.write(component_dir.join("types.ts"), &text(types)).await?;
        }
    }

    let index = index_file(dir, prefs);
    for component in &group.components {
        out.append(
            &index,
            &format!("export {{ {0} }} from './{0}'{1}", component.name, EOL),
        )
        .await?;
    }

    Ok(())
}

/// Write the global stylesheet for the chosen style under `styles/`
pub async fn write_global_styles(out: &mut ProjectWriter, prefs: &Preferences) -> Result<()> {
    let styles = PathBuf::from(prefs.source_root()).join("styles");

    let files: &[(&str, &str)] = match prefs.style {
        Style::Css => &[("app/styles/css/main.css", "main.css")],
        Style::Scss => &[
            ("app/styles/scss/globals/_mixins.scss", "globals/_mixins.scss"),
            ("app/styles/scss/globals/_normalizers.scss", "globals/_normalizers.scss"),
            ("app/styles/scss/globals/_variables.scss", "globals/_variables.scss"),
            ("app/styles/scss/main.scss", "main.scss"),
        ],
        Style::TailwindCss => &[("app/styles/tailwindcss/main.css", "main.css")],
        Style::StyledComponents => &[],
    };

    for (source, dest) in files {
        out.write(styles.join(dest), &text(assets::get(source)?))
            .await?;
    }

    Ok(())
}
