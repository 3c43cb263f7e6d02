//! Template manifest types and parsing

use crate::preferences::Language;
use crate::templates::assets;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A language-independent file copied verbatim into the project root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedFile {
    /// Asset key
    pub source: String,

    /// Destination path in the project (defaults to source if not specified)
    #[serde(default)]
    pub dest: Option<String>,
}

impl SharedFile {
    /// Get the destination path (falls back to source if dest not specified)
    pub fn destination(&self) -> &str {
        self.dest.as_deref().unwrap_or(&self.source)
    }
}

/// A file of the app-router tree, relative to the source root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteFile {
    /// Asset path without language directory or extension
    pub source: String,

    /// Destination without extension (defaults to source)
    #[serde(default)]
    pub dest: Option<String>,

    /// Takes the tsx/jsx extension instead of ts/js
    #[serde(default)]
    pub jsx: bool,

    /// Only generated for TypeScript projects
    #[serde(default)]
    pub typescript_only: bool,
}

impl RouteFile {
    fn extension(&self, language: Language) -> &'static str {
        if self.jsx {
            language.component_ext()
        } else {
            language.module_ext()
        }
    }

    /// Asset key of this file's variant for `language`
    pub fn asset_path(&self, language: Language) -> String {
        format!(
            "app/{}/{}.{}",
            language.template_dir(),
            self.source,
            self.extension(language)
        )
    }

    /// Destination relative to the source root
    pub fn destination(&self, language: Language) -> String {
        format!(
            "{}.{}",
            self.dest.as_deref().unwrap_or(&self.source),
            self.extension(language)
        )
    }

    pub fn applies_to(&self, language: Language) -> bool {
        !self.typescript_only || language.is_typescript()
    }
}

/// A component folder (`components/<folder>/<name>`) with real content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentTemplate {
    pub name: String,

    /// Ships a `styles.scss`, written for SCSS projects
    #[serde(default)]
    pub styles: bool,

    /// Ships a `types.ts`, written for TypeScript projects
    #[serde(default)]
    pub types: bool,
}

impl ComponentTemplate {
    fn asset_dir(&self, folder: &str, language: Language) -> String {
        format!(
            "app/{}/components/{}/{}",
            language.template_dir(),
            folder,
            self.name
        )
    }

    pub fn index_asset(&self, folder: &str, language: Language) -> String {
        format!(
            "{}/index.{}",
            self.asset_dir(folder, language),
            language.component_ext()
        )
    }

    /// Stylesheets and type declarations live with the TypeScript variant
    pub fn styles_asset(&self, folder: &str) -> String {
        format!("{}/styles.scss", self.asset_dir(folder, Language::TypeScript))
    }

    pub fn types_asset(&self, folder: &str) -> String {
        format!("{}/types.ts", self.asset_dir(folder, Language::TypeScript))
    }
}

/// Components generated under one `components/` sub-folder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentGroup {
    pub folder: String,
    pub components: Vec<ComponentTemplate>,
}

/// Embedded template manifest (templates/template.yaml)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateManifest {
    /// Root-level files independent of every preference
    pub root_files: Vec<SharedFile>,

    /// Files of the app-router tree
    #[serde(default)]
    pub app_router: Vec<RouteFile>,

    #[serde(default)]
    pub component_groups: Vec<ComponentGroup>,
}

impl TemplateManifest {
    /// Parse the manifest compiled into the binary
    pub fn embedded() -> Result<Self> {
        let content = assets::get("template.yaml")?;
        serde_yaml::from_str(content).context("Failed to parse template manifest")
    }

    /// The component group for a `components/` sub-folder, if it has one
    pub fn group(&self, folder: &str) -> Option<&ComponentGroup> {
        self.component_groups.iter().find(|g| g.folder == folder)
    }

    /// Every asset key the manifest refers to, for both languages
    #[cfg(test)]
    pub fn referenced_assets(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.root_files.iter().map(|f| f.source.clone()).collect();

        for language in [Language::TypeScript, Language::JavaScript] {
            for file in self.app_router.iter().filter(|f| f.applies_to(language)) {
                paths.push(file.asset_path(language));
            }
            for group in &self.component_groups {
                for component in &group.components {
                    paths.push(component.index_asset(&group.folder, language));
                }
            }
        }

        for group in &self.component_groups {
            for component in &group.components {
                if component.styles {
                    paths.push(component.styles_asset(&group.folder));
                }
                if component.types {
                    paths.push(component.types_asset(&group.folder));
                }
            }
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_manifest_parses() {
        let manifest = TemplateManifest::embedded().unwrap();
        let dests: Vec<&str> = manifest.root_files.iter().map(|f| f.destination()).collect();
        assert_eq!(dests, vec![".prettierrc", ".gitignore", "README.md", "next.config.mjs"]);

        let layout = manifest.group("layout").unwrap();
        let names: Vec<&str> = layout.components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Header", "Footer"]);

        let ui = manifest.group("ui").unwrap();
        let names: Vec<&str> = ui.components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["AppxGroupSignature", "Button", "Icons", "Section"]);
        assert!(manifest.group("card").is_none());
    }

    #[test]
    fn test_every_referenced_asset_is_embedded() {
        let manifest = TemplateManifest::embedded().unwrap();
        for path in manifest.referenced_assets() {
            assert!(assets::exists(&path), "missing asset {path}");
        }
    }

    #[test]
    fn test_route_file_paths() {
        let page = RouteFile {
            source: "app/home/page".to_string(),
            dest: Some("app/(home)/page".to_string()),
            jsx: true,
            typescript_only: false,
        };
        assert_eq!(page.asset_path(Language::JavaScript), "app/js/app/home/page.jsx");
        assert_eq!(page.destination(Language::TypeScript), "app/(home)/page.tsx");

        let types = RouteFile {
            source: "app/types".to_string(),
            dest: None,
            jsx: false,
            typescript_only: true,
        };
        assert_eq!(types.destination(Language::TypeScript), "app/types.ts");
        assert!(!types.applies_to(Language::JavaScript));
    }
}
