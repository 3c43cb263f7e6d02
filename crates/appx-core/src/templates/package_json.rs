//! The generated package.json
//!
//! `build_manifest` is a pure function of the preferences: every dependency
//! the project gets is decided here, before anything is written.

use crate::preferences::{AnimationLibrary, Language, Preferences, Style, UiLibrary};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

type Packages = &'static [(&'static str, &'static str)];

pub const BASE_DEPENDENCIES: Packages = &[("next", "14.0.4"), ("react", "^18"), ("react-dom", "^18")];

pub const TYPESCRIPT_DEV_DEPENDENCIES: Packages = &[
    ("@types/node", "^20"),
    ("@types/react", "^18"),
    ("@types/react-dom", "^18"),
    ("typescript", "^5"),
];

pub const ESLINT_DEV_DEPENDENCIES: Packages =
    &[("eslint", "^8"), ("eslint-config-next", "14.1.0")];

pub const TAILWIND_DEV_DEPENDENCIES: Packages = &[
    ("autoprefixer", "^10.0.1"),
    ("postcss", "^8"),
    ("tailwindcss", "^3.3.0"),
];

pub const SCSS_DEV_DEPENDENCIES: Packages = &[("sass", "^1.70.0")];

pub const UNIT_TEST_DEV_DEPENDENCIES: Packages = &[
    ("@testing-library/jest-dom", "^6.3.0"),
    ("@testing-library/react", "^14.1.2"),
    ("jest", "^29.7.0"),
    ("jest-environment-jsdom", "^29.7.0"),
];

pub const E2E_DEV_DEPENDENCIES: Packages = &[("cypress", "^13.6.3")];

pub const GSAP_DEPENDENCIES: Packages = &[("gsap", "^3.12.4"), ("@gsap/react", "^2.0.2")];

pub const FRAMER_MOTION_DEPENDENCIES: Packages = &[("framer-motion", "^11.0.3")];

pub const MUI_DEPENDENCIES: Packages = &[
    ("@emotion/react", "^11.11.3"),
    ("@emotion/styled", "^11.11.0"),
    ("@mui/material", "^5.15.6"),
];

pub const ANTD_DEPENDENCIES: Packages = &[("antd", "^5.13.2")];

/// Serialize `(key, value)` pairs as a JSON object, keeping their order
fn ordered<S: Serializer>(pairs: &[(String, String)], serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(pairs.len()))?;
    for (key, value) in pairs {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

/// package.json contents; dependency maps are sorted the way npm writes them
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    pub name: String,
    pub version: String,
    pub private: bool,
    #[serde(serialize_with = "ordered")]
    pub scripts: Vec<(String, String)>,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageJson {
    /// Manifest of a bare Next.js project
    pub fn new(name: &str) -> Self {
        let mut manifest = Self {
            name: name.to_string(),
            version: "0.1.0".to_string(),
            private: true,
            scripts: Vec::new(),
            dependencies: BTreeMap::new(),
            dev_dependencies: BTreeMap::new(),
        };
        manifest.add_script("dev", "next dev");
        manifest.add_script("build", "next build");
        manifest.add_script("start", "next start");
        manifest.add_script("lint", "next lint");
        manifest.add_dependencies(BASE_DEPENDENCIES);
        manifest
    }

    pub fn add_script(&mut self, name: &str, command: &str) {
        self.scripts.push((name.to_string(), command.to_string()));
    }

    pub fn add_dependencies(&mut self, packages: Packages) {
        extend(&mut self.dependencies, packages);
    }

    pub fn add_dev_dependencies(&mut self, packages: Packages) {
        extend(&mut self.dev_dependencies, packages);
    }

    pub fn script(&self, name: &str) -> Option<&str> {
        self.scripts
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, command)| command.as_str())
    }
}

fn extend(map: &mut BTreeMap<String, String>, packages: Packages) {
    for (name, version) in packages {
        map.insert(name.to_string(), version.to_string());
    }
}

/// Decide scripts and dependencies for a set of preferences
pub fn build_manifest(prefs: &Preferences) -> PackageJson {
    let mut manifest = PackageJson::new(&prefs.package_name());

    if prefs.language == Language::TypeScript {
        manifest.add_dev_dependencies(TYPESCRIPT_DEV_DEPENDENCIES);
    }

    if prefs.eslint {
        manifest.add_dev_dependencies(ESLINT_DEV_DEPENDENCIES);
    }

    match prefs.style {
        Style::TailwindCss => manifest.add_dev_dependencies(TAILWIND_DEV_DEPENDENCIES),
        Style::Scss => manifest.add_dev_dependencies(SCSS_DEV_DEPENDENCIES),
        Style::Css | Style::StyledComponents => {}
    }

    if prefs.unit_testing {
        manifest.add_script("test", "jest --watchAll");
        manifest.add_dev_dependencies(UNIT_TEST_DEV_DEPENDENCIES);
    }

    if prefs.e2e_testing {
        manifest.add_script("e2e", "cypress open");
        manifest.add_dev_dependencies(E2E_DEV_DEPENDENCIES);
    }

    match prefs.animation_library {
        AnimationLibrary::Gsap => manifest.add_dependencies(GSAP_DEPENDENCIES),
        AnimationLibrary::FramerMotion => manifest.add_dependencies(FRAMER_MOTION_DEPENDENCIES),
        AnimationLibrary::None => {}
    }

    // shadcn brings its own packages through its initializer
    match prefs.ui_library {
        UiLibrary::Mui => manifest.add_dependencies(MUI_DEPENDENCIES),
        UiLibrary::Antd => manifest.add_dependencies(ANTD_DEPENDENCIES),
        UiLibrary::Shadcn | UiLibrary::None => {}
    }

    manifest
}
