//! The preference store: every choice that drives generation
//!
//! Each preference is a closed enum so the materializer has to handle every
//! variant. `Preferences::default()` is the starting point of a run; the
//! resolver overwrites each field exactly once, from a flag or a prompt.

pub mod resolver;

use crate::error::ScaffoldError;
use regex::Regex;
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

pub use resolver::{check_target, resolve, DefaultsPrompter, DetachedPrompter, Overrides, Prompter};

/// Project name used when none is given
pub const DEFAULT_PROJECT_NAME: &str = "appx-app";

/// A preference with a fixed set of answers
pub trait Choice: Copy + Eq + fmt::Debug + 'static {
    /// All variants, in the order they are offered
    const ALL: &'static [Self];

    /// Stable lowercase identifier
    fn value(self) -> &'static str;

    /// Human-readable label
    fn label(self) -> &'static str;

    fn hint(self) -> &'static str {
        ""
    }

    fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    TypeScript,
    JavaScript,
}

impl Language {
    /// Template directory holding this language's variants
    pub fn template_dir(self) -> &'static str {
        match self {
            Language::TypeScript => "ts",
            Language::JavaScript => "js",
        }
    }

    /// Extension for plain modules (index stubs, types)
    pub fn module_ext(self) -> &'static str {
        match self {
            Language::TypeScript => "ts",
            Language::JavaScript => "js",
        }
    }

    /// Extension for files containing JSX
    pub fn component_ext(self) -> &'static str {
        match self {
            Language::TypeScript => "tsx",
            Language::JavaScript => "jsx",
        }
    }

    pub fn is_typescript(self) -> bool {
        self == Language::TypeScript
    }
}

impl Choice for Language {
    const ALL: &'static [Self] = &[Language::TypeScript, Language::JavaScript];

    fn value(self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::JavaScript => "javascript",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Language::TypeScript => "Typescript",
            Language::JavaScript => "Javascript",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Css,
    Scss,
    TailwindCss,
    StyledComponents,
}

impl Choice for Style {
    const ALL: &'static [Self] = &[
        Style::Css,
        Style::Scss,
        Style::TailwindCss,
        Style::StyledComponents,
    ];

    fn value(self) -> &'static str {
        match self {
            Style::Css => "css",
            Style::Scss => "scss",
            Style::TailwindCss => "tailwindcss",
            Style::StyledComponents => "styled-components",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Style::Css => "CSS",
            Style::Scss => "SCSS",
            Style::TailwindCss => "Tailwindcss",
            Style::StyledComponents => "Styled Components",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Router {
    App,
    /// Accepted but not scaffolded: produces no router tree at all
    Page,
}

impl Choice for Router {
    const ALL: &'static [Self] = &[Router::App, Router::Page];

    fn value(self) -> &'static str {
        match self {
            Router::App => "app",
            Router::Page => "page",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Router::App => "App router",
            Router::Page => "Page router",
        }
    }

    fn hint(self) -> &'static str {
        match self {
            Router::App => "",
            Router::Page => "no router scaffolding yet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum UiLibrary {
    None,
    Mui,
    Antd,
    Shadcn,
}

impl Choice for UiLibrary {
    const ALL: &'static [Self] = &[
        UiLibrary::None,
        UiLibrary::Mui,
        UiLibrary::Antd,
        UiLibrary::Shadcn,
    ];

    fn value(self) -> &'static str {
        match self {
            UiLibrary::None => "none",
            UiLibrary::Mui => "mui",
            UiLibrary::Antd => "antd",
            UiLibrary::Shadcn => "shadcn",
        }
    }

    fn label(self) -> &'static str {
        match self {
            UiLibrary::None => "I don't want to use any UI library",
            UiLibrary::Mui => "Material UI",
            UiLibrary::Antd => "Ant Design",
            UiLibrary::Shadcn => "Shadcn UI",
        }
    }

    fn hint(self) -> &'static str {
        match self {
            UiLibrary::Shadcn => "runs the shadcn-ui initializer",
            _ => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationLibrary {
    None,
    Gsap,
    FramerMotion,
}

impl Choice for AnimationLibrary {
    const ALL: &'static [Self] = &[
        AnimationLibrary::None,
        AnimationLibrary::Gsap,
        AnimationLibrary::FramerMotion,
    ];

    fn value(self) -> &'static str {
        match self {
            AnimationLibrary::None => "none",
            AnimationLibrary::Gsap => "gsap",
            AnimationLibrary::FramerMotion => "framer-motion",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AnimationLibrary::None => "I don't want to use any animation library",
            AnimationLibrary::Gsap => "GSAP",
            AnimationLibrary::FramerMotion => "Framer Motion",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// Binary name on PATH
    pub fn binary(self) -> &'static str {
        self.value()
    }

    /// Arguments of the install command
    pub fn install_args(self) -> &'static [&'static str] {
        match self {
            PackageManager::Npm => &["install"],
            PackageManager::Yarn => &[],
            PackageManager::Pnpm => &["install"],
            PackageManager::Bun => &["install"],
        }
    }

    /// Command that starts the dev server in the generated project
    pub fn dev_command(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm run dev",
            PackageManager::Yarn => "yarn dev",
            PackageManager::Pnpm => "pnpm dev",
            PackageManager::Bun => "bun dev",
        }
    }
}

impl Choice for PackageManager {
    const ALL: &'static [Self] = &[
        PackageManager::Npm,
        PackageManager::Yarn,
        PackageManager::Pnpm,
        PackageManager::Bun,
    ];

    fn value(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    fn label(self) -> &'static str {
        self.value()
    }
}

macro_rules! display_by_label {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

display_by_label!(Language, Style, Router, UiLibrary, AnimationLibrary, PackageManager);

fn alias_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[!@#$%^&]/?\*?$").expect("alias pattern is valid"))
}

/// Module-resolution prefix written into tsconfig/jsconfig `paths`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportAlias(String);

impl ImportAlias {
    pub const DEFAULT: &'static str = "@/*";

    /// Accepts a single symbol from `! @ # $ % ^ &`, optionally followed by
    /// `/` and then `*`.
    pub fn parse(input: &str) -> Result<Self, ScaffoldError> {
        if alias_pattern().is_match(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(ScaffoldError::InvalidImportAlias(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The leading symbol, used as the import prefix inside templates
    pub fn symbol(&self) -> &str {
        &self.0[..1]
    }
}

impl Default for ImportAlias {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for ImportAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fully resolved run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    /// Target directory, relative to the working directory or absolute
    pub name: String,
    pub language: Language,
    pub style: Style,
    pub eslint: bool,
    pub src_dir: bool,
    pub router: Router,
    pub unit_testing: bool,
    pub e2e_testing: bool,
    pub ui_library: UiLibrary,
    pub animation_library: AnimationLibrary,
    pub package_manager: PackageManager,
    pub import_alias: ImportAlias,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROJECT_NAME.to_string(),
            language: Language::TypeScript,
            style: Style::Scss,
            eslint: true,
            src_dir: true,
            router: Router::App,
            unit_testing: false,
            e2e_testing: false,
            ui_library: UiLibrary::None,
            animation_library: AnimationLibrary::None,
            package_manager: PackageManager::Yarn,
            import_alias: ImportAlias::default(),
        }
    }
}

impl Preferences {
    /// Package name written to the manifest: the last component of `name`
    pub fn package_name(&self) -> String {
        Path::new(&self.name)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.name.clone())
    }

    /// Directory (relative to the project root) that holds the sources
    pub fn source_root(&self) -> &'static str {
        if self.src_dir {
            "src"
        } else {
            ""
        }
    }

    /// Value of the alias entry in tsconfig/jsconfig `paths`
    pub fn alias_target(&self) -> &'static str {
        if self.src_dir {
            "./src/*"
        } else {
            "./*"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_alias_accepts_symbol_forms() {
        for alias in ["@/*", "@", "@/", "@*", "!/*", "#/*", "$/*", "%/*", "^/*", "&/*"] {
            assert!(ImportAlias::parse(alias).is_ok(), "{alias} should be valid");
        }
    }

    #[test]
    fn test_import_alias_rejects_everything_else() {
        for alias in ["x/*", "@//*", "", "@/**", "~/*", "@@", "@/*/", " @/*", "@/x"] {
            let err = ImportAlias::parse(alias).unwrap_err();
            assert!(matches!(err, ScaffoldError::InvalidImportAlias(ref v) if v == alias));
        }
    }

    #[test]
    fn test_import_alias_symbol() {
        assert_eq!(ImportAlias::parse("#/*").unwrap().symbol(), "#");
        assert_eq!(ImportAlias::default().symbol(), "@");
    }

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.name, "appx-app");
        assert_eq!(prefs.language, Language::TypeScript);
        assert_eq!(prefs.style, Style::Scss);
        assert!(prefs.eslint && prefs.src_dir);
        assert_eq!(prefs.package_manager, PackageManager::Yarn);
        assert_eq!(prefs.import_alias.as_str(), "@/*");
    }

    #[test]
    fn test_package_name_uses_last_component() {
        let prefs = Preferences {
            name: "projects/web/demo".to_string(),
            ..Preferences::default()
        };
        assert_eq!(prefs.package_name(), "demo");
    }

    #[test]
    fn test_choice_round_trips_through_value() {
        for style in Style::ALL {
            assert_eq!(Style::from_value(style.value()), Some(*style));
        }
        assert_eq!(PackageManager::from_value("bun"), Some(PackageManager::Bun));
        assert_eq!(AnimationLibrary::from_value("velocity"), None);
    }

    #[test]
    fn test_yarn_installs_without_subcommand() {
        assert!(PackageManager::Yarn.install_args().is_empty());
        assert_eq!(PackageManager::Pnpm.install_args(), &["install"]);
    }
}
