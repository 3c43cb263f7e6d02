//! Flag + prompt resolution of the preference store
//!
//! Preferences are resolved one at a time in a fixed order. A flag always
//! wins and skips its prompt; otherwise the `Prompter` is asked, with the
//! store's default as the initial answer.

use super::{
    AnimationLibrary, Choice, ImportAlias, Language, PackageManager, Preferences, Router, Style,
    UiLibrary,
};
use crate::error::ScaffoldError;
use anyhow::{Context, Result};
use std::path::Path;

pub const PROJECT_NAME: &str = "What is your project name?";
pub const LANGUAGE: &str = "What is your preferred language?";
pub const STYLE: &str = "Choose your styling option";
pub const ESLINT: &str = "Do you want to use ESLint?";
pub const SRC_DIR: &str = "Do you want to use src/ directory?";
pub const ROUTER: &str = "What is your preferred router?";
pub const UNIT_TESTING: &str = "Do you want to use unit testing?";
pub const E2E_TESTING: &str = "Do you want to use e2e testing?";
pub const UI_LIBRARY: &str = "What is your preferred UI library?";
pub const ANIMATION_LIBRARY: &str = "What is your preferred animation library?";
pub const PACKAGE_MANAGER: &str = "Choose package manager to work with";
pub const CUSTOMIZE_ALIAS: &str = "Do you want to customize the import alias?";
pub const IMPORT_ALIAS: &str = "What is your import alias?";

/// Preferences supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub name: Option<String>,
    pub language: Option<Language>,
    pub style: Option<Style>,
    pub eslint: Option<bool>,
    pub src_dir: Option<bool>,
    pub router: Option<Router>,
    pub unit_testing: Option<bool>,
    pub e2e_testing: Option<bool>,
    pub ui_library: Option<UiLibrary>,
    pub animation_library: Option<AnimationLibrary>,
    pub package_manager: Option<PackageManager>,
    /// Unvalidated; checked with the same pattern as a prompted alias
    pub import_alias: Option<String>,
}

/// Source of answers for preferences that have no flag
pub trait Prompter {
    fn text(&mut self, question: &str, default: &str) -> Result<String>;

    fn select<T: Choice>(&mut self, question: &str, default: T) -> Result<T>;

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;
}

/// Answers every question with its default (`--yes`)
#[derive(Debug, Default)]
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn text(&mut self, _question: &str, default: &str) -> Result<String> {
        Ok(default.to_string())
    }

    fn select<T: Choice>(&mut self, _question: &str, default: T) -> Result<T> {
        Ok(default)
    }

    fn confirm(&mut self, _question: &str, default: bool) -> Result<bool> {
        Ok(default)
    }
}

/// Used when no terminal is attached: any question is fatal
#[derive(Debug, Default)]
pub struct DetachedPrompter;

impl DetachedPrompter {
    fn refuse<T>(question: &str) -> Result<T> {
        Err(ScaffoldError::NonInteractive {
            question: question.to_string(),
        }
        .into())
    }
}

impl Prompter for DetachedPrompter {
    fn text(&mut self, question: &str, _default: &str) -> Result<String> {
        Self::refuse(question)
    }

    fn select<T: Choice>(&mut self, question: &str, _default: T) -> Result<T> {
        Self::refuse(question)
    }

    fn confirm(&mut self, question: &str, _default: bool) -> Result<bool> {
        Self::refuse(question)
    }
}

/// Refuse targets that already hold a project or any other files.
///
/// A missing or empty directory is fine.
pub fn check_target(target: &Path) -> Result<()> {
    if !target.exists() {
        return Ok(());
    }

    if target.join("package.json").exists() {
        return Err(ScaffoldError::ManifestExists(target.to_path_buf()).into());
    }

    if !target.is_dir() {
        anyhow::bail!("{} exists and is not a directory", target.display());
    }

    let mut entries = std::fs::read_dir(target)
        .with_context(|| format!("Failed to read directory: {}", target.display()))?;
    if entries.next().is_some() {
        return Err(ScaffoldError::DirectoryNotEmpty(target.to_path_buf()).into());
    }

    Ok(())
}

fn flag_or<T>(flag: Option<T>, ask: impl FnOnce() -> Result<T>) -> Result<T> {
    match flag {
        Some(value) => Ok(value),
        None => ask(),
    }
}

/// Resolve every preference, flags first, prompting for the rest in order:
/// name, language, style, eslint, src dir, router, unit, e2e, UI library,
/// animation library, package manager, import alias.
///
/// `cwd` anchors the target directory check.
pub fn resolve<P: Prompter>(overrides: &Overrides, prompter: &mut P, cwd: &Path) -> Result<Preferences> {
    let defaults = Preferences::default();

    let name = match &overrides.name {
        Some(name) => name.clone(),
        None => {
            let answer = prompter.text(PROJECT_NAME, &defaults.name)?;
            match answer.trim() {
                "" => defaults.name.clone(),
                trimmed => trimmed.to_string(),
            }
        }
    };
    check_target(&cwd.join(&name))?;

    let language = flag_or(overrides.language, || {
        prompter.select(LANGUAGE, defaults.language)
    })?;
    let style = flag_or(overrides.style, || prompter.select(STYLE, defaults.style))?;
    let eslint = flag_or(overrides.eslint, || prompter.confirm(ESLINT, defaults.eslint))?;
    let src_dir = flag_or(overrides.src_dir, || {
        prompter.confirm(SRC_DIR, defaults.src_dir)
    })?;
    let router = flag_or(overrides.router, || prompter.select(ROUTER, defaults.router))?;
    let unit_testing = flag_or(overrides.unit_testing, || {
        prompter.confirm(UNIT_TESTING, defaults.unit_testing)
    })?;
    let e2e_testing = flag_or(overrides.e2e_testing, || {
        prompter.confirm(E2E_TESTING, defaults.e2e_testing)
    })?;
    let ui_library = flag_or(overrides.ui_library, || {
        prompter.select(UI_LIBRARY, defaults.ui_library)
    })?;
    let animation_library = flag_or(overrides.animation_library, || {
        prompter.select(ANIMATION_LIBRARY, defaults.animation_library)
    })?;
    let package_manager = flag_or(overrides.package_manager, || {
        prompter.select(PACKAGE_MANAGER, defaults.package_manager)
    })?;

    let import_alias = match &overrides.import_alias {
        Some(alias) => ImportAlias::parse(alias)?,
        None => resolve_import_alias(prompter)?,
    };

    Ok(Preferences {
        name,
        language,
        style,
        eslint,
        src_dir,
        router,
        unit_testing,
        e2e_testing,
        ui_library,
        animation_library,
        package_manager,
        import_alias,
    })
}

/// No retry: an invalid answer ends the run.
fn resolve_import_alias<P: Prompter>(prompter: &mut P) -> Result<ImportAlias> {
    if !prompter.confirm(CUSTOMIZE_ALIAS, false)? {
        return Ok(ImportAlias::default());
    }

    let answer = prompter.text(IMPORT_ALIAS, ImportAlias::DEFAULT)?;
    Ok(ImportAlias::parse(&answer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use tempfile::TempDir;

    /// Replays canned answers and records the questions asked
    struct ScriptedPrompter {
        answers: VecDeque<&'static str>,
        asked: Vec<String>,
    }

    impl ScriptedPrompter {
        fn new(answers: &[&'static str]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                asked: Vec::new(),
            }
        }

        fn next(&mut self, question: &str) -> &'static str {
            self.asked.push(question.to_string());
            self.answers
                .pop_front()
                .unwrap_or_else(|| panic!("no answer scripted for {question:?}"))
        }
    }

    impl Prompter for ScriptedPrompter {
        fn text(&mut self, question: &str, _default: &str) -> Result<String> {
            Ok(self.next(question).to_string())
        }

        fn select<T: Choice>(&mut self, question: &str, _default: T) -> Result<T> {
            let answer = self.next(question);
            Ok(T::from_value(answer).unwrap_or_else(|| panic!("bad choice {answer:?}")))
        }

        fn confirm(&mut self, question: &str, _default: bool) -> Result<bool> {
            Ok(self.next(question) == "yes")
        }
    }

    #[test]
    fn test_prompts_follow_fixed_order() {
        let tmp = TempDir::new().unwrap();
        let mut prompter = ScriptedPrompter::new(&[
            "demo", "javascript", "css", "no", "no", "app", "yes", "yes", "mui", "gsap", "pnpm",
            "no",
        ]);

        let prefs = resolve(&Overrides::default(), &mut prompter, tmp.path()).unwrap();

        assert_eq!(
            prompter.asked,
            vec![
                PROJECT_NAME,
                LANGUAGE,
                STYLE,
                ESLINT,
                SRC_DIR,
                ROUTER,
                UNIT_TESTING,
                E2E_TESTING,
                UI_LIBRARY,
                ANIMATION_LIBRARY,
                PACKAGE_MANAGER,
                CUSTOMIZE_ALIAS,
            ]
        );
        assert_eq!(prefs.name, "demo");
        assert_eq!(prefs.language, Language::JavaScript);
        assert_eq!(prefs.style, Style::Css);
        assert!(!prefs.eslint && !prefs.src_dir);
        assert!(prefs.unit_testing && prefs.e2e_testing);
        assert_eq!(prefs.ui_library, UiLibrary::Mui);
        assert_eq!(prefs.animation_library, AnimationLibrary::Gsap);
        assert_eq!(prefs.package_manager, PackageManager::Pnpm);
        assert_eq!(prefs.import_alias, ImportAlias::default());
    }

    #[test]
    fn test_flags_skip_their_prompts() {
        let tmp = TempDir::new().unwrap();
        let overrides = Overrides {
            name: Some("demo".to_string()),
            language: Some(Language::TypeScript),
            style: Some(Style::TailwindCss),
            eslint: Some(false),
            src_dir: Some(true),
            router: Some(Router::App),
            unit_testing: Some(false),
            e2e_testing: Some(false),
            package_manager: Some(PackageManager::Bun),
            import_alias: Some("#/*".to_string()),
            ..Overrides::default()
        };
        let mut prompter = ScriptedPrompter::new(&["antd", "framer-motion"]);

        let prefs = resolve(&overrides, &mut prompter, tmp.path()).unwrap();

        assert_eq!(prompter.asked, vec![UI_LIBRARY, ANIMATION_LIBRARY]);
        assert_eq!(prefs.style, Style::TailwindCss);
        assert_eq!(prefs.ui_library, UiLibrary::Antd);
        assert_eq!(prefs.animation_library, AnimationLibrary::FramerMotion);
        assert_eq!(prefs.import_alias.as_str(), "#/*");
    }

    #[test]
    fn test_custom_alias_is_prompted_and_validated() {
        let tmp = TempDir::new().unwrap();
        let overrides = Overrides {
            name: Some("demo".to_string()),
            language: Some(Language::TypeScript),
            style: Some(Style::Scss),
            eslint: Some(true),
            src_dir: Some(true),
            router: Some(Router::App),
            unit_testing: Some(false),
            e2e_testing: Some(false),
            ui_library: Some(UiLibrary::None),
            animation_library: Some(AnimationLibrary::None),
            package_manager: Some(PackageManager::Npm),
            import_alias: None,
        };

        let mut prompter = ScriptedPrompter::new(&["yes", "$/*"]);
        let prefs = resolve(&overrides, &mut prompter, tmp.path()).unwrap();
        assert_eq!(prefs.import_alias.as_str(), "$/*");
        assert_eq!(prompter.asked, vec![CUSTOMIZE_ALIAS, IMPORT_ALIAS]);

        let mut prompter = ScriptedPrompter::new(&["yes", "x/*"]);
        let err = resolve(&overrides, &mut prompter, tmp.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::InvalidImportAlias(_))
        ));
    }

    #[test]
    fn test_invalid_alias_flag_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let overrides = Overrides {
            import_alias: Some("@//*".to_string()),
            ..Overrides::default()
        };

        let err = resolve(&overrides, &mut DefaultsPrompter, tmp.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::InvalidImportAlias(_))
        ));
    }

    #[test]
    fn test_existing_manifest_fails_before_any_prompt() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("demo")).unwrap();
        std::fs::write(tmp.path().join("demo/package.json"), "{}").unwrap();

        let overrides = Overrides {
            name: Some("demo".to_string()),
            ..Overrides::default()
        };
        let mut prompter = ScriptedPrompter::new(&[]);

        let err = resolve(&overrides, &mut prompter, tmp.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::ManifestExists(_))
        ));
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn test_check_target() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("web");

        assert!(check_target(&target).is_ok());

        std::fs::create_dir(&target).unwrap();
        assert!(check_target(&target).is_ok());

        std::fs::write(target.join("notes.txt"), "hi").unwrap();
        let err = check_target(&target).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::DirectoryNotEmpty(_))
        ));
    }

    #[test]
    fn test_defaults_prompter_yields_default_store() {
        let tmp = TempDir::new().unwrap();
        let prefs = resolve(&Overrides::default(), &mut DefaultsPrompter, tmp.path()).unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_detached_prompter_fails_only_when_asked() {
        let tmp = TempDir::new().unwrap();
        let overrides = Overrides {
            name: Some("demo".to_string()),
            ..Overrides::default()
        };

        let err = resolve(&overrides, &mut DetachedPrompter, tmp.path()).unwrap_err();
        match err.downcast_ref::<ScaffoldError>() {
            Some(ScaffoldError::NonInteractive { question }) => assert_eq!(question, LANGUAGE),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
