//! Charm-style CLI prompts using cliclack

use crate::preferences::{
    resolve, Choice, DefaultsPrompter, DetachedPrompter, Overrides, Preferences, Prompter,
};
use crate::product::ProductConfig;
use crate::runtime::{check_toolchain, install_dependencies, SystemRunner};
use crate::templates::{count_project_files, materialize};
use anyhow::{Context, Result};
use std::path::Path;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Preferences already answered by flags
    pub overrides: Overrides,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,

    /// Stop after generation, without installing dependencies
    pub skip_install: bool,

    /// Unrecognized flags dropped from the command line
    pub ignored_flags: Vec<String>,
}

/// Asks unresolved questions at the terminal
#[derive(Debug, Default)]
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn text(&mut self, question: &str, default: &str) -> Result<String> {
        let answer: String = cliclack::input(question)
            .placeholder(default)
            .default_input(default)
            .interact()?;
        Ok(answer)
    }

    fn select<T: Choice>(&mut self, question: &str, default: T) -> Result<T> {
        let mut select = cliclack::select(question);
        for choice in T::ALL {
            select = select.item(*choice, choice.label(), choice.hint());
        }
        Ok(select.initial_value(default).interact()?)
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        Ok(cliclack::confirm(question).initial_value(default).interact()?)
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    for flag in &args.ignored_flags {
        cliclack::log::warning(format!("Ignoring unknown option {}", flag))?;
    }

    let applied = describe_overrides(&args.overrides);
    if !applied.is_empty() {
        cliclack::log::info(format!("Using flags: {}", applied.join(", ")))?;
    }

    // Step 1: Resolve preferences
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let prefs = resolve_preferences(&args, &cwd)?;
    let project_dir = cwd.join(&prefs.name);

    // Step 2: Check the external tools the run will launch
    check_tools(&prefs, !args.skip_install)?;

    // Step 3: Create project
    cliclack::log::step(format!("Creating project in {}", project_dir.display()))?;
    materialize(&prefs, &project_dir, &SystemRunner).await?;

    // Step 4: Install dependencies
    if args.skip_install {
        cliclack::log::info("Skipping dependency installation")?;
    } else {
        cliclack::log::step(format!("Installing dependencies with {}", prefs.package_manager))?;
        install_dependencies(&SystemRunner, prefs.package_manager, &project_dir).await?;
    }

    cliclack::log::success(format!(
        "Created {} files in {}",
        count_project_files(&project_dir),
        project_dir.display()
    ))?;

    // Step 5: Show next steps
    print_next_steps(config, &project_dir, &prefs, !args.skip_install)?;

    Ok(())
}

fn resolve_preferences(args: &CreateArgs, cwd: &Path) -> Result<Preferences> {
    if args.yes {
        return resolve(&args.overrides, &mut DefaultsPrompter, cwd);
    }

    if console::user_attended() {
        resolve(&args.overrides, &mut CliclackPrompter, cwd)
    } else {
        resolve(&args.overrides, &mut DetachedPrompter, cwd)
    }
}

fn check_tools(prefs: &Preferences, install: bool) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking tools...");

    let preflight = check_toolchain(prefs.package_manager, install);
    let detected: Vec<String> = preflight
        .tools
        .iter()
        .map(|t| {
            if t.available {
                format!("{} ({})", t.name, t.version.as_deref().unwrap_or("unknown"))
            } else {
                format!("{} (not installed)", t.name)
            }
        })
        .collect();
    spinner.stop(format!("Detected tools: {}", detected.join(", ")));

    for warning in &preflight.warnings {
        cliclack::log::warning(warning)?;
    }

    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// One `key=value` entry per preference answered by a flag
fn describe_overrides(overrides: &Overrides) -> Vec<String> {
    let mut applied = Vec::new();

    let mut push = |key: &str, value: Option<String>| {
        if let Some(value) = value {
            applied.push(format!("{}={}", key, value));
        }
    };

    push("name", overrides.name.clone());
    push("language", overrides.language.map(|v| v.value().to_string()));
    push("style", overrides.style.map(|v| v.value().to_string()));
    push("eslint", overrides.eslint.map(|v| yes_no(v).to_string()));
    push("src-dir", overrides.src_dir.map(|v| yes_no(v).to_string()));
    push("router", overrides.router.map(|v| v.value().to_string()));
    push("unit", overrides.unit_testing.map(|v| yes_no(v).to_string()));
    push("e2e", overrides.e2e_testing.map(|v| yes_no(v).to_string()));
    push("ui", overrides.ui_library.map(|v| v.value().to_string()));
    push(
        "animation",
        overrides.animation_library.map(|v| v.value().to_string()),
    );
    push(
        "package-manager",
        overrides.package_manager.map(|v| v.value().to_string()),
    );
    push("import-alias", overrides.import_alias.clone());

    applied
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    project_dir: &Path,
    prefs: &Preferences,
    installed: bool,
) -> Result<()> {
    let steps = config.next_steps(project_dir, prefs, installed);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    println!();
    println!("  Docs: {}", config.docs_url());

    cliclack::outro("Happy coding!")?;

    Ok(())
}
