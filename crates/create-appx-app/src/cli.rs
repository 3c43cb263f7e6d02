//! Command-line surface of `create-appx-app`
//!
//! Every preference has a flag; a flag skips its prompt. When mutually
//! exclusive flags are combined, the first one in each group wins.

use appx_core::preferences::{
    AnimationLibrary, Language, Overrides, PackageManager, Router, Style, UiLibrary,
};
use appx_core::tui::CreateArgs;
use clap::{CommandFactory, Parser};

#[derive(Parser, Debug, Default)]
#[command(name = "create-appx-app")]
#[command(about = "CLI for scaffolding Next.js projects with the Appx Group starter layout")]
#[command(version)]
pub struct Args {
    /// Directory (and package name) of the new project
    pub project_directory: Option<String>,

    /// Initialize as a TypeScript project
    #[arg(long = "ts", visible_alias = "typescript")]
    pub typescript: bool,

    /// Initialize as a JavaScript project
    #[arg(long = "js", visible_alias = "javascript")]
    pub javascript: bool,

    /// Initialize with plain CSS
    #[arg(long)]
    pub css: bool,

    /// Initialize with SCSS
    #[arg(long)]
    pub scss: bool,

    /// Initialize with Tailwind CSS
    #[arg(long, visible_alias = "tailwindcss")]
    pub tailwind: bool,

    /// Initialize with styled-components
    #[arg(long = "styled-components")]
    pub styled_components: bool,

    /// Initialize with ESLint config
    #[arg(long, overrides_with = "no_eslint")]
    pub eslint: bool,

    /// Initialize without ESLint config
    #[arg(long = "no-eslint", overrides_with = "eslint")]
    pub no_eslint: bool,

    /// Put the sources under src/
    #[arg(long = "src", visible_alias = "src-dir", overrides_with = "no_src_dir")]
    pub src_dir: bool,

    /// Put the sources at the project root
    #[arg(long = "no-src-dir", overrides_with = "src_dir")]
    pub no_src_dir: bool,

    /// Initialize as an App Router project
    #[arg(long = "app", visible_alias = "app-router")]
    pub app_router: bool,

    /// Initialize as a Pages Router project
    #[arg(long = "page", visible_alias = "page-router")]
    pub page_router: bool,

    /// Add Jest unit testing
    #[arg(long, overrides_with = "no_unit")]
    pub unit: bool,

    /// Skip unit testing
    #[arg(long = "no-unit", overrides_with = "unit")]
    pub no_unit: bool,

    /// Add Cypress e2e testing
    #[arg(long, overrides_with = "no_e2e")]
    pub e2e: bool,

    /// Skip e2e testing
    #[arg(long = "no-e2e", overrides_with = "e2e")]
    pub no_e2e: bool,

    /// UI component library
    #[arg(long, value_enum)]
    pub ui: Option<UiLibrary>,

    /// Initialize with GSAP
    #[arg(long)]
    pub gsap: bool,

    /// Initialize with Framer Motion
    #[arg(long = "framer-motion")]
    pub framer_motion: bool,

    /// Initialize without an animation library
    #[arg(long = "no-animation")]
    pub no_animation: bool,

    /// Bootstrap the application using Yarn
    #[arg(long = "use-yarn")]
    pub use_yarn: bool,

    /// Bootstrap the application using npm
    #[arg(long = "use-npm")]
    pub use_npm: bool,

    /// Bootstrap the application using pnpm
    #[arg(long = "use-pnpm")]
    pub use_pnpm: bool,

    /// Bootstrap the application using Bun
    #[arg(long = "use-bun")]
    pub use_bun: bool,

    /// Import alias to use (e.g. "@/*")
    #[arg(long = "import-alias", value_name = "ALIAS")]
    pub import_alias: Option<String>,

    /// Accept the default for every question not answered by a flag
    #[arg(short, long)]
    pub yes: bool,

    /// Do not install dependencies
    #[arg(long = "skip-install")]
    pub skip_install: bool,
}

fn pick<T>(candidates: &[(bool, T)]) -> Option<T>
where
    T: Copy,
{
    candidates
        .iter()
        .find(|(set, _)| *set)
        .map(|(_, value)| *value)
}

fn toggle(on: bool, off: bool) -> Option<bool> {
    pick(&[(on, true), (off, false)])
}

impl Args {
    /// Preferences answered on the command line
    pub fn overrides(&self) -> Overrides {
        Overrides {
            name: self
                .project_directory
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string),
            language: pick(&[
                (self.typescript, Language::TypeScript),
                (self.javascript, Language::JavaScript),
            ]),
            style: pick(&[
                (self.scss, Style::Scss),
                (self.css, Style::Css),
                (self.tailwind, Style::TailwindCss),
                (self.styled_components, Style::StyledComponents),
            ]),
            eslint: toggle(self.eslint, self.no_eslint),
            src_dir: toggle(self.src_dir, self.no_src_dir),
            router: pick(&[(self.app_router, Router::App), (self.page_router, Router::Page)]),
            unit_testing: toggle(self.unit, self.no_unit),
            e2e_testing: toggle(self.e2e, self.no_e2e),
            ui_library: self.ui,
            animation_library: pick(&[
                (self.gsap, AnimationLibrary::Gsap),
                (self.framer_motion, AnimationLibrary::FramerMotion),
                (self.no_animation, AnimationLibrary::None),
            ]),
            package_manager: pick(&[
                (self.use_yarn, PackageManager::Yarn),
                (self.use_npm, PackageManager::Npm),
                (self.use_pnpm, PackageManager::Pnpm),
                (self.use_bun, PackageManager::Bun),
            ]),
            import_alias: self.import_alias.clone(),
        }
    }

    pub fn into_create_args(self, ignored_flags: Vec<String>) -> CreateArgs {
        CreateArgs {
            overrides: self.overrides(),
            yes: self.yes,
            skip_install: self.skip_install,
            ignored_flags,
        }
    }
}

/// Split the raw command line into the arguments clap knows and the
/// unknown flags, which are dropped instead of failing the parse.
///
/// An unknown `--flag` without `=` also takes the next argument as its value
/// unless that argument starts with `-`.
///
/// The first element (the program name) is always kept.
pub fn strip_unknown_flags(raw: Vec<String>) -> (Vec<String>, Vec<String>) {
    let mut command = Args::command();
    command.build();

    let mut longs: Vec<String> = Vec::new();
    let mut shorts: Vec<char> = Vec::new();
    for arg in command.get_arguments() {
        if let Some(long) = arg.get_long() {
            longs.push(long.to_string());
        }
        if let Some(aliases) = arg.get_all_aliases() {
            longs.extend(aliases.into_iter().map(str::to_string));
        }
        if let Some(short) = arg.get_short() {
            shorts.push(short);
        }
        if let Some(aliases) = arg.get_all_short_aliases() {
            shorts.extend(aliases);
        }
    }

    let mut kept = Vec::with_capacity(raw.len());
    let mut ignored = Vec::new();
    let mut raw = raw.into_iter().peekable();
    kept.extend(raw.next());

    while let Some(arg) = raw.next() {
        if arg == "--" {
            kept.push(arg);
            kept.extend(raw.by_ref());
            break;
        }

        if let Some(long) = arg.strip_prefix("--") {
            let name = long.split('=').next().unwrap_or(long);
            if longs.iter().any(|l| l == name) {
                kept.push(arg);
                continue;
            }

            let value = if long.contains('=') {
                None
            } else {
                raw.next_if(|next| !next.starts_with('-'))
            };
            match value {
                Some(value) => ignored.push(format!("{} {}", arg, value)),
                None => ignored.push(arg),
            }
            continue;
        }

        let known = if let Some(cluster) = arg.strip_prefix('-').filter(|c| !c.is_empty()) {
            cluster.chars().all(|c| shorts.contains(&c))
        } else {
            true
        };

        if known {
            kept.push(arg);
        } else {
            ignored.push(arg);
        }
    }

    (kept, ignored)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        let mut argv = vec!["create-appx-app"];
        argv.extend_from_slice(args);
        Args::try_parse_from(argv).unwrap()
    }

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("create-appx-app")
            .chain(args.iter().copied())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_no_flags_answers_nothing() {
        let overrides = parse(&[]).overrides();
        assert!(overrides.name.is_none());
        assert!(overrides.language.is_none());
        assert!(overrides.style.is_none());
        assert!(overrides.eslint.is_none());
        assert!(overrides.package_manager.is_none());
        assert!(overrides.import_alias.is_none());
    }

    #[test]
    fn test_flags_map_to_overrides() {
        let overrides = parse(&[
            "demo",
            "--typescript",
            "--scss",
            "--eslint",
            "--src-dir",
            "--app",
            "--no-unit",
            "--e2e",
            "--ui",
            "shadcn",
            "--framer-motion",
            "--use-npm",
            "--import-alias",
            "#/*",
        ])
        .overrides();

        assert_eq!(overrides.name.as_deref(), Some("demo"));
        assert_eq!(overrides.language, Some(Language::TypeScript));
        assert_eq!(overrides.style, Some(Style::Scss));
        assert_eq!(overrides.eslint, Some(true));
        assert_eq!(overrides.src_dir, Some(true));
        assert_eq!(overrides.router, Some(Router::App));
        assert_eq!(overrides.unit_testing, Some(false));
        assert_eq!(overrides.e2e_testing, Some(true));
        assert_eq!(overrides.ui_library, Some(UiLibrary::Shadcn));
        assert_eq!(
            overrides.animation_library,
            Some(AnimationLibrary::FramerMotion)
        );
        assert_eq!(overrides.package_manager, Some(PackageManager::Npm));
        assert_eq!(overrides.import_alias.as_deref(), Some("#/*"));
    }

    #[test]
    fn test_conflicting_flags_follow_precedence() {
        let overrides = parse(&[
            "--js",
            "--ts",
            "--tailwind",
            "--css",
            "--scss",
            "--page",
            "--app",
            "--use-bun",
            "--use-pnpm",
            "--use-yarn",
            "--no-animation",
            "--gsap",
        ])
        .overrides();

        assert_eq!(overrides.language, Some(Language::TypeScript));
        assert_eq!(overrides.style, Some(Style::Scss));
        assert_eq!(overrides.router, Some(Router::App));
        assert_eq!(overrides.package_manager, Some(PackageManager::Yarn));
        assert_eq!(overrides.animation_library, Some(AnimationLibrary::Gsap));

        let overrides = parse(&["--styled-components", "--tailwindcss"]).overrides();
        assert_eq!(overrides.style, Some(Style::TailwindCss));
    }

    #[test]
    fn test_each_package_manager_flag_maps_to_itself() {
        for (flag, expected) in [
            ("--use-yarn", PackageManager::Yarn),
            ("--use-npm", PackageManager::Npm),
            ("--use-pnpm", PackageManager::Pnpm),
            ("--use-bun", PackageManager::Bun),
        ] {
            assert_eq!(parse(&[flag]).overrides().package_manager, Some(expected));
        }
    }

    #[test]
    fn test_last_toggle_wins() {
        let overrides = parse(&["--eslint", "--no-eslint", "--no-src-dir", "--src"]).overrides();
        assert_eq!(overrides.eslint, Some(false));
        assert_eq!(overrides.src_dir, Some(true));
    }

    #[test]
    fn test_blank_project_directory_is_unanswered() {
        assert!(parse(&["  "]).overrides().name.is_none());
    }

    #[test]
    fn test_create_args_carry_run_options() {
        let args = parse(&["-y", "--skip-install"]).into_create_args(vec!["--foo".to_string()]);
        assert!(args.yes);
        assert!(args.skip_install);
        assert_eq!(args.ignored_flags, vec!["--foo"]);
    }

    #[test]
    fn test_strip_unknown_flags() {
        let (kept, ignored) = strip_unknown_flags(argv(&[
            "demo",
            "--tailwindcss",
            "--experimental-app",
            "-y",
            "-q",
            "--import-alias=@/*",
            "--use-deno",
        ]));

        assert_eq!(
            kept,
            argv(&["demo", "--tailwindcss", "-y", "--import-alias=@/*"])
        );
        assert_eq!(ignored, vec!["--experimental-app", "-q", "--use-deno"]);
        assert!(Args::try_parse_from(kept).is_ok());
    }

    #[test]
    fn test_unknown_flag_takes_its_value() {
        let (kept, ignored) = strip_unknown_flags(argv(&["demo", "--foo", "bar"]));
        assert_eq!(kept, argv(&["demo"]));
        assert_eq!(ignored, vec!["--foo bar"]);
        assert_eq!(
            Args::try_parse_from(kept).unwrap().overrides().name.as_deref(),
            Some("demo")
        );

        let (kept, ignored) = strip_unknown_flags(argv(&["--template", "blog"]));
        assert_eq!(kept, argv(&[]));
        assert_eq!(ignored, vec!["--template blog"]);
        assert!(Args::try_parse_from(kept).unwrap().overrides().name.is_none());
    }

    #[test]
    fn test_unknown_flag_leaves_following_flags_and_inline_values() {
        let (kept, ignored) =
            strip_unknown_flags(argv(&["--foo", "--scss", "--bar=baz", "demo"]));
        assert_eq!(kept, argv(&["--scss", "demo"]));
        assert_eq!(ignored, vec!["--foo", "--bar=baz"]);
    }

    #[test]
    fn test_strip_keeps_everything_after_double_dash() {
        let (kept, ignored) = strip_unknown_flags(argv(&["--", "--weird"]));
        assert_eq!(kept, argv(&["--", "--weird"]));
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_help_and_version_are_known() {
        let (_, ignored) = strip_unknown_flags(argv(&["--help", "--version", "-h", "-V"]));
        assert!(ignored.is_empty());
    }
}
