//! create-appx-app - Next.js project scaffolding with the Appx Group starter layout

mod cli;

use appx_core::preferences::Preferences;
use appx_core::ProductConfig;
use clap::Parser;
use cli::{strip_unknown_flags, Args};
use std::path::Path;

/// create-appx-app product configuration
#[derive(Clone)]
pub struct AppxConfig;

impl ProductConfig for AppxConfig {
    fn display_name(&self) -> &'static str {
        "create-appx-app"
    }

    fn docs_url(&self) -> &'static str {
        "https://nextjs.org/docs"
    }

    fn next_steps(&self, dir: &Path, prefs: &Preferences, installed: bool) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to directory if not current
        if current.as_deref() != Some(dir) {
            let shown = current
                .as_deref()
                .and_then(|cwd| dir.strip_prefix(cwd).ok())
                .unwrap_or(dir);
            steps.push(format!("cd {}", shown.display()));
        }

        // Step 2: install if it was skipped
        let pm = prefs.package_manager;
        if !installed {
            let install = std::iter::once(pm.binary())
                .chain(pm.install_args().iter().copied())
                .collect::<Vec<_>>()
                .join(" ");
            steps.push(install);
        }

        // Step 3: start the dev server
        steps.push(pm.dev_command().to_string());

        steps
    }
}

fn is_interrupted(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::Interrupted)
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let (argv, ignored) = strip_unknown_flags(std::env::args().collect());
    let args = Args::parse_from(argv);
    let config = AppxConfig;

    let result = appx_core::run(&config, args.into_create_args(ignored)).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(err) = result {
        let message = if is_interrupted(&err) {
            "Operation cancelled".to_string()
        } else {
            format!("{:#}", err)
        };
        let _ = cliclack::outro_cancel(message);
        std::process::exit(1);
    }
}
