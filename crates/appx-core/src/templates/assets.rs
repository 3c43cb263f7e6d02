//! Template assets embedded in the binary
//!
//! Keys are paths relative to the crate's `templates/` directory. Rendering
//! turns an asset into file contents for one project: it resolves the alias
//! and stylesheet placeholders and normalizes line endings.

use crate::preferences::{Preferences, Style};
use crate::templates::EOL;
use anyhow::Result;

macro_rules! assets {
    ($($path:literal),* $(,)?) => {
        &[$(($path, include_str!(concat!("../../templates/", $path)))),*]
    };
}

static ASSETS: &[(&str, &str)] = assets![
    "template.yaml",
    "root/prettierrc",
    "root/gitignore",
    "root/README.md",
    "root/next.config.mjs",
    "config/next-env.d.ts",
    "config/eslintrc.json",
    "config/tailwind.config.ts",
    "config/tailwind.config.js",
    "config/postcss.config.js",
    "config/jest.config.js",
    "config/jest.setup.js",
    "config/cypress.config.js",
    "app/ts/app/layout.tsx",
    "app/ts/app/providers.tsx",
    "app/ts/app/home/page.tsx",
    "app/ts/app/types.ts",
    "app/js/app/layout.jsx",
    "app/js/app/providers.jsx",
    "app/js/app/home/page.jsx",
    "app/ts/components/layout/Header/index.tsx",
    "app/ts/components/layout/Header/styles.scss",
    "app/ts/components/layout/Footer/index.tsx",
    "app/ts/components/layout/Footer/styles.scss",
    "app/js/components/layout/Header/index.jsx",
    "app/js/components/layout/Footer/index.jsx",
    "app/ts/components/ui/AppxGroupSignature/index.tsx",
    "app/ts/components/ui/AppxGroupSignature/styles.scss",
    "app/ts/components/ui/Button/index.tsx",
    "app/ts/components/ui/Button/styles.scss",
    "app/ts/components/ui/Button/types.ts",
    "app/ts/components/ui/Icons/index.tsx",
    "app/ts/components/ui/Section/index.tsx",
    "app/ts/components/ui/Section/styles.scss",
    "app/ts/components/ui/Section/types.ts",
    "app/js/components/ui/AppxGroupSignature/index.jsx",
    "app/js/components/ui/Button/index.jsx",
    "app/js/components/ui/Icons/index.jsx",
    "app/js/components/ui/Section/index.jsx",
    "app/styles/css/main.css",
    "app/styles/scss/main.scss",
    "app/styles/scss/globals/_mixins.scss",
    "app/styles/scss/globals/_normalizers.scss",
    "app/styles/scss/globals/_variables.scss",
    "app/styles/tailwindcss/main.css",
];

/// Replaced with the import alias symbol (`@`, `#`, ...)
const ALIAS: &str = "__ALIAS__";

/// Line replaced with the global stylesheet import, or dropped
const GLOBAL_STYLES: &str = "__GLOBAL_STYLES__";

/// Component-local stylesheet import, kept only for SCSS projects
const LOCAL_STYLES_IMPORT: &str = "import \"./styles.scss\";";

/// Look up an embedded asset
pub fn get(path: &str) -> Result<&'static str> {
    ASSETS
        .iter()
        .find(|(key, _)| *key == path)
        .map(|(_, content)| *content)
        .ok_or_else(|| anyhow::anyhow!("Template asset '{}' is not embedded", path))
}

#[cfg(test)]
pub fn exists(path: &str) -> bool {
    ASSETS.iter().any(|(key, _)| *key == path)
}

/// File contents with platform line endings and a trailing newline
pub fn text(content: &str) -> String {
    let mut out = content.lines().collect::<Vec<_>>().join(EOL);
    out.push_str(EOL);
    out
}

fn global_styles_import(prefs: &Preferences) -> Option<String> {
    let file = match prefs.style {
        Style::Css | Style::TailwindCss => "main.css",
        Style::Scss => "main.scss",
        Style::StyledComponents => return None,
    };
    Some(format!(
        "import \"{}/styles/{}\";",
        prefs.import_alias.symbol(),
        file
    ))
}

/// Render a source template for the given preferences.
///
/// A dropped import line also takes the blank line after it when nothing
/// but blank lines precede it, so files never start with an empty line.
pub fn render(content: &str, prefs: &Preferences) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut skip_blank = false;

    for line in content.lines() {
        if skip_blank && line.trim().is_empty() {
            skip_blank = false;
            continue;
        }
        skip_blank = false;

        let dropped = match line.trim() {
            GLOBAL_STYLES => match global_styles_import(prefs) {
                Some(import) => {
                    lines.push(import);
                    false
                }
                None => true,
            },
            LOCAL_STYLES_IMPORT if prefs.style != Style::Scss => true,
            _ => {
                lines.push(line.replace(ALIAS, prefs.import_alias.symbol()));
                false
            }
        };

        if dropped && lines.iter().all(|l| l.trim().is_empty()) {
            skip_blank = true;
        }
    }

    text(&lines.join("\n"))
}
