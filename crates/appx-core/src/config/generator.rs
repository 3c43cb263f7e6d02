//! Generated project configuration files (tsconfig / jsconfig)

use crate::preferences::Preferences;
use crate::templates::EOL;
use anyhow::Result;
use serde::Serialize;
use serde_json::{json, Map, Value};

/// `compilerOptions.paths` with the single import alias entry
fn alias_paths(prefs: &Preferences) -> Value {
    let mut paths = Map::new();
    paths.insert(
        prefs.import_alias.as_str().to_string(),
        json!([prefs.alias_target()]),
    );
    Value::Object(paths)
}

/// tsconfig.json for the Next.js app router
pub fn tsconfig(prefs: &Preferences) -> Value {
    json!({
        "compilerOptions": {
            "lib": ["dom", "dom.iterable", "esnext"],
            "allowJs": true,
            "skipLibCheck": true,
            "strict": true,
            "noEmit": true,
            "esModuleInterop": true,
            "module": "esnext",
            "moduleResolution": "bundler",
            "resolveJsonModule": true,
            "isolatedModules": true,
            "jsx": "preserve",
            "incremental": true,
            "plugins": [{ "name": "next" }],
            "paths": alias_paths(prefs),
        },
        "include": ["next-env.d.ts", "**/*.ts", "**/*.tsx", ".next/types/**/*.ts"],
        "exclude": ["node_modules"],
    })
}

/// jsconfig.json: only the alias mapping
pub fn jsconfig(prefs: &Preferences) -> Value {
    json!({
        "compilerOptions": {
            "paths": alias_paths(prefs),
        },
    })
}

/// Pretty-printed JSON (two-space indent) ending with the platform newline
pub fn to_json_file<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(format!("{}{}", serde_json::to_string_pretty(value)?, EOL))
}
