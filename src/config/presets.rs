//! Starter configurations written by `zipbundler init`

/// A named starter config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub content: &'static str,
}

pub const DEFAULT_PRESET: &str = "basic";

pub const PRESETS: [Preset; 4] = [
    Preset {
        name: "basic",
        title: "Basic",
        description: "Standard configuration for a typical Python package",
        content: concat!(
            "# Packages to include (directories or glob patterns)\n",
            "packages = [\"src/my_package/**/*.py\"]\n",
            "\n",
            "# Files and directories to exclude (gitignore-style patterns)\n",
            r#"exclude = [
    "**/__pycache__/**",
    "**/*.pyc",
    "**/*.pyo",
    "**/tests/**",
    "**/.git/**",
]
"#,
            "\n",
            "# Entry point for an executable archive (optional)\n",
            "# entry_point = \"my_package.__main__:main\"\n",
            "\n",
            "[output]\n",
            "path = \"dist/my_package.zip\"\n",
            "\n",
            "[options]\n",
            "shebang = \"/usr/bin/env python3\"\n",
            "main_guard = true\n",
            "compression = \"deflate\"\n",
            "\n",
            "# [metadata]\n",
            "# display_name = \"My Package\"\n",
            "# description = \"Package description\"\n",
            "# version = \"1.0.0\"\n",
        ),
    },
    Preset {
        name: "cli",
        title: "CLI Tool",
        description: "Configuration for a command-line application with entry point",
        content: concat!(
            "packages = [\"src/my_package/**/*.py\"]\n",
            r#"exclude = [
    "**/__pycache__/**",
    "**/*.pyc",
    "**/*.pyo",
    "**/tests/**",
    "**/.git/**",
]
"#,
            "entry_point = \"my_package.__main__:main\"\n",
            "\n",
            "[output]\n",
            "path = \"dist/my_package.pyz\"\n",
            "\n",
            "[options]\n",
            "shebang = \"/usr/bin/env python3\"\n",
            "main_guard = true\n",
            "compression = \"deflate\"\n",
            "\n",
            "[metadata]\n",
            "display_name = \"My CLI Tool\"\n",
            "description = \"A command-line application\"\n",
            "version = \"1.0.0\"\n",
        ),
    },
    Preset {
        name: "library",
        title: "Library",
        description: "Configuration for an importable library (no entry point)",
        content: concat!(
            "packages = [\"src/my_package/**/*.py\"]\n",
            r#"exclude = [
    "**/__pycache__/**",
    "**/*.pyc",
    "**/*.pyo",
    "**/tests/**",
    "**/.git/**",
]
"#,
            "\n",
            "[output]\n",
            "path = \"dist/my_package.zip\"\n",
            "\n",
            "[options]\n",
            "shebang = false\n",
            "main_guard = false\n",
            "compression = \"deflate\"\n",
            "\n",
            "[metadata]\n",
            "display_name = \"My Library\"\n",
            "description = \"An importable Python library\"\n",
            "version = \"1.0.0\"\n",
        ),
    },
    Preset {
        name: "minimal",
        title: "Minimal",
        description: "Minimal configuration with just the essentials",
        content: concat!(
            "packages = [\"src/my_package/**/*.py\"]\n",
            "\n",
            "[output]\n",
            "path = \"dist/my_package.zip\"\n",
        ),
    },
];

pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

/// Human readable listing for `init --list-presets`
pub fn list_presets() -> String {
    let mut presets: Vec<&Preset> = PRESETS.iter().collect();
    presets.sort_by_key(|p| p.name);

    let mut out = String::from("Available presets:\n");
    for preset in presets {
        out.push_str(&format!(
            "\n  {}\n    {}: {}\n",
            preset.name, preset.title, preset.description
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{validate_config, BundlerConfig};
    use std::path::Path;

    const COMMON_EXCLUDES: &str = r#"exclude = [
    "**/__pycache__/**",
    "**/*.pyc",
    "**/*.pyo",
    "**/tests/**",
    "**/.git/**",
]
"#;

    #[test]
    fn every_preset_parses_and_validates() {
        for preset in &PRESETS {
            let config: BundlerConfig = toml::from_str(preset.content)
                .unwrap_or_else(|e| panic!("preset {} failed to parse: {}", preset.name, e));
            let report = validate_config(&config, Path::new("."));
            assert!(report.passes(true), "{}: {:?}", preset.name, report);
        }
    }

    #[test]
    fn presets_share_default_excludes() {
        for name in ["basic", "cli", "library"] {
            let preset = find_preset(name).unwrap();
            assert!(preset.content.contains(COMMON_EXCLUDES), "{}", name);
        }
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find_preset("CLI").map(|p| p.name), Some("cli"));
        assert!(find_preset("nope").is_none());
        assert!(find_preset(DEFAULT_PRESET).is_some());
    }

    #[test]
    fn listing_is_sorted() {
        let listing = list_presets();
        let basic = listing.find("basic").unwrap();
        let minimal = listing.find("minimal").unwrap();
        assert!(basic < minimal);
    }
}
