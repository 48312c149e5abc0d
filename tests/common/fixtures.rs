//! Reusable project content.

use super::TestEnv;

pub const INIT_PY: &str = "";

pub const CLI_PY: &str = "def main():\n    print('hello from app')\n";

pub const UTILS_PY: &str = "def helper():\n    return 42\n";

/// `.zipbundler.toml` bundling `src/app` into `dist/app.pyz`
pub const APP_CONFIG: &str = r#"packages = ["src/app"]
entry_point = "app.cli:main"

[output]
path = "dist/app.pyz"

[options]
shebang = "/usr/bin/env python3"
disable_build_timestamp = true

[metadata]
display_name = "App"
version = "1.2.3"
author = "Example Author"
"#;

/// Lay out `src/app` with three modules and a cache file.
pub fn write_app_package(env: &TestEnv) {
    env.write_project_file("src/app/__init__.py", INIT_PY)
        .write_project_file("src/app/cli.py", CLI_PY)
        .write_project_file("src/app/utils.py", UTILS_PY)
        .write_project_file("src/app/__pycache__/cli.cpython-312.pyc", "cache");
}
