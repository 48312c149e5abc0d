use std::path::Path;

use anyhow::{anyhow, bail, Result};

use zipbundler::config::{load_config, validate_config, CONFIG_FILE_NAMES, PYPROJECT_FILE};

pub fn cmd_validate(config: Option<&Path>, strict: bool) -> Result<()> {
    let cwd = super::current_dir()?;
    let loaded = load_config(config, &cwd)?.ok_or_else(|| {
        anyhow!(
            "No config file found in {} (looked for {}, {} with [tool.zipbundler])",
            cwd.display(),
            CONFIG_FILE_NAMES.join(", "),
            PYPROJECT_FILE
        )
    })?;

    let mut report = validate_config(&loaded.config, &loaded.dir());
    report
        .warnings
        .extend(loaded.warnings.iter().map(|w| w.to_string()));

    println!("Config: {}", loaded.path.display());
    for warning in &report.warnings {
        println!("  warning: {}", warning);
    }
    for error in &report.errors {
        println!("  error: {}", error);
    }

    if !report.passes(strict) {
        if report.is_valid() {
            bail!(
                "{} warning(s) reported and --strict is set",
                report.warnings.len()
            );
        }
        bail!("Configuration is invalid: {} error(s)", report.errors.len());
    }

    println!("Configuration is valid.");
    Ok(())
}
