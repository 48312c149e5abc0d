//! Init command - write a starter `.zipbundler.toml` from a preset

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};

use zipbundler::config::{find_preset, list_presets, PRESETS};

pub fn cmd_init(output: &Path, preset: &str, list: bool, force: bool) -> Result<()> {
    if list {
        print!("{}", list_presets());
        return Ok(());
    }

    let preset = find_preset(preset).ok_or_else(|| {
        let names: Vec<&str> = PRESETS.iter().map(|p| p.name).collect();
        anyhow!(
            "Unknown preset '{}'. Available presets: {}",
            preset,
            names.join(", ")
        )
    })?;

    if output.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            output.display()
        );
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(output, preset.content)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Created {} from the '{}' preset.",
        output.display(),
        preset.name
    );
    println!();
    println!("Next steps:");
    println!("  1. Point 'packages' at your source directories");
    println!("  2. Run: zipbundler build");
    Ok(())
}
