use std::path::Path;

use anyhow::{Context, Result};

use zipbundler::inspect_archive;

pub fn cmd_info(archive: &Path) -> Result<()> {
    let info = inspect_archive(archive)
        .with_context(|| format!("Failed to read archive {}", archive.display()))?;

    println!("Archive: {}", info.path.display());
    match &info.interpreter {
        Some(interpreter) => println!("Interpreter: {}", interpreter),
        None => println!("No interpreter specified in archive"),
    }
    println!("Members: {}", info.member_count);
    println!("SHA-256: {}", info.sha256);

    if !info.metadata.is_empty() {
        println!();
        println!("Metadata:");
        for (key, value) in &info.metadata {
            println!("  {}: {}", key, value);
        }
    }
    Ok(())
}
