use anyhow::Result;

pub fn cmd_version() -> Result<()> {
    println!(
        "zipbundler {} (commit {})",
        env!("CARGO_PKG_VERSION"),
        option_env!("ZIPBUNDLER_COMMIT").unwrap_or("unknown")
    );
    Ok(())
}
