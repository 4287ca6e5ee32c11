use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::Config;

const CONFIG_TEMPLATE: &str = r#"# camq configuration
#
# Every key is optional. Environment variables override this file:
#   CAMQ_ENDPOINT, CAMQ_TITLE
# and `camq --endpoint <URL>` overrides both.

# Address questions are POSTed to as {"query": "..."}.
# The service must answer with {"answer": "..."}.
endpoint = "http://localhost:8000/ask"

# Heading shown at the top of the terminal UI.
title = "CAM Chatbot"
"#;

pub fn run() -> Result<()> {
    let config_dir = Config::config_dir()?;
    run_in(&config_dir, confirm_overwrite)?;

    println!("\nNext steps:");
    println!("  1. Start the answering service on the configured endpoint");
    println!("  2. Start asking:      camq");
    println!("  3. Or ask once:       camq -q \"What is CAM?\"");

    Ok(())
}

/// Write the config template into `config_dir`, asking `confirm` before
/// replacing an existing file. Returns the path written, or `None` if the
/// user declined.
pub fn run_in(
    config_dir: &Path,
    confirm: impl FnOnce(&Path) -> Result<bool>,
) -> Result<Option<PathBuf>> {
    let config_path = config_dir.join("config.toml");

    std::fs::create_dir_all(config_dir)
        .with_context(|| format!("Failed to create config directory: {}", config_dir.display()))?;

    if config_path.exists() {
        if !confirm(&config_path)? {
            println!("Setup cancelled.");
            return Ok(None);
        }
        backup_file(&config_path)?;
    }

    std::fs::write(&config_path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Created {}", config_path.display());

    Ok(Some(config_path))
}

fn confirm_overwrite(path: &Path) -> Result<bool> {
    println!("Existing config file found:");
    println!("  {}", path.display());
    print!("\nOverwrite? (The existing file will be backed up) [y/N] ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Back up a file to <name>.bak, appending a timestamp if .bak already exists.
fn backup_file(path: &Path) -> Result<PathBuf> {
    let mut backup = path.with_extension("toml.bak");

    if backup.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        let name = format!("toml.bak.{}", timestamp);
        backup = path.with_extension(name);
    }

    std::fs::rename(path, &backup)
        .with_context(|| format!("Failed to back up {} to {}", path.display(), backup.display()))?;
    println!("  Backed up to {}", backup.display());

    Ok(backup)
}
