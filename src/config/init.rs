use anyhow::{bail, Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::Path;

use super::schema::Config;
use crate::record::storage::DEFAULT_STORE_FILE;

/// Write a commented default config file to `path`.
///
/// Refuses to replace an existing file unless `force` is set. The write is
/// atomic, so an interrupted run never leaves a half-written config behind.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists at {}. Use --force to overwrite",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }
    }

    let defaults = Config::default();
    let body = serde_saphyr::to_string(&defaults).context("Failed to serialize config")?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    writeln!(file, "# pt-score configuration")?;
    writeln!(
        file,
        "# store_path: score log location (default: ./{})",
        DEFAULT_STORE_FILE
    )?;
    writeln!(file, "# color: auto | always | never")?;
    file.write_all(body.as_bytes())
        .context("Failed to write config")?;
    file.commit().context("Failed to save config")?;

    Ok(())
}
