mod init;
mod schema;

pub use init::write_default_config;
pub use schema::{ColorMode, Config};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/pt-score/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("pt-score"))
}

/// Get the default config file path (~/.config/pt-score/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/pt-score/config.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
///
/// A missing file at the default location is not an error; defaults are used.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = match path {
        Some(p) => p,
        None => match get_config_path() {
            Ok(p) => p,
            Err(e) => {
                tracing::debug!("No config location available ({}), using defaults", e);
                return Ok(Config::default());
            }
        },
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        tracing::debug!(path = %config_path.display(), "No config file, using defaults");
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    tracing::debug!(path = %config_path.display(), "Loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_missing_config_is_error() {
        let dir = TempDir::new().unwrap();
        let result = load_config(Some(dir.path().join("nope.yaml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_full_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "store_path: /tmp/scores.csv\ncolor: never\n").unwrap();

        let config = load_config(Some(path)).unwrap();
        assert_eq!(config.store_path, Some(PathBuf::from("/tmp/scores.csv")));
        assert_eq!(config.color, ColorMode::Never);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "{}").unwrap();

        let config = load_config(Some(path)).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.color, ColorMode::Auto);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "store: scores.csv\n").unwrap();

        assert!(load_config(Some(path)).is_err());
    }

    #[test]
    fn test_invalid_color_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "color: sometimes\n").unwrap();

        assert!(load_config(Some(path)).is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            store_path: Some(PathBuf::from("logs/pt_scores.csv")),
            color: ColorMode::Always,
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
