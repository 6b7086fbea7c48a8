use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the score log. Relative paths resolve against the working directory.
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    #[serde(default)]
    pub color: ColorMode,
}

/// When to colorize terminal output.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colorize only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}
