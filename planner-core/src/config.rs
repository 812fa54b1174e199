//! Global planner configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{DEFAULT_OVERFLOW_COLOR, DEFAULT_PALETTE, DEFAULT_RESULTS_FILE};
use crate::error::{PlannerError, PlannerResult};
use crate::palette::Palette;

fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
}

fn default_color() -> String {
    DEFAULT_OVERFLOW_COLOR.to_string()
}

fn default_results_file() -> PathBuf {
    PathBuf::from(DEFAULT_RESULTS_FILE)
}

/// Global configuration at ~/.config/planner/config.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlannerConfig {
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,

    #[serde(default = "default_color")]
    pub default_color: String,

    #[serde(default = "default_results_file")]
    pub results_file: PathBuf,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            palette: default_palette(),
            default_color: default_color(),
            results_file: default_results_file(),
        }
    }
}

impl PlannerConfig {
    pub fn config_path() -> PlannerResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PlannerError::Config("Could not determine config directory".into()))?
            .join("planner");

        Ok(config_dir.join("config.toml"))
    }

    /// Load ~/.config/planner/config.toml, writing a commented default
    /// file first if there is none.
    pub fn load() -> PlannerResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from a specific file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> PlannerResult<Self> {
        debug!(path = %path.display(), "loading config");

        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| PlannerError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PlannerError::Config(e.to_string()))
    }

    /// The configured palette, validated.
    pub fn palette(&self) -> PlannerResult<Palette> {
        Palette::new(self.palette.clone(), self.default_color.clone())
    }

    /// Results file with `~` expanded.
    pub fn results_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.results_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Save the current config to `path`.
    pub fn save(&self, path: &Path) -> PlannerResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| PlannerError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| PlannerError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> PlannerResult<()> {
        let palette = DEFAULT_PALETTE
            .iter()
            .map(|c| format!("\"{c}\""))
            .collect::<Vec<_>>()
            .join(", ");

        let contents = format!(
            "\
# planner configuration

# Colors given to selected sections, in order:
# palette = [{palette}]

# Color shared by sections selected once the palette runs out:
# default_color = \"{DEFAULT_OVERFLOW_COLOR}\"

# Search results to plan from:
# results_file = \"{DEFAULT_RESULTS_FILE}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PlannerError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PlannerError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
