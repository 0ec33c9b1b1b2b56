use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::features::DEFAULT_HTTPS_WEIGHT;

/// Global configuration loaded from `~/.config/phishguard/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Down-weight factor applied to the `is_https` feature before model input.
    /// Must match the value the model was trained with.
    #[serde(default = "default_https_weight")]
    pub https_weight: f64,
    /// Optional path to a JSON model artifact (bias + per-feature weights).
    /// When missing, the built-in default model is used.
    #[serde(default)]
    pub model_path: Option<PathBuf>,
}

fn default_https_weight() -> f64 {
    DEFAULT_HTTPS_WEIGHT
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            https_weight: DEFAULT_HTTPS_WEIGHT,
            model_path: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishguard")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DetectorConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DetectorConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DetectorConfig = toml::from_str(&data)?;
    Ok(cfg)
}
