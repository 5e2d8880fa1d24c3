use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default name of the intermediate URL list written into the output dir.
pub const DEFAULT_LIST_FILENAME: &str = "js_urls.txt";

/// Global configuration loaded from `~/.config/jsgrab/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsgrabConfig {
    /// TCP connect timeout per request, in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout per URL, in seconds.
    pub request_timeout_secs: u64,
    /// Name of the URL list file; the hand-off artifact between stages.
    #[serde(default = "default_list_filename")]
    pub list_filename: String,
}

fn default_list_filename() -> String {
    DEFAULT_LIST_FILENAME.to_string()
}

impl Default for JsgrabConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            request_timeout_secs: 60,
            list_filename: default_list_filename(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("jsgrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<JsgrabConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = JsgrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: JsgrabConfig = toml::from_str(&data)?;
    Ok(cfg)
}
