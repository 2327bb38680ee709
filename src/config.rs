use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;

/// Environment variable naming an explicit config file
pub(crate) const CONFIG_ENV: &str = "MOST_ACTIVE_COOKIE_CONFIG";

const APP_DIR: &str = "most-active-cookie";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigOutputFormat {
    Plain,
    Json,
    Table,
}

impl From<ConfigOutputFormat> for OutputFormat {
    fn from(format: ConfigOutputFormat) -> Self {
        match format {
            ConfigOutputFormat::Plain => OutputFormat::Plain,
            ConfigOutputFormat::Json => OutputFormat::Json,
            ConfigOutputFormat::Table => OutputFormat::Table,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) format: Option<ConfigOutputFormat>,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) quiet: bool,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_internal(false)
    }

    /// Load and report which file was used
    pub(crate) fn load_verbose() -> Self {
        Self::load_internal(true)
    }

    fn load_internal(verbose: bool) -> Self {
        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            if let Some(config) = Self::load_from(&path, verbose) {
                return config;
            }
        }

        Self::default()
    }

    fn load_from(path: &Path, verbose: bool) -> Option<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Warning: Failed to read {}: {}", path.display(), e);
                return None;
            }
        };
        match toml::from_str::<Config>(&content) {
            Ok(config) => {
                if verbose {
                    eprintln!("Loaded config from {}", path.display());
                }
                Some(config)
            }
            Err(e) => {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        // An explicit file wins over every default location
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return vec![PathBuf::from(path)];
        }

        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/most-active-cookie/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join(APP_DIR).join("config.toml"));
        }

        // 2. Platform config dir (e.g. ~/Library/Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join(APP_DIR).join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.most-active-cookie.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(format!(".{APP_DIR}.toml")));
        }

        paths
    }
}
