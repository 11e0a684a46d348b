use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::core::Period;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigSortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) store: Option<PathBuf>,
    #[serde(default)]
    pub(crate) default_timesheet: Option<String>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) period: Option<Period>,
    #[serde(default)]
    pub(crate) order: Option<ConfigSortOrder>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    /// File the values were read from; logged once logging is up
    #[serde(skip)]
    pub(crate) source: Option<PathBuf>,
}

impl Config {
    /// First config file that parses; a malformed file is reported and skipped
    pub(crate) fn load() -> Self {
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(mut config) => {
                        config.source = Some(path);
                        return config;
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/timesheet/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("timesheet").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/timesheet/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("timesheet").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.timesheet.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".timesheet.toml"));
        }

        paths
    }
}
