use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigFormat {
    Table,
    Json,
    Csv,
    Html,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) source: Option<String>,
    #[serde(default)]
    pub(crate) format: Option<ConfigFormat>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    /// Watch interval in seconds
    #[serde(default)]
    pub(crate) interval: Option<f64>,
    /// HTTP timeout in seconds
    #[serde(default)]
    pub(crate) timeout: Option<f64>,
}

impl Config {
    /// Load the first readable, parseable config file; defaults otherwise
    pub(crate) fn load() -> Self {
        Self::get_config_paths()
            .iter()
            .find_map(|path| Self::load_from(path))
            .unwrap_or_default()
    }

    fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let content = fs::read_to_string(path).ok()?;
        match toml::from_str::<Config>(&content) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                Some(config)
            }
            Err(e) => {
                log::warn!("Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/livetiming/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("livetiming").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/livetiming/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("livetiming").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.livetiming.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".livetiming.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paths() {
        let paths = Config::get_config_paths();
        assert!(!paths.is_empty());
        assert!(paths.iter().all(|p| p.to_string_lossy().contains("livetiming")));
    }

    #[test]
    fn load_from_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "format = \"json\"\nno_color = true\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.format, Some(ConfigFormat::Json));
        assert!(config.no_color);
        assert!(config.source.is_none());
    }

    #[test]
    fn load_from_invalid_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "format = \"xml\"\n").unwrap();
        assert!(Config::load_from(&path).is_none());
    }

    #[test]
    fn load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("absent.toml")).is_none());
    }
}
