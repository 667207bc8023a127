use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_DIR: &str = "data/quran";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct QuranConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub data_dir: Option<String>,
}

/// Fully resolved settings after flags, file and defaults are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
}

impl QuranConfig {
    /// Values set on `overrides` win over values in `self`.
    pub fn merge(self, overrides: QuranConfig) -> QuranConfig {
        QuranConfig {
            host: overrides.host.or(self.host),
            port: overrides.port.or(self.port),
            data_dir: overrides.data_dir.or(self.data_dir),
        }
    }

    pub fn settings(&self) -> Settings {
        Settings {
            host: self.host.clone().unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: self.port.unwrap_or(DEFAULT_PORT),
            data_dir: PathBuf::from(self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR)),
        }
    }

    pub fn with_defaults() -> Self {
        Self {
            host: Some(DEFAULT_HOST.to_string()),
            port: Some(DEFAULT_PORT),
            data_dir: Some(DEFAULT_DATA_DIR.to_string()),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("quran-api.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<QuranConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: QuranConfig = toml::from_str(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &QuranConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_is_none() {
        let dir = TempDir::new().unwrap();
        let loaded = load_config(Some(&dir.path().join("absent.toml"))).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_write_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quran-api.toml");

        write_config(&path, &QuranConfig::with_defaults(), false).unwrap();
        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded, QuranConfig::with_defaults());

        assert!(write_config(&path, &QuranConfig::default(), false).is_err());
        write_config(&path, &QuranConfig::default(), true).unwrap();
    }

    #[test]
    fn test_partial_file_and_overrides() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quran-api.toml");
        std::fs::write(&path, "port = 8080\ndata_dir = \"/srv/quran\"\n").unwrap();

        let file = load_config(Some(&path)).unwrap().unwrap();
        let merged = file.merge(QuranConfig {
            port: Some(9000),
            ..Default::default()
        });
        let settings = merged.settings();

        assert_eq!(settings.port, 9000);
        assert_eq!(settings.host, DEFAULT_HOST);
        assert_eq!(settings.data_dir, PathBuf::from("/srv/quran"));
    }
}
