use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_TITLE: &str = "City Hospital Management";
pub const DEFAULT_TICK_RATE_MS: u64 = 250;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Header title
    pub title: Option<String>,

    /// Event poll timeout in milliseconds
    pub tick_rate_ms: Option<u64>,

    /// Default tracing filter when RUST_LOG is unset
    pub log_level: Option<String>,

    /// Directory for CSV/JSON exports
    pub export_dir: Option<PathBuf>,
}

impl Config {
    pub fn title(&self) -> String {
        self.title
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(
            self.tick_rate_ms
                .filter(|ms| *ms > 0)
                .unwrap_or(DEFAULT_TICK_RATE_MS),
        )
    }

    pub fn log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .or_else(|| data_dir().map(|dir| dir.join("exports")))
            .unwrap_or_else(|| PathBuf::from(".hospital-dash").join("exports"))
    }
}

/// Load the config file. An explicit path wins over the discovered one.
/// A missing file is not an error and yields defaults.
pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Some(path) => path,
            None => return Ok(Config::default()),
        },
    };
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    toml::from_str::<Config>(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn config_path() -> Option<PathBuf> {
    config_path_from(|key| std::env::var_os(key))
}

/// Discovery order: HOSPITAL_DASH_CONFIG, XDG_CONFIG_HOME, HOME, then the
/// platform config dir.
fn config_path_from(env: impl Fn(&str) -> Option<OsString>) -> Option<PathBuf> {
    if let Some(path) = env("HOSPITAL_DASH_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = env("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("hospital-dash").join("config.toml"));
    }
    if let Some(home) = env("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("hospital-dash").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "hospital-dash", "hospital-dash")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    data_dir_from(|key| std::env::var_os(key))
}

fn data_dir_from(env: impl Fn(&str) -> Option<OsString>) -> Option<PathBuf> {
    if let Some(xdg) = env("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("hospital-dash"));
    }
    if let Some(home) = env("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("hospital-dash"));
    }
    directories::ProjectDirs::from("io", "hospital-dash", "hospital-dash")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("hospital-dash.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.title(), DEFAULT_TITLE);
        assert_eq!(config.tick_rate(), Duration::from_millis(DEFAULT_TICK_RATE_MS));
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
title = "St. Mary's Dashboard"
tick_rate_ms = 100
log_level = "debug"
export_dir = "/tmp/exports"
unknown_key = true
"#,
        )
        .unwrap();

        let config = load(Some(&path)).unwrap();
        assert_eq!(config.title(), "St. Mary's Dashboard");
        assert_eq!(config.tick_rate(), Duration::from_millis(100));
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.export_dir(), PathBuf::from("/tmp/exports"));
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = Config {
            title: Some("  ".to_string()),
            tick_rate_ms: Some(0),
            log_level: Some(String::new()),
            export_dir: None,
        };
        assert_eq!(config.title(), DEFAULT_TITLE);
        assert_eq!(config.tick_rate(), Duration::from_millis(DEFAULT_TICK_RATE_MS));
        assert_eq!(config.log_level(), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "title = [unterminated").unwrap();

        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    fn env_of<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<OsString> + 'a {
        move |key| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| OsString::from(*value))
        }
    }

    #[test]
    fn test_config_path_discovery_order() {
        let all = [
            ("HOSPITAL_DASH_CONFIG", "/etc/dash.toml"),
            ("XDG_CONFIG_HOME", "/xdg"),
            ("HOME", "/home/nurse"),
        ];
        assert_eq!(
            config_path_from(env_of(&all)),
            Some(PathBuf::from("/etc/dash.toml"))
        );
        assert_eq!(
            config_path_from(env_of(&all[1..])),
            Some(PathBuf::from("/xdg/hospital-dash/config.toml"))
        );
        assert_eq!(
            config_path_from(env_of(&all[2..])),
            Some(PathBuf::from("/home/nurse/.config/hospital-dash/config.toml"))
        );
    }

    #[test]
    fn test_data_dir_prefers_xdg() {
        let vars = [("XDG_DATA_HOME", "/data"), ("HOME", "/home/nurse")];
        assert_eq!(
            data_dir_from(env_of(&vars)),
            Some(PathBuf::from("/data/hospital-dash"))
        );
        assert_eq!(
            data_dir_from(env_of(&vars[1..])),
            Some(PathBuf::from("/home/nurse/.local/share/hospital-dash"))
        );
    }
}
