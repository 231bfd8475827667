//! Application-level configuration: listening port and location of the games file.

use std::{
    env,
    ffi::OsString,
    fs,
    io::ErrorKind,
    net::{Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use serde::Deserialize;
use tracing::{info, warn};

use crate::dao::game_store::JsonFileGameStore;

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "GAMES_BACK_CONFIG_PATH";
/// Environment variable that overrides the games file location.
const STORAGE_PATH_ENV: &str = "GAMES_STORAGE_PATH";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_STORAGE_PATH: &str = "games.json";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// TCP port the HTTP server listens on, on every interface.
    pub port: u16,
    /// JSON file holding the persisted games.
    pub storage_path: PathBuf,
}

impl AppConfig {
    /// Load the configuration file, then apply environment overrides.
    ///
    /// A missing or broken file is never fatal: the built-in defaults are used instead.
    pub fn load() -> Self {
        let port = env::var("PORT").or_else(|_| env::var("SERVER_PORT")).ok();
        Self::from_file().with_overrides(port, env::var_os(STORAGE_PATH_ENV))
    }

    fn from_file() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let app_config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        port = app_config.port,
                        storage = %app_config.storage_path.display(),
                        "loaded config"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Apply raw environment values on top of the current configuration.
    fn with_overrides(mut self, port: Option<String>, storage_path: Option<OsString>) -> Self {
        if let Some(value) = port {
            match value.trim().parse::<u16>() {
                Ok(port) => self.port = port,
                Err(err) => warn!(value = %value, error = %err, "ignoring invalid port override"),
            }
        }

        if let Some(path) = storage_path.filter(|path| !path.is_empty()) {
            self.storage_path = PathBuf::from(path);
        }

        self
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    /// Game store backed by [`AppConfig::storage_path`].
    pub fn game_store(&self) -> JsonFileGameStore {
        JsonFileGameStore::new(self.storage_path.clone())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    port: Option<u16>,
    storage_path: Option<PathBuf>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = Self::default();
        Self {
            port: value.port.unwrap_or(defaults.port),
            storage_path: value.storage_path.unwrap_or(defaults.storage_path),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_port_5000_with_local_file() {
        let config = AppConfig::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.storage_path, PathBuf::from("games.json"));
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:5000");
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let raw: RawConfig = serde_json::from_str(r#"{ "storagePath": "data/games.json" }"#).unwrap();
        let config = AppConfig::from(raw);

        assert_eq!(config.port, 5000);
        assert_eq!(config.storage_path, PathBuf::from("data/games.json"));
    }

    #[test]
    fn environment_overrides_win() {
        let config = AppConfig::default()
            .with_overrides(Some("8081".into()), Some(OsString::from("/tmp/games.json")));

        assert_eq!(config.port, 8081);
        assert_eq!(config.storage_path, PathBuf::from("/tmp/games.json"));
    }

    #[test]
    fn invalid_or_empty_overrides_are_ignored() {
        let config = AppConfig::default()
            .with_overrides(Some("not-a-port".into()), Some(OsString::new()));

        assert_eq!(config, AppConfig::default());
    }
}
