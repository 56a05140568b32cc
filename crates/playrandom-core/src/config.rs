//! Run configuration.
//!
//! Defaults, then an optional JSON file, then `PLAYRANDOM_PLAYER`. The
//! binary layers its flags on top and calls [`Config::validate`] before
//! building the [`Engine`](crate::Engine).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::effects::playback::SpawnFailurePolicy;
use crate::error::ConfigError;
use crate::models::{ExtensionSet, PlayerSpec};
use crate::paths;
use crate::shuffle::ShufflePolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub extensions: ExtensionSet,
    pub player: PlayerSpec,
    pub recurse: bool,
    pub shuffle: ShufflePolicy,
    pub on_spawn_failure: SpawnFailurePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: ExtensionSet::default(),
            player: PlayerSpec::default(),
            recurse: true,
            shuffle: ShufflePolicy::default(),
            on_spawn_failure: SpawnFailurePolicy::default(),
        }
    }
}

/// On-disk shape: every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    extensions: Option<ExtensionSet>,
    player: Option<String>,
    player_args: Option<Vec<String>>,
    recurse: Option<bool>,
    shuffle: Option<ShufflePolicy>,
    on_spawn_failure: Option<SpawnFailurePolicy>,
}

impl Config {
    /// Resolve configuration from `explicit`, else `PLAYRANDOM_CONFIG`, else
    /// the default location if it exists. Environment overrides apply last.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = config_file_path(explicit) {
            log::info!("playrandom: loading config {}", path.display());
            config.apply_file(&path)?;
        }

        if let Some(player) = std::env::var_os(paths::PLAYER_ENV) {
            config.player.program = player.to_string_lossy().into_owned();
        }

        config.validate()?;
        Ok(config)
    }

    fn apply_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(extensions) = file.extensions {
            self.extensions = extensions;
        }
        if let Some(program) = file.player {
            self.player.program = program;
        }
        if let Some(args) = file.player_args {
            self.player.args = args;
        }
        if let Some(recurse) = file.recurse {
            self.recurse = recurse;
        }
        if let Some(shuffle) = file.shuffle {
            self.shuffle = shuffle;
        }
        if let Some(policy) = file.on_spawn_failure {
            self.on_spawn_failure = policy;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extensions.is_empty() {
            return Err(invalid("extension list is empty"));
        }
        if self.extensions.as_slice().iter().any(String::is_empty) {
            return Err(invalid("empty extension in list"));
        }
        if self.player.program.trim().is_empty() {
            return Err(invalid("player program is empty"));
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> ConfigError {
    ConfigError::Invalid {
        reason: reason.to_string(),
    }
}

fn config_file_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(paths::CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    paths::default_config_path().filter(|p| p.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    /// Clean environment: no config env vars, HOME pointing at an empty dir.
    fn clean_env() -> (TempDir, MutexGuard<'static, ()>) {
        let guard = ENV_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let home = TempDir::new().expect("tempdir");
        std::env::set_var("HOME", home.path());
        std::env::remove_var(paths::CONFIG_ENV);
        std::env::remove_var(paths::PLAYER_ENV);
        (home, guard)
    }

    fn write_config(dir: &TempDir, json: &str) -> PathBuf {
        let path = dir.path().join("config.json");
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn defaults_without_any_file() {
        let (_home, _guard) = clean_env();
        let config = Config::load(None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.player.program, "mpv");
        assert!(config.recurse);
    }

    #[test]
    fn explicit_file_overrides_some_fields() {
        let (home, _guard) = clean_env();
        let path = write_config(
            &home,
            r#"{ "player": "vlc", "player_args": ["--fullscreen"], "shuffle": "uniform", "recurse": false }"#,
        );

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.player, PlayerSpec::new("vlc", &["--fullscreen"]));
        assert_eq!(config.shuffle, ShufflePolicy::Uniform);
        assert!(!config.recurse);
        assert_eq!(config.extensions, ExtensionSet::default());
    }

    #[test]
    fn env_config_path_is_used() {
        let (home, _guard) = clean_env();
        let path = write_config(&home, r#"{ "on_spawn_failure": "abort" }"#);
        std::env::set_var(paths::CONFIG_ENV, &path);

        let config = Config::load(None).unwrap();
        assert_eq!(config.on_spawn_failure, SpawnFailurePolicy::Abort);
    }

    #[test]
    fn default_location_is_picked_up() {
        let (home, _guard) = clean_env();
        let dir = home.path().join(".config").join("playrandom");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.json"), r#"{ "extensions": [".ogv"] }"#).unwrap();

        let config = Config::load(None).unwrap();
        assert!(config.extensions.matches("x.OGV"));
        assert!(!config.extensions.matches("x.mkv"));
    }

    #[test]
    fn player_env_wins_over_file() {
        let (home, _guard) = clean_env();
        let path = write_config(&home, r#"{ "player": "vlc" }"#);
        std::env::set_var(paths::PLAYER_ENV, "mplayer");

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.player.program, "mplayer");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let (home, _guard) = clean_env();
        let path = write_config(&home, r#"{ "volume": 11 }"#);
        assert!(matches!(Config::load(Some(&path)), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn missing_explicit_file_is_read_error() {
        let (home, _guard) = clean_env();
        let path = home.path().join("absent.json");
        assert!(matches!(Config::load(Some(&path)), Err(ConfigError::Read { .. })));
    }

    #[test]
    fn empty_extension_list_is_invalid() {
        let (home, _guard) = clean_env();
        let path = write_config(&home, r#"{ "extensions": [] }"#);
        assert!(matches!(Config::load(Some(&path)), Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn blank_player_is_invalid() {
        let mut config = Config::default();
        config.player.program = "  ".into();
        assert!(config.validate().is_err());
    }
}
