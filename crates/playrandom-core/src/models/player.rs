//! Player invocation spec: program plus fixed flags, file path appended last.

use std::ffi::OsString;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PLAYER: &str = "mpv";
pub const DEFAULT_PLAYER_ARGS: &[&str] = &["--really-quiet", "--fs"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    /// Looked up on `PATH` unless it contains a separator.
    pub program: String,
    pub args: Vec<String>,
}

impl PlayerSpec {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Full argument vector for one invocation.
    pub fn argv(&self, file: &Path) -> Vec<OsString> {
        let mut argv: Vec<OsString> = self.args.iter().map(OsString::from).collect();
        argv.push(file.as_os_str().to_os_string());
        argv
    }
}

impl Default for PlayerSpec {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER, DEFAULT_PLAYER_ARGS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_is_last_argument() {
        let spec = PlayerSpec::default();
        let argv = spec.argv(Path::new("/v/a b; rm -rf.mkv"));
        assert_eq!(
            argv,
            vec![
                OsString::from("--really-quiet"),
                OsString::from("--fs"),
                OsString::from("/v/a b; rm -rf.mkv"),
            ]
        );
    }

    #[test]
    fn no_flags_means_path_only() {
        let spec = PlayerSpec::new("vlc", &[]);
        assert_eq!(spec.argv(Path::new("x.mp4")), vec![OsString::from("x.mp4")]);
    }
}
