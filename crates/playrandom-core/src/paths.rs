//! Path conventions.
//!
//! Pure functions: bounded joining for the scanner and the default
//! config file location.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Scanning
// ---------------------------------------------------------------------------

/// Longest joined path the scanner will record, in bytes.
pub const MAX_PATH_LEN: usize = 4096;

/// Join `dir` and `name`, or `None` if the result exceeds [`MAX_PATH_LEN`].
pub fn join_bounded(dir: &Path, name: &OsStr) -> Option<PathBuf> {
    let joined = dir.join(name);
    if joined.as_os_str().len() > MAX_PATH_LEN {
        return None;
    }
    Some(joined)
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

pub const CONFIG_ENV: &str = "PLAYRANDOM_CONFIG";
pub const PLAYER_ENV: &str = "PLAYRANDOM_PLAYER";

/// `$HOME/.config/playrandom/config.json`, if `HOME` is set.
pub fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("playrandom")
            .join("config.json"),
    )
}
