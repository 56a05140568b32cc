//! Error types.
//!
//! Only [`AllocationFailure`] (and the opt-in abort on a failed launch) is
//! fatal. Unreadable roots and player exit codes are handled where they
//! happen and never reach the top level.

use std::path::PathBuf;

use thiserror::Error;

/// The path collection could not grow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocationFailure {
    #[error("collection capacity overflow (capacity {capacity})")]
    CapacityOverflow { capacity: usize },

    #[error("out of memory growing collection to {requested} slots")]
    OutOfMemory { requested: usize },

    #[error("out of memory copying a {bytes}-byte path")]
    PathCopy { bytes: usize },
}

/// Failure while walking one root.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("can't read directory '{}': {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Allocation(#[from] AllocationFailure),
}

/// Failure to launch the player for one item.
#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error("can't launch '{program}' for '{}': {source}", .path.display())]
    SpawnFailed {
        program: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration could not be loaded.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("can't read config '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {reason}")]
    Invalid { reason: String },
}

/// Errors that end a run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("can't allocate storage: {0}")]
    Allocation(#[from] AllocationFailure),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("playback aborted: {0}")]
    Playback(#[from] PlaybackError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
