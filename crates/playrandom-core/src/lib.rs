//! playrandom-core — play every video under a set of directories, shuffled.
//!
//! # Architecture
//!
//! ```text
//! Phase 1: Scan    (TreeScanner -> PathCollection)
//! Phase 2: Shuffle (Shuffler, seeded once per run)
//! Phase 3: Play    (PlaybackDriver -> PlayerBackend, one child at a time)
//! ```

pub mod config;
pub mod effects;
pub mod engine;
pub mod error;
pub mod models;
pub mod paths;
pub mod shuffle;

pub use config::Config;
pub use effects::playback::{PlaybackDriver, PlaybackReport, SpawnFailurePolicy};
pub use effects::process::ProcessBackend;
pub use effects::scan::TreeScanner;
pub use effects::{ListBackend, PlayOutcome, PlayerBackend};
pub use engine::{Engine, ScanReport, SessionReport};
pub use error::{AllocationFailure, ConfigError, Error, PlaybackError, ScanError};
pub use models::*;
pub use shuffle::{ShufflePolicy, Shuffler};
