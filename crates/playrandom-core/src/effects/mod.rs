//! Side effects: filesystem scanning and player launches.

use std::path::Path;

use crate::error::PlaybackError;
use crate::models::PlayerSpec;

/// How one player run ended. None of these stop the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Completed,
    ExitedWith(i32),
    /// Terminated without an exit code (e.g. by a signal).
    Killed,
}

/// Trait for player backends.
///
/// The driver calls `play` once per item and expects it to return only
/// after that item is finished.
pub trait PlayerBackend {
    fn play(&self, player: &PlayerSpec, file: &Path) -> Result<PlayOutcome, PlaybackError>;
}

/// Prints each path instead of playing it.
pub struct ListBackend;

impl PlayerBackend for ListBackend {
    fn play(&self, _: &PlayerSpec, file: &Path) -> Result<PlayOutcome, PlaybackError> {
        println!("{}", file.display());
        Ok(PlayOutcome::Completed)
    }
}

pub mod playback;
pub mod process;
pub mod scan;
