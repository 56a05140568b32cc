//! Playback driver — plays a collection front to back, one item at a time.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{PlayOutcome, PlayerBackend};
use crate::error::PlaybackError;
use crate::models::{PathCollection, PlayerSpec};

/// What to do when the player can't be launched for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpawnFailurePolicy {
    /// Log it and move on to the next item.
    #[default]
    Continue,
    /// Stop the queue and return the error.
    Abort,
}

/// Tally of one `play_all` pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackReport {
    pub played: usize,
    /// Player ran but exited non-zero or was killed. Informational.
    pub unclean_exits: usize,
    pub spawn_failures: usize,
}

pub struct PlaybackDriver<'a> {
    backend: &'a dyn PlayerBackend,
    player: &'a PlayerSpec,
    on_spawn_failure: SpawnFailurePolicy,
}

impl<'a> PlaybackDriver<'a> {
    pub fn new(
        backend: &'a dyn PlayerBackend,
        player: &'a PlayerSpec,
        on_spawn_failure: SpawnFailurePolicy,
    ) -> Self {
        Self {
            backend,
            player,
            on_spawn_failure,
        }
    }

    /// Play a single file and wait for the player to exit.
    pub fn play_one(&self, file: &Path) -> Result<PlayOutcome, PlaybackError> {
        self.backend.play(self.player, file)
    }

    /// Play every entry in its current order. Never modifies the collection.
    ///
    /// Exit status is ignored. A failed launch is logged and skipped, or
    /// returned immediately under [`SpawnFailurePolicy::Abort`].
    pub fn play_all(&self, queue: &PathCollection) -> Result<PlaybackReport, PlaybackError> {
        let mut report = PlaybackReport::default();

        for file in queue.iter() {
            match self.play_one(file) {
                Ok(PlayOutcome::Completed) => report.played += 1,
                Ok(outcome) => {
                    log::debug!("playrandom: {} ended with {:?}", file.display(), outcome);
                    report.played += 1;
                    report.unclean_exits += 1;
                }
                Err(e) => {
                    report.spawn_failures += 1;
                    match self.on_spawn_failure {
                        SpawnFailurePolicy::Continue => {
                            log::warn!("playrandom: {}", e);
                            eprintln!("{}", e);
                        }
                        SpawnFailurePolicy::Abort => return Err(e),
                    }
                }
            }
        }

        Ok(report)
    }
}
