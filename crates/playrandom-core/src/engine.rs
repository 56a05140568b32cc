//! playrandom engine — scan, shuffle, play.
//!
//! Strictly phased and single-threaded: every root is scanned before the
//! shuffle, and the shuffle finishes before the first player launch.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::effects::playback::{PlaybackDriver, PlaybackReport};
use crate::effects::scan::TreeScanner;
use crate::effects::PlayerBackend;
use crate::error::{Result, ScanError};
use crate::models::PathCollection;
use crate::shuffle::Shuffler;

/// Root scanned when none is given.
pub const DEFAULT_ROOT: &str = ".";

/// Per-root results of the scan phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Roots that were read, with how many playable files each added.
    pub scanned: Vec<(PathBuf, usize)>,
    /// Roots that could not be opened as directories.
    pub unreadable: Vec<PathBuf>,
}

impl ScanReport {
    pub fn total(&self) -> usize {
        self.scanned.iter().map(|(_, n)| n).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionReport {
    pub scan: ScanReport,
    pub playback: PlaybackReport,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

pub struct Engine {
    config: Config,
    shuffler: Shuffler,
}

impl Engine {
    /// Seeds the shuffler from the entropy device (or clock).
    pub fn new(config: Config) -> Self {
        let shuffler = Shuffler::from_entropy(config.shuffle);
        Self::with_shuffler(config, shuffler)
    }

    pub fn with_shuffler(config: Config, shuffler: Shuffler) -> Self {
        Self { config, shuffler }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Scan every root into one collection.
    ///
    /// Unreadable roots are reported and skipped. An allocation failure
    /// drops the partial collection and ends the run.
    pub fn scan<P: AsRef<Path>>(&self, roots: &[P]) -> Result<(PathCollection, ScanReport)> {
        let mut queue = PathCollection::new()?;
        let mut report = ScanReport::default();
        let scanner = TreeScanner::new(&self.config.extensions, self.config.recurse);

        let default_root = [PathBuf::from(DEFAULT_ROOT)];
        let roots: Vec<&Path> = if roots.is_empty() {
            default_root.iter().map(PathBuf::as_path).collect()
        } else {
            roots.iter().map(|r| r.as_ref()).collect()
        };

        for root in roots {
            match scanner.walk(root, &mut queue) {
                Ok(count) => {
                    log::info!("playrandom: {} playable files under {}", count, root.display());
                    report.scanned.push((root.to_path_buf(), count));
                }
                Err(ScanError::Unreadable { path, source }) => {
                    log::warn!("playrandom: skipping root {}: {}", path.display(), source);
                    eprintln!("can't open directory '{}': {}", path.display(), source);
                    report.unreadable.push(path);
                }
                Err(ScanError::Allocation(e)) => return Err(e.into()),
            }
        }

        Ok((queue, report))
    }

    /// Full session: scan `roots`, shuffle, then play every file through
    /// `backend`, one at a time.
    pub fn run<P: AsRef<Path>>(&mut self, roots: &[P], backend: &dyn PlayerBackend) -> Result<SessionReport> {
        let (mut queue, scan) = self.scan(roots)?;

        self.shuffler.shuffle(&mut queue);
        log::debug!(
            "playrandom: shuffled {} entries ({} policy)",
            queue.len(),
            self.shuffler.policy()
        );

        let driver = PlaybackDriver::new(backend, &self.config.player, self.config.on_spawn_failure);
        let playback = driver.play_all(&queue);
        queue.release();

        Ok(SessionReport {
            scan,
            playback: playback?,
        })
    }
}
