//! Process backend — runs the external player and waits for it.

use std::path::Path;
use std::process::{Command, Stdio};

use super::{PlayOutcome, PlayerBackend};
use crate::error::PlaybackError;
use crate::models::PlayerSpec;

/// Spawns `player.program` with an explicit argv (no shell) and blocks
/// until it exits.
///
/// The child keeps the terminal's stdin so playback stays interactive;
/// its stdout and stderr are discarded.
pub struct ProcessBackend;

impl PlayerBackend for ProcessBackend {
    fn play(&self, player: &PlayerSpec, file: &Path) -> Result<PlayOutcome, PlaybackError> {
        println!("Playing '{}'", file.display());

        let spawn_failed = |source| PlaybackError::SpawnFailed {
            program: player.program.clone(),
            path: file.to_path_buf(),
            source,
        };

        let mut child = Command::new(&player.program)
            .args(player.argv(file))
            .stdin(Stdio::inherit())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(spawn_failed)?;

        log::debug!("playrandom: spawned {} (pid {})", player.program, child.id());

        let status = child.wait().map_err(spawn_failed)?;
        let outcome = match status.code() {
            Some(0) => PlayOutcome::Completed,
            Some(code) => PlayOutcome::ExitedWith(code),
            None => PlayOutcome::Killed,
        };
        log::debug!("playrandom: {} finished: {:?}", player.program, outcome);
        Ok(outcome)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn zero_exit_is_completed() {
        let spec = PlayerSpec::new("true", &[]);
        let outcome = ProcessBackend.play(&spec, Path::new("ignored.mp4")).unwrap();
        assert_eq!(outcome, PlayOutcome::Completed);
    }

    #[test]
    fn non_zero_exit_is_reported_not_failed() {
        let spec = PlayerSpec::new("false", &[]);
        let outcome = ProcessBackend.play(&spec, Path::new("ignored.mp4")).unwrap();
        assert_eq!(outcome, PlayOutcome::ExitedWith(1));
    }

    #[test]
    fn path_is_passed_verbatim_without_shell() {
        // `sh -c 'test -e "$0"'` receives the file path as $0 exactly.
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("it's; $(a) b.mkv");
        std::fs::write(&file, b"").unwrap();

        let spec = PlayerSpec::new("sh", &["-c", "test -e \"$0\""]);
        assert_eq!(ProcessBackend.play(&spec, &file).unwrap(), PlayOutcome::Completed);
    }

    #[test]
    fn missing_program_is_spawn_failure() {
        let spec = PlayerSpec::new("playrandom-no-such-player-binary", &[]);
        let err = ProcessBackend.play(&spec, Path::new("x.mkv")).unwrap_err();
        let PlaybackError::SpawnFailed { program, path, source } = err;
        assert_eq!(program, "playrandom-no-such-player-binary");
        assert_eq!(path, Path::new("x.mkv"));
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
    }
}
