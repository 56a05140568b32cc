//! playrandom — play every video under the given directories in random order.
//!
//!   playrandom                      Scan `.` recursively, shuffle, play
//!   playrandom ~/Videos /mnt/tv     Several roots, one shared queue
//!   playrandom --list ~/Videos      Print the shuffled queue instead
//!   playrandom --shuffle uniform    Pick the shuffle policy

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use playrandom_core::{
    Config, Engine, ListBackend, PlayerBackend, ProcessBackend, ShufflePolicy, Shuffler,
    SpawnFailurePolicy,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directories to scan (default: current directory)
    roots: Vec<PathBuf>,

    /// JSON config file (else $PLAYRANDOM_CONFIG, else ~/.config/playrandom/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Player executable, looked up on PATH
    #[arg(long)]
    player: Option<String>,

    /// Player flag (repeatable); replaces the default flags
    #[arg(long = "player-arg", allow_hyphen_values = true)]
    player_args: Vec<String>,

    /// Only scan the top level of each root
    #[arg(long)]
    no_recurse: bool,

    /// Shuffle policy: classic, strict or uniform.
    /// strict on an even number of files can return the original order
    #[arg(long)]
    shuffle: Option<ShufflePolicy>,

    /// Stop at the first file the player can't be launched for
    #[arg(long)]
    abort_on_spawn_failure: bool,

    /// Print the shuffled queue instead of playing it
    #[arg(long)]
    list: bool,

    /// Fixed shuffle seed
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(player) = &self.player {
            config.player.program = player.clone();
        }
        if !self.player_args.is_empty() {
            config.player.args = self.player_args.clone();
        }
        if self.no_recurse {
            config.recurse = false;
        }
        if let Some(policy) = self.shuffle {
            config.shuffle = policy;
        }
        if self.abort_on_spawn_failure {
            config.on_spawn_failure = SpawnFailurePolicy::Abort;
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("playrandom: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> playrandom_core::error::Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    config.validate()?;

    let mut engine = match cli.seed {
        Some(seed) => {
            let shuffler = Shuffler::with_seed(config.shuffle, seed);
            Engine::with_shuffler(config, shuffler)
        }
        None => Engine::new(config),
    };

    let backend: &dyn PlayerBackend = if cli.list { &ListBackend } else { &ProcessBackend };
    let report = engine.run(cli.roots.as_slice(), backend)?;

    log::info!(
        "playrandom: played {} of {} ({} unclean exits, {} launch failures, {} unreadable roots)",
        report.playback.played,
        report.scan.total(),
        report.playback.unclean_exits,
        report.playback.spawn_failures,
        report.scan.unreadable.len(),
    );
    Ok(())
}
