//! Shuffler — in-place permutation of the path collection.
//!
//! Three policies:
//!
//! - `Classic`: for every index `i`, swap with `r` drawn from the whole
//!   range `[0, len)`. This is the historical behaviour and is slightly
//!   biased (n^n equally likely draw sequences over n! permutations).
//! - `Strict`: as `Classic`, but `r` is redrawn until `r != i`. A pass is
//!   `len` transpositions, so an even length can still come back in its
//!   original order (length 2 always does).
//! - `Uniform`: Fisher–Yates over the shrinking suffix `[i, len)`.
//!
//! The generator is seeded once when the `Shuffler` is built.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::PathCollection;

const ENTROPY_DEVICE: &str = "/dev/urandom";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShufflePolicy {
    #[default]
    Classic,
    Strict,
    Uniform,
}

impl FromStr for ShufflePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "strict" => Ok(Self::Strict),
            "uniform" => Ok(Self::Uniform),
            other => Err(format!("unknown shuffle policy '{other}' (classic, strict, uniform)")),
        }
    }
}

impl fmt::Display for ShufflePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Classic => "classic",
            Self::Strict => "strict",
            Self::Uniform => "uniform",
        })
    }
}

/// Where the shuffler's seed came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    EntropyDevice,
    Clock,
    Fixed,
}

/// Read one machine word from the entropy device, else use the clock.
pub fn entropy_seed() -> (u64, SeedSource) {
    match read_entropy_word() {
        Ok(seed) => (seed, SeedSource::EntropyDevice),
        Err(e) => {
            log::debug!("playrandom: {} unavailable ({}), seeding from clock", ENTROPY_DEVICE, e);
            (clock_seed(), SeedSource::Clock)
        }
    }
}

fn read_entropy_word() -> std::io::Result<u64> {
    let mut buf = [0u8; 8];
    File::open(ENTROPY_DEVICE)?.read_exact(&mut buf)?;
    Ok(u64::from_ne_bytes(buf))
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

pub struct Shuffler {
    rng: StdRng,
    policy: ShufflePolicy,
    source: SeedSource,
}

impl Shuffler {
    /// Seeded from [`entropy_seed`].
    pub fn from_entropy(policy: ShufflePolicy) -> Self {
        let (seed, source) = entropy_seed();
        log::debug!("playrandom: shuffle seed from {:?}", source);
        Self {
            rng: StdRng::seed_from_u64(seed),
            policy,
            source,
        }
    }

    /// Reproducible order for a given seed.
    pub fn with_seed(policy: ShufflePolicy, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            policy,
            source: SeedSource::Fixed,
        }
    }

    pub fn policy(&self) -> ShufflePolicy {
        self.policy
    }

    pub fn seed_source(&self) -> SeedSource {
        self.source
    }

    /// One shuffle pass. No-op for fewer than two entries.
    pub fn shuffle(&mut self, c: &mut PathCollection) {
        let len = c.len();
        if len < 2 {
            return;
        }

        for i in 0..len {
            let r = match self.policy {
                ShufflePolicy::Classic => self.rng.random_range(0..len),
                ShufflePolicy::Strict => loop {
                    let r = self.rng.random_range(0..len);
                    if r != i {
                        break r;
                    }
                },
                ShufflePolicy::Uniform => self.rng.random_range(i..len),
            };
            c.swap(i, r);
        }
    }
}
