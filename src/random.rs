use core::{fmt, num::ParseIntError, str::FromStr};
use std::{
    error,
    sync::atomic::{AtomicU64, Ordering},
};

const MULTIPLIER: u64 = 6364136223846793005;

/// Source of distinct stream identifiers such that every [`Pcg::new`] in the
/// process draws from its own sequence.
static STREAMS: AtomicU64 = AtomicU64::new(0);

/// A permuted congruential pseudo-random generator with 64 bits of state and
/// 32 bits of output per step.
///
/// The `stream` selects one of 2^63 statistically independent sequences and
/// the `state` is the current position in that sequence, so a captured
/// [`Seed`] replays the exact same draws on any machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pcg {
    stream: u64,
    state: u64,
}

/// A capture of a [`Pcg`]'s position that formats to a compact token
/// (stream in hexadecimal followed by exactly 16 hexadecimal state digits)
/// and parses back without loss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Seed {
    stream: u64,
    state: u64,
}

/// Produced when parsing a malformed seed token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseSeedError {
    /// The token is shorter than a stream digit followed by 16 state digits.
    Incomplete,
    /// The token contains a non-hexadecimal digit.
    Digit(ParseIntError),
}

impl Pcg {
    /// A generator on a fresh stream, positioned by entropy.
    pub fn new() -> Self {
        Self {
            stream: STREAMS.fetch_add(1, Ordering::Relaxed),
            state: fastrand::u64(..),
        }
    }

    /// The generator that replays the draws captured by `seed`.
    pub const fn from_seed(seed: Seed) -> Self {
        Self {
            stream: seed.stream,
            state: seed.state,
        }
    }

    /// Captures the current position; drawing from [`Pcg::from_seed`] of the
    /// capture yields the same values this generator will yield.
    pub const fn seed(&self) -> Seed {
        Seed {
            stream: self.stream,
            state: self.state,
        }
    }

    pub fn next(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(self.stream << 1 | 1);
        let permuted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        permuted.rotate_right((self.state >> 59) as u32)
    }

    pub fn next64(&mut self) -> u64 {
        (self.next() as u64) << 32 | self.next() as u64
    }

    /// A uniform draw in `0..bound` with the modulo bias rejected.
    ///
    /// Raw draws below `2^32 mod bound` are discarded so that every residue
    /// is reachable from the same number of raw values.
    pub fn next_below(&mut self, bound: u32) -> u32 {
        assert!(bound > 0, "draw bound must be non-zero");
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let raw = self.next();
            if raw >= threshold {
                break raw % bound;
            }
        }
    }

    /// A uniform draw in `0..bound` with the modulo bias rejected.
    pub fn next64_below(&mut self, bound: u64) -> u64 {
        assert!(bound > 0, "draw bound must be non-zero");
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let raw = self.next64();
            if raw >= threshold {
                break raw % bound;
            }
        }
    }
}

impl Default for Pcg {
    fn default() -> Self {
        Self::new()
    }
}

impl Seed {
    pub const fn new(stream: u64, state: u64) -> Self {
        Self { stream, state }
    }

    pub const fn stream(&self) -> u64 {
        self.stream
    }

    pub const fn state(&self) -> u64 {
        self.state
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:x}{:016x}", self.stream, self.state)
    }
}

impl FromStr for Seed {
    type Err = ParseSeedError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        // The state is the last 16 digits; everything before is the stream.
        let index = token
            .char_indices()
            .rev()
            .nth(15)
            .map(|(index, _)| index)
            .ok_or(ParseSeedError::Incomplete)?;
        let (stream, state) = token.split_at(index);
        if stream.is_empty() {
            return Err(ParseSeedError::Incomplete);
        }
        Ok(Self {
            stream: u64::from_str_radix(stream, 16).map_err(ParseSeedError::Digit)?,
            state: u64::from_str_radix(state, 16).map_err(ParseSeedError::Digit)?,
        })
    }
}

impl fmt::Display for ParseSeedError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseSeedError::Incomplete => {
                write!(f, "seed token requires a stream digit and 16 state digits")
            }
            ParseSeedError::Digit(error) => write!(f, "seed token is not hexadecimal: {error}"),
        }
    }
}

impl error::Error for ParseSeedError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ParseSeedError::Incomplete => None,
            ParseSeedError::Digit(error) => Some(error),
        }
    }
}
