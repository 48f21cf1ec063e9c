//! RNG module - piece sources for the next slot
//!
//! The engine asks a [`PieceSource`] for raw draws and applies the one-shot
//! anti-repeat rule itself. Two sources are provided:
//!
//! - [`RandomPieces`]: seedable LCG, uniform or "rounded float" distribution
//! - [`ScriptedPieces`]: replays a fixed cyclic sequence (tests, replays)

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Generate a float in the closed interval [0, 1]
    pub fn next_unit(&mut self) -> f64 {
        self.next_u32() as f64 / u32::MAX as f64
    }

    /// Current internal state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Where the next-slot draws come from.
pub trait PieceSource: Send {
    /// One raw draw; the engine handles repeat avoidance.
    fn draw(&mut self) -> PieceKind;
}

/// How [`RandomPieces`] maps random numbers onto the seven kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Distribution {
    /// True uniform integer in [0, 6].
    #[default]
    Uniform,
    /// `round(unit_float * 6)`: the two end kinds (O and J) come up half as often.
    Rounded,
}

impl Distribution {
    /// Parse from a config string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "uniform" => Some(Distribution::Uniform),
            "rounded" | "classic" => Some(Distribution::Rounded),
            _ => None,
        }
    }
}

/// Seeded random piece source.
#[derive(Debug, Clone)]
pub struct RandomPieces {
    rng: SimpleRng,
    distribution: Distribution,
}

impl RandomPieces {
    pub fn new(seed: u32) -> Self {
        Self::with_distribution(seed, Distribution::Uniform)
    }

    pub fn with_distribution(seed: u32, distribution: Distribution) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            distribution,
        }
    }

    pub fn distribution(&self) -> Distribution {
        self.distribution
    }

    /// Get the current RNG state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl PieceSource for RandomPieces {
    fn draw(&mut self) -> PieceKind {
        let last = PieceKind::ALL.len() - 1;
        let index = match self.distribution {
            Distribution::Uniform => self.rng.next_range(PieceKind::ALL.len() as u32) as usize,
            Distribution::Rounded => {
                let index = (self.rng.next_unit() * last as f64).round() as usize;
                index.min(last)
            }
        };
        PieceKind::ALL[index]
    }
}

impl Default for RandomPieces {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed sequence, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedPieces {
    sequence: Vec<PieceKind>,
    pos: usize,
}

impl ScriptedPieces {
    /// Panics if `sequence` is empty.
    pub fn new(sequence: impl Into<Vec<PieceKind>>) -> Self {
        let sequence = sequence.into();
        assert!(!sequence.is_empty(), "scripted sequence must not be empty");
        Self { sequence, pos: 0 }
    }

    /// Draws handed out so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl PieceSource for ScriptedPieces {
    fn draw(&mut self) -> PieceKind {
        let kind = self.sequence[self.pos % self.sequence.len()];
        self.pos += 1;
        kind
    }
}
