//! RNG module - uniform random piece selection
//!
//! Every draw picks one of the seven kinds independently with equal
//! probability; there is no bag fairness. The supplier behind the draws is a
//! trait so the game can run against a seeded generator in production and a
//! scripted sequence in tests.

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
        // Seed 0 is folded onto 1 so both name a valid stream
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG step with Numerical Recipes constants, modulus 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Supplier of the next piece kind
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

/// Seeded uniform source - all seven kinds equally likely, independent draws
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: SimpleRng,
}

impl RandomSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl PieceSource for RandomSource {
    fn next_kind(&mut self) -> PieceKind {
        let index = self.rng.next_range(PieceKind::ALL.len() as u32);
        PieceKind::ALL[index as usize]
    }
}

/// Fixed kind sequence, repeating once exhausted - for deterministic tests
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    kinds: Vec<PieceKind>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(kinds: Vec<PieceKind>) -> Self {
        assert!(!kinds.is_empty(), "scripted source needs at least one kind");
        Self { kinds, next: 0 }
    }
}

impl PieceSource for ScriptedSource {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.next % self.kinds.len()];
        self.next += 1;
        kind
    }
}
