//! Shape sequencer - 7-bag randomization.
//!
//! Each bag holds one of every piece kind, shuffled; draws empty the bag one
//! piece at a time and an empty bag is refilled and reshuffled before the
//! next draw. Every kind therefore appears exactly once per 7 draws and the
//! longest gap between repeats of one kind is 12.
//!
//! The bag is an explicit value owned by the match, seeded either from a
//! caller-provided `u32` (deterministic tests) or from the system clock.

use std::time::{SystemTime, UNIX_EPOCH};

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) using the Numerical Recipes
/// constants. Small, fast, and deterministic - all this engine needs.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // A zero state would produce a degenerate sequence start.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// 7-bag shape sequencer.
#[derive(Debug, Clone)]
pub struct ShapeBag {
    bag: ArrayVec<PieceKind, 7>,
    rng: SimpleRng,
}

impl ShapeBag {
    /// Create a bag with a known seed (deterministic sequence).
    pub fn new(seed: u32) -> Self {
        Self {
            bag: ArrayVec::new(),
            rng: SimpleRng::new(seed),
        }
    }

    /// Create a bag seeded from the system clock.
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
            .unwrap_or(1);
        Self::new(nanos)
    }

    /// Draw the next shape, refilling and reshuffling when the bag is empty.
    /// Never fails.
    pub fn draw(&mut self) -> PieceKind {
        if self.bag.is_empty() {
            self.bag.extend(PieceKind::ALL);
            self.rng.shuffle(&mut self.bag);
        }
        // Refill above guarantees a piece; order is already random so popping
        // from the tail is as good as any.
        self.bag.pop().unwrap_or(PieceKind::I)
    }

    /// Current RNG state, used to seed the successor session on restart.
    pub fn state(&self) -> u32 {
        self.rng.state()
    }

    #[cfg(test)]
    pub fn remaining(&self) -> usize {
        self.bag.len()
    }
}

impl Default for ShapeBag {
    fn default() -> Self {
        Self::new(1)
    }
}
