//! Gridfall: a terminal falling-block puzzle.
//!
//! The simulation engine lives in [`core`] and is pure: it consumes discrete
//! intents plus a fixed tick and exposes read-only queries. Everything the
//! terminal needs (key mapping, rendering) sits in [`input`] and [`term`].

pub mod core;
pub mod input;
pub mod term;
pub mod types;
