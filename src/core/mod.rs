//! Core module - pure game logic with no I/O dependencies.
//!
//! Contains the board, the shape sequencer, piece geometry, the active piece,
//! and the match loop. The presentation layer only reads from these types
//! between ticks.

pub mod bag;
pub mod board;
pub mod game;
pub mod piece;
pub mod pieces;

pub use bag::ShapeBag;
pub use board::Board;
pub use game::Game;
pub use piece::Piece;
