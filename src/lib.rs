//! Board-transition engine for a tile-merging sliding puzzle.
//!
//! Every move is expressed as a left collapse of a re-oriented board
//! ([`transform`]), followed by an optional spawn of one new tile on the edge
//! the tiles moved away from ([`spawn`]). Randomness is always passed in
//! through [`random::RandomSource`], so any move can be replayed from a seed
//! or a scripted sequence.

pub mod board;
pub mod engine;
pub mod line;
pub mod random;
pub mod session;
pub mod spawn;
pub mod transform;

#[cfg(feature = "wasm")]
mod wasm;

pub use board::{Board, BoardError, Direction, Tile, TileSum};
pub use engine::{attempt_move, MoveOutcome};
pub use random::{RandomSource, ScriptedSource};
pub use session::Session;
pub use spawn::{random_initial_board, Spawned};
