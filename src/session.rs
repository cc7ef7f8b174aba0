use enum_map::EnumMap;
use log::info;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use crate::board::{Board, Direction};
use crate::engine::{attempt_move, MoveOutcome};
use crate::spawn::random_initial_board;

/// One running game: the current board plus the random source that drives
/// it. Every move replaces the board with the engine's result.
pub struct Session {
    board: Board,
    rng: XorShiftRng,
    seed: u64,
    spawn_enabled: bool,
    moves: EnumMap<Direction, usize>,
}

impl Session {
    pub fn new(board: Board, seed: u64) -> Self {
        Self {
            board,
            rng: XorShiftRng::seed_from_u64(seed),
            seed,
            spawn_enabled: true,
            moves: EnumMap::default(),
        }
    }

    /// Starts from a random sparse board drawn from the session's own source.
    pub fn random(size: usize, seed: u64) -> Self {
        let mut rng = XorShiftRng::seed_from_u64(seed);
        let board = random_initial_board(&mut rng, size);

        info!("Starting {0}x{0} board with seed {1}", size, seed);

        Self {
            board,
            rng,
            seed,
            spawn_enabled: true,
            moves: EnumMap::default(),
        }
    }

    pub fn with_spawn(mut self, enabled: bool) -> Self {
        self.spawn_enabled = enabled;
        self
    }

    /// The seed this session was started with; replays the same game.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves that changed the board, per direction.
    pub fn moves(&self) -> &EnumMap<Direction, usize> {
        &self.moves
    }

    pub fn total_moves(&self) -> usize {
        self.moves.values().sum()
    }

    pub fn attempt_move(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = attempt_move(&self.board, direction, &mut self.rng, self.spawn_enabled);

        if outcome.moved {
            self.moves[direction] += 1;
            self.board = outcome.board.clone();
        }

        outcome
    }
}
