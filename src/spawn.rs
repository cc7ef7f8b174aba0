use log::debug;

use crate::board::{Board, Direction, Tile};
use crate::random::RandomSource;
use crate::transform::{inverse_transform, original_position, transform};

/// Values a new tile can take, drawn uniformly.
pub const SPAWN_VALUES: [Tile; 2] = [2, 4];

/// Odds that a cell of a fresh board starts as a 2: `OCCUPIED_OF` out of
/// `OCCUPANCY_DRAWS`.
const OCCUPIED_OF: usize = 3;
const OCCUPANCY_DRAWS: usize = 20;
const INITIAL_TILE: Tile = 2;

/// A tile placed by the spawn step, in original board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawned {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// Places one tile in a random empty cell of the last column of a board that
/// is already oriented for a left collapse. Returns the row used and the
/// value written, or `None` when that column is full.
///
/// Only the last column is considered, even if other cells are empty.
pub(crate) fn spawn_oriented<R>(board: &mut Board, rng: &mut R) -> Option<(usize, Tile)>
where
    R: RandomSource + ?Sized,
{
    let col = board.size() - 1;
    let empty: Vec<usize> = (0..board.size())
        .filter(|&row| board.get(row, col) == Some(0))
        .collect();

    if empty.is_empty() {
        return None;
    }

    let row = *rng.choose(&empty);
    let value = *rng.choose(&SPAWN_VALUES);

    board.set(row, col, value);

    Some((row, value))
}

/// Spawns one tile on the edge opposite to `direction` of a board that has
/// just been collapsed in that direction: the right edge after a left move,
/// the bottom edge after an up move, and so on.
pub fn spawn_tile<R>(board: &Board, direction: Direction, rng: &mut R) -> (Board, Option<Spawned>)
where
    R: RandomSource + ?Sized,
{
    let mut oriented = transform(direction, board);

    let spawned = spawn_oriented(&mut oriented, rng).map(|(row, value)| {
        let (row, col) = original_position(direction, board.size(), row, board.size() - 1);

        Spawned { row, col, value }
    });

    match spawned {
        Some(tile) => debug!("spawned {} at ({}, {})", tile.value, tile.row, tile.col),
        None => debug!("no empty cell on the {} leading edge", direction),
    }

    (inverse_transform(direction, &oriented), spawned)
}

/// A sparse board of 2s, about 15% occupied, never entirely empty.
pub fn random_initial_board<R>(rng: &mut R, size: usize) -> Board
where
    R: RandomSource + ?Sized,
{
    loop {
        let board = Board::from_fn(size, &mut |_, _| {
            if rng.pick(OCCUPANCY_DRAWS) < OCCUPIED_OF {
                INITIAL_TILE
            } else {
                0
            }
        });

        if !board.is_empty() {
            debug!("initial board with {} tiles", size * size - board.empty_count());

            return board;
        }
    }
}
