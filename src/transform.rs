//! Every direction is reduced to a left collapse: the board is oriented so
//! the requested direction points toward column 0, collapsed, then oriented
//! back.

use log::trace;

use crate::board::{Board, Direction, Tile};

/// Reverses every row.
pub fn mirror(board: &Board) -> Board {
    let last = board.size() - 1;

    Board::from_fn(board.size(), &mut |row, col| tile_at(board, row, last - col))
}

/// Quarter turn clockwise: the bottom row becomes the left column.
pub fn rotate_clockwise(board: &Board) -> Board {
    let last = board.size() - 1;

    Board::from_fn(board.size(), &mut |row, col| tile_at(board, last - col, row))
}

/// Quarter turn counter-clockwise: the top row becomes the left column.
pub fn rotate_counter_clockwise(board: &Board) -> Board {
    let last = board.size() - 1;

    Board::from_fn(board.size(), &mut |row, col| tile_at(board, col, last - row))
}

/// Orients `board` so that moving in `direction` is a left collapse.
pub fn transform(direction: Direction, board: &Board) -> Board {
    trace!("transform {}", direction);

    match direction {
        Direction::Left => board.clone(),
        Direction::Right => mirror(board),
        Direction::Up => rotate_counter_clockwise(board),
        Direction::Down => rotate_clockwise(board),
    }
}

/// Undoes [`transform`] for the same direction.
pub fn inverse_transform(direction: Direction, board: &Board) -> Board {
    trace!("inverse transform {}", direction);

    match direction {
        Direction::Left => board.clone(),
        Direction::Right => mirror(board),
        Direction::Up => rotate_clockwise(board),
        Direction::Down => rotate_counter_clockwise(board),
    }
}

/// Maps a cell of the oriented board back to original coordinates.
pub fn original_position(direction: Direction, size: usize, row: usize, col: usize) -> (usize, usize) {
    let last = size - 1;

    match direction {
        Direction::Left => (row, col),
        Direction::Right => (row, last - col),
        Direction::Up => (col, last - row),
        Direction::Down => (last - col, row),
    }
}

fn tile_at(board: &Board, row: usize, col: usize) -> Tile {
    board.row(row)[col]
}
