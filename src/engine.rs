use log::debug;

use crate::board::{Board, Direction, TileSum};
use crate::line::collapse_line;
use crate::random::{RandomSource, ScriptedSource};
use crate::spawn::{spawn_oriented, Spawned};
use crate::transform::{inverse_transform, original_position, transform};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    /// True iff `board` differs from the board the move started from.
    pub moved: bool,
    /// Sum increase produced by merges, before any spawn.
    pub merged: TileSum,
    pub spawned: Option<Spawned>,
}

/// Slides and merges every line toward `direction`, then, if anything moved
/// and `spawn_enabled` is set, places one new tile on the edge the tiles
/// moved away from.
///
/// A move that changes nothing is a normal outcome with `moved == false` and
/// the input board returned as is.
pub fn attempt_move<R>(board: &Board, direction: Direction, rng: &mut R, spawn_enabled: bool) -> MoveOutcome
where
    R: RandomSource + ?Sized,
{
    let size = board.size();
    let oriented = transform(direction, board);

    let lines: Vec<_> = (0..size).map(|row| collapse_line(oriented.row(row))).collect();
    let merged: TileSum = lines.iter().map(|collapsed| collapsed.gain).sum();

    let mut collapsed = Board::from_fn(size, &mut |row, col| lines[row].line[col]);

    let spawned = if spawn_enabled && collapsed != oriented {
        spawn_oriented(&mut collapsed, rng).map(|(row, value)| {
            let (row, col) = original_position(direction, size, row, size - 1);

            Spawned { row, col, value }
        })
    } else {
        None
    };

    let result = inverse_transform(direction, &collapsed);
    let moved = result != *board;

    debug!(
        "move {}: moved={} merged={} spawned={:?}",
        direction, moved, merged, spawned
    );

    MoveOutcome {
        board: result,
        moved,
        merged,
        spawned,
    }
}

impl Board {
    /// The move without the spawn step. Needs no random source.
    pub fn shifted(&self, direction: Direction) -> MoveOutcome {
        attempt_move(self, direction, &mut ScriptedSource::default(), false)
    }

    /// True if moving in `direction` would change the board.
    pub fn can_move(&self, direction: Direction) -> bool {
        self.shifted(direction).moved
    }
}
