use log::trace;

use crate::board::{Tile, TileSum, MAX_TILE};

/// Result of collapsing a single row toward index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapsedLine {
    pub line: Vec<Tile>,
    /// True iff `line` differs from the input.
    pub changed: bool,
    /// Increase of the line sum: every merge of two `v` tiles adds `v`.
    pub gain: TileSum,
}

/// Slides every tile toward index 0 and merges equal neighbours in a single
/// pass. A merged tile does not merge again in the same pass, so
/// `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`.
///
/// Two [`MAX_TILE`] tiles have nothing larger to become and stay side by side.
pub fn collapse_line(input: &[Tile]) -> CollapsedLine {
    let tiles: Vec<Tile> = input.iter().copied().filter(|&value| value != 0).collect();

    let mut line = Vec::with_capacity(input.len());
    let mut gain = 0;
    let mut index = 0;

    while index < tiles.len() {
        let value = tiles[index];

        if value < MAX_TILE && tiles.get(index + 1) == Some(&value) {
            line.push(value * 2);
            gain += TileSum::from(value);
            index += 2;
        } else {
            line.push(value);
            index += 1;
        }
    }

    line.resize(input.len(), 0);

    let changed = line.as_slice() != input;

    trace!("collapse {:?} -> {:?}", input, line);

    CollapsedLine {
        line,
        changed,
        gain,
    }
}
