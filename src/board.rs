use core::fmt;
use core::str::FromStr;

use enum_map::Enum;

/// A tile value: 0 for an empty cell, otherwise a power of two from 2 up to
/// [`MAX_TILE`].
pub type Tile = u64;

/// Sum of many tiles. Wider than [`Tile`] so a board full of top tiles still
/// adds up.
pub type TileSum = u128;

/// The largest power of two a [`Tile`] can hold. Two of these never merge.
pub const MAX_TILE: Tile = 1 << (Tile::BITS - 1);

pub const DEFAULT_SIZE: usize = 4;
pub const MIN_SIZE: usize = 2;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Enum)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "u" | "up" => Ok(Direction::Up),
            "d" | "down" => Ok(Direction::Down),
            "l" | "left" => Ok(Direction::Left),
            "r" | "right" => Ok(Direction::Right),
            _ => Err(format!("invalid direction: {}", s)),
        }
    }
}

/// Returns true for the values a cell may hold.
pub fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    TooSmall(usize),
    NotSquare { row: usize, len: usize, size: usize },
    InvalidTile { row: usize, col: usize, value: Tile },
    Parse(String),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::TooSmall(size) => {
                write!(f, "board must be at least {0}x{0}, got {1}x{1}", MIN_SIZE, size)
            }
            BoardError::NotSquare { row, len, size } => write!(
                f,
                "row {} has {} cells but the board has {} rows",
                row, len, size
            ),
            BoardError::InvalidTile { row, col, value } => write!(
                f,
                "cell ({}, {}) holds {}, expected 0 or a power of two",
                row, col, value
            ),
            BoardError::Parse(message) => write!(f, "invalid board literal: {}", message),
        }
    }
}

impl std::error::Error for BoardError {}

/// Square grid of tiles stored row-major. Row 0 is the top edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Vec<Vec<Tile>>", try_from = "Vec<Vec<Tile>>")
)]
pub struct Board {
    cells: Vec<Tile>,
    size: usize,
}

pub struct BoardIter<'a> {
    board: &'a Board,
    pos: usize,
}

impl Board {
    /// An empty board.
    ///
    /// Panics if `size` is below [`MIN_SIZE`].
    pub fn new(size: usize) -> Self {
        Self::from_fn(size, &mut |_, _| 0)
    }

    /// Builds a board by calling `initializer(row, col)` for every cell in
    /// row-major order.
    ///
    /// Panics if `size` is below [`MIN_SIZE`] or if the initializer produces
    /// a value that is neither 0 nor a power of two.
    pub fn from_fn<F: FnMut(usize, usize) -> Tile>(size: usize, initializer: &mut F) -> Self {
        assert!(
            size >= MIN_SIZE,
            "board must be at least {0}x{0}, got {1}x{1}",
            MIN_SIZE,
            size
        );

        let mut cells = Vec::with_capacity(size * size);

        for row in 0..size {
            for col in 0..size {
                let value = initializer(row, col);

                assert!(
                    is_valid_tile(value),
                    "cell ({}, {}) holds {}, expected 0 or a power of two",
                    row,
                    col,
                    value
                );

                cells.push(value);
            }
        }

        Self { cells, size }
    }

    /// Validating constructor for literal grids.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, BoardError> {
        let size = rows.len();

        if size < MIN_SIZE {
            return Err(BoardError::TooSmall(size));
        }

        let mut cells = Vec::with_capacity(size * size);

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: values.len(),
                    size,
                });
            }

            for (col, value) in values.into_iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(BoardError::InvalidTile { row, col, value });
                }

                cells.push(value);
            }
        }

        Ok(Self { cells, size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.size || col >= self.size {
            return None;
        }

        self.cells.get(col + (row * self.size)).copied()
    }

    /// Writes one cell. Callers guarantee `value` is a valid tile.
    pub(crate) fn set(&mut self, row: usize, col: usize, value: Tile) {
        debug_assert!(is_valid_tile(value));

        let index = col + (row * self.size);

        self.cells[index] = value;
    }

    pub fn row(&self, row: usize) -> &[Tile] {
        let start = row * self.size;

        &self.cells[start..start + self.size]
    }

    /// The grid as nested rows, for rendering and serialization.
    pub fn rows(&self) -> Vec<Vec<Tile>> {
        self.cells.chunks(self.size).map(<[Tile]>::to_vec).collect()
    }

    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    pub fn iter(&self) -> BoardIter<'_> {
        BoardIter {
            board: self,
            pos: 0,
        }
    }

    pub fn sum(&self) -> TileSum {
        self.cells.iter().map(|&value| TileSum::from(value)).sum()
    }

    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&value| value == 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&value| value == 0)
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = (usize, usize, Tile);
    type IntoIter = BoardIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Iterator for BoardIter<'a> {
    type Item = (usize, usize, Tile);

    fn next(&mut self) -> Option<Self::Item> {
        let value = *self.board.cells.get(self.pos)?;
        let row = self.pos / self.board.size;
        let col = self.pos % self.board.size;

        self.pos += 1;

        Some((row, col, value))
    }
}

impl From<Board> for Vec<Vec<Tile>> {
    fn from(board: Board) -> Self {
        board.rows()
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self, Self::Error> {
        Board::from_rows(rows)
    }
}

/// Parses `0,0,0,2/0,4,0,2/...`: rows separated by `/` or newlines, cells by
/// commas.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split(|c: char| c == '/' || c == '\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.split(',')
                    .map(str::trim)
                    .map(|raw| {
                        raw.parse::<Tile>()
                            .map_err(|_| BoardError::Parse(format!("invalid tile: {:?}", raw)))
                    })
                    .collect::<Result<Vec<Tile>, BoardError>>()
            })
            .collect::<Result<Vec<Vec<Tile>>, BoardError>>()?;

        Board::from_rows(rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().to_string().len().max(1);

        for row in 0..self.size {
            let line = self
                .row(row)
                .iter()
                .map(|&value| match value {
                    0 => format!("{:>width$}", ".", width = width),
                    _ => format!("{:>width$}", value, width = width),
                })
                .collect::<Vec<_>>()
                .join(" ");

            writeln!(f, "{}", line)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_literal_rows() {
        let board: Board = "0,0,0,2/0,4,0,2/0,0,8,0/0,0,0,2".parse().unwrap();

        assert_eq!(board.size(), 4);
        assert_eq!(board.get(1, 1), Some(4));
        assert_eq!(board.get(2, 2), Some(8));
        assert_eq!(board.get(4, 0), None);
        assert_eq!(board.row(3), &[0, 0, 0, 2]);
        assert_eq!(board.sum(), 18);
    }

    #[test]
    fn rejects_malformed_grids() {
        assert_eq!(Board::from_rows(vec![vec![2]]), Err(BoardError::TooSmall(1)));
        assert_eq!(
            Board::from_rows(vec![vec![0, 2], vec![0]]),
            Err(BoardError::NotSquare { row: 1, len: 1, size: 2 })
        );
        assert_eq!(
            Board::from_rows(vec![vec![0, 3], vec![0, 0]]),
            Err(BoardError::InvalidTile { row: 0, col: 1, value: 3 })
        );
        assert_eq!(
            Board::from_rows(vec![vec![1, 0], vec![0, 0]]),
            Err(BoardError::InvalidTile { row: 0, col: 0, value: 1 })
        );
        assert!(matches!("0,x/0,0".parse::<Board>(), Err(BoardError::Parse(_))));
    }

    #[test]
    #[should_panic]
    fn new_rejects_single_cell_board() {
        Board::new(1);
    }

    #[test]
    fn iterates_row_major() {
        let board = Board::from_fn(2, &mut |row, col| if row == 1 && col == 0 { 4 } else { 0 });
        let cells: Vec<_> = board.iter().collect();

        assert_eq!(cells, vec![(0, 0, 0), (0, 1, 0), (1, 0, 4), (1, 1, 0)]);
        assert_eq!(board.empty_count(), 3);
        assert_eq!(board.max_tile(), 4);
    }

    #[test]
    fn top_tiles_are_valid_and_sum_without_overflow() {
        let board = Board::from_fn(2, &mut |_, _| MAX_TILE);

        assert!(is_valid_tile(MAX_TILE));
        assert!(!is_valid_tile(MAX_TILE + 1));
        assert_eq!(board.sum(), 4 * TileSum::from(MAX_TILE));
        assert_eq!(
            format!("{0},{0}/{0},{0}", MAX_TILE).parse::<Board>(),
            Ok(board)
        );
    }

    #[test]
    fn displays_aligned_rows() {
        let board: Board = "0,16/2,0".parse().unwrap();

        assert_eq!(board.to_string(), " . 16\n 2  .\n");
    }

    #[test]
    fn parses_directions() {
        assert_eq!("L".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!(" down ".parse::<Direction>(), Ok(Direction::Down));
        assert!("north".parse::<Direction>().is_err());
    }
}
