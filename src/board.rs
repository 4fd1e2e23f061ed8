//! Board state: a square grid of cells stored in one flat row-major buffer.
//!
//! All access goes through [`Board`]'s accessors, which check coordinates
//! and return [`BoardError`] instead of indexing out of range.

use std::fmt;

use thiserror::Error;

use crate::constants::{DELTA, EMPTY_CHAR, N};

/// A player, identified by the single character drawn on its stones.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Player(pub char);

impl Player {
    pub fn tag(self) -> char {
        self.0
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contents of a single point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Stone(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Owner of the stone on this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Stone(p) => Some(p),
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => EMPTY_CHAR,
            Cell::Stone(p) => p.tag(),
        }
    }
}

/// (row, col), origin at the top-left.
pub type Point = (usize, usize);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("point ({row}, {col}) is outside the {size}x{size} board")]
    OutOfRange { row: usize, col: usize, size: usize },
    #[error("point ({row}, {col}) is already occupied by {owner}")]
    Occupied { row: usize, col: usize, owner: Player },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(N)
    }
}

impl Board {
    /// Allocate an all-empty `size` x `size` board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_range(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    fn idx(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if !self.in_range(row, col) {
            return Err(BoardError::OutOfRange {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }

    /// True iff the point is on the board and holds no stone.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Ok(Cell::Empty))
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        let i = self.idx(row, col)?;
        Ok(self.cells[i])
    }

    /// Put `player`'s stone on an empty point. The grid is unchanged on error.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), BoardError> {
        let i = self.idx(row, col)?;
        if let Cell::Stone(owner) = self.cells[i] {
            return Err(BoardError::Occupied { row, col, owner });
        }
        self.cells[i] = Cell::Stone(player);
        tracing::trace!(row, col, player = %player, "stone placed");
        Ok(())
    }

    /// Clear a point. Removing from an empty point is a no-op.
    pub fn remove(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        let i = self.idx(row, col)?;
        self.cells[i] = Cell::Empty;
        Ok(())
    }

    /// Clear a point the caller already knows is on the board.
    pub(crate) fn clear_point(&mut self, (row, col): Point) {
        debug_assert!(self.in_range(row, col));
        self.cells[row * self.size + col] = Cell::Empty;
    }

    /// Reset every point to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// On-board orthogonal neighbors of a point.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = Point> + '_ {
        DELTA.into_iter().filter_map(move |(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            self.in_range(r, c).then_some((r, c))
        })
    }

    /// All points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let size = self.size;
        (0..size).flat_map(move |r| (0..size).map(move |c| (r, c)))
    }

    pub fn stone_count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == Cell::Stone(player))
            .count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Each cell is drawn as "glyph " so it sits under its column digit.
        let label = (self.size.max(1) - 1).to_string().len();
        write!(f, "{:label$}  ", "")?;
        let header: Vec<String> = (0..self.size).map(|col| (col % 10).to_string()).collect();
        writeln!(f, "{}", header.join(" "))?;
        let border = "-".repeat((2 * self.size).saturating_sub(1));
        writeln!(f, "{:label$} +{border}+", "")?;
        for row in 0..self.size {
            write!(f, "{row:>label$} |")?;
            for cell in &self.cells[row * self.size..(row + 1) * self.size] {
                write!(f, "{} ", cell.glyph())?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{:label$} +{border}+", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Player = Player('X');
    const O: Player = Player('O');

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(9);
        assert_eq!(board.size(), 9);
        assert_eq!(board.empty_count(), 81);
        assert!(board.points().all(|(r, c)| board.is_empty(r, c)));
    }

    #[test]
    fn test_is_empty_out_of_range() {
        let board = Board::new(9);
        assert!(!board.is_empty(9, 0));
        assert!(!board.is_empty(0, 9));
        assert!(!board.is_empty(usize::MAX, 3));
    }

    #[test]
    fn test_place_and_get() {
        let mut board = Board::new(9);
        board.place(4, 4, X).unwrap();
        assert_eq!(board.get(4, 4), Ok(Cell::Stone(X)));
        assert!(!board.is_empty(4, 4));
        assert_eq!(board.stone_count(X), 1);
    }

    #[test]
    fn test_place_occupied_leaves_grid_untouched() {
        let mut board = Board::new(9);
        board.place(2, 3, X).unwrap();
        let before = board.clone();
        let err = board.place(2, 3, O).unwrap_err();
        assert_eq!(
            err,
            BoardError::Occupied {
                row: 2,
                col: 3,
                owner: X
            }
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_range_errors() {
        let mut board = Board::new(9);
        let oob = BoardError::OutOfRange {
            row: 9,
            col: 0,
            size: 9,
        };
        assert_eq!(board.get(9, 0), Err(oob.clone()));
        assert_eq!(board.place(9, 0, X), Err(oob.clone()));
        assert_eq!(board.remove(9, 0), Err(oob));
        assert_eq!(board.empty_count(), 81);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut board = Board::new(9);
        board.place(0, 0, O).unwrap();
        board.remove(0, 0).unwrap();
        assert!(board.is_empty(0, 0));
        board.remove(0, 0).unwrap();
        assert!(board.is_empty(0, 0));
    }

    #[test]
    fn test_neighbors_corner_edge_center() {
        let board = Board::new(9);
        let corner: Vec<_> = board.neighbors(0, 0).collect();
        assert_eq!(corner, vec![(1, 0), (0, 1)]);
        assert_eq!(board.neighbors(0, 4).count(), 3);
        assert_eq!(board.neighbors(4, 4).count(), 4);
        let far: Vec<_> = board.neighbors(8, 8).collect();
        assert_eq!(far, vec![(7, 8), (8, 7)]);
    }

    #[test]
    fn test_points_row_major() {
        let board = Board::new(3);
        let pts: Vec<_> = board.points().collect();
        assert_eq!(pts.len(), 9);
        assert_eq!(pts[0], (0, 0));
        assert_eq!(pts[1], (0, 1));
        assert_eq!(pts[3], (1, 0));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3);
        board.place(1, 2, X).unwrap();
        let s = board.to_string();
        let lines: Vec<_> = s.lines().collect();
        assert_eq!(lines[0], "   0 1 2");
        assert_eq!(lines[1], "  +-----+");
        assert_eq!(lines[2], "0 |. . . |");
        assert_eq!(lines[3], "1 |. . X |");
        assert_eq!(lines[5], "  +-----+");
    }

    #[test]
    fn test_display_stones_sit_under_column_labels() {
        for size in [3, 9, 13] {
            let mut board = Board::new(size);
            for col in 0..size {
                board.place(col, col, X).unwrap();
            }
            let s = board.to_string();
            let lines: Vec<_> = s.lines().collect();
            let header: Vec<char> = lines[0].chars().collect();
            for col in 0..size {
                let row: Vec<char> = lines[2 + col].chars().collect();
                let at = row.iter().position(|&c| c == 'X').unwrap();
                let digit = char::from_digit((col % 10) as u32, 10).unwrap();
                assert_eq!(header[at], digit, "size {size}, column {col}");
            }
        }
    }

    #[test]
    fn test_display_empty_board() {
        let s = Board::new(0).to_string();
        assert!(s.lines().all(|l| l.len() <= 3));
    }

    #[test]
    fn test_clear_point() {
        let mut board = Board::new(9);
        board.place(3, 7, O).unwrap();
        board.clear_point((3, 7));
        assert!(board.is_empty(3, 7));
        assert_eq!(board.empty_count(), 81);
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new(5);
        board.place(1, 1, X).unwrap();
        board.place(2, 2, O).unwrap();
        board.clear();
        assert_eq!(board.empty_count(), 25);
    }
}
