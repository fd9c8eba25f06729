//! Board representation and cell queries.
//!
//! The board is a square grid stored as a flat row-major vector where each
//! cell holds the colour occupying it, or `None` when empty. Cells are only
//! ever filled, never cleared.

use std::fmt;

use crate::pieces::{Color, Offset};

/// Standard board edge length.
pub const DEFAULT_BOARD_SIZE: usize = 20;

/// The 8 surrounding cells of a square, orthogonal and diagonal.
pub const NEIGHBOR_OFFSETS: [Offset; 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The 4 diagonal neighbours of a square.
pub const DIAGONAL_OFFSETS: [Offset; 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// An integer cell coordinate; as a piece anchor it may lie off the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this position shifted by an offset.
    #[inline]
    pub const fn offset(self, (dx, dy): Offset) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Square occupancy grid.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    /// Creates an empty `size` x `size` board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Edge length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the position lies on the board.
    #[inline]
    pub fn in_bounds(&self, position: Position) -> bool {
        let size = self.size as i32;
        (0..size).contains(&position.x) && (0..size).contains(&position.y)
    }

    /// Converts an in-bounds position to a linear cell index (row-major).
    #[inline(always)]
    fn cell_index(&self, position: Position) -> usize {
        position.y as usize * self.size + position.x as usize
    }

    /// Colour occupying the cell, or `None` if empty or off the board.
    #[inline]
    pub fn get(&self, position: Position) -> Option<Color> {
        if self.in_bounds(position) {
            self.cells[self.cell_index(position)]
        } else {
            None
        }
    }

    /// Returns true if the cell is on the board and unoccupied.
    #[inline]
    pub fn is_empty_cell(&self, position: Position) -> bool {
        self.in_bounds(position) && self.cells[self.cell_index(position)].is_none()
    }

    /// Marks an in-bounds cell with a colour.
    pub(crate) fn fill(&mut self, position: Position, color: Color) {
        debug_assert!(self.is_empty_cell(position), "cell {position} already filled");
        let index = self.cell_index(position);
        self.cells[index] = Some(color);
    }

    /// The four corner cells: top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Position; 4] {
        let last = self.size as i32 - 1;
        [
            Position::new(0, 0),
            Position::new(last, 0),
            Position::new(0, last),
            Position::new(last, last),
        ]
    }

    /// Returns true if the position is one of the four corners.
    #[inline]
    pub fn is_corner(&self, position: Position) -> bool {
        let last = self.size as i32 - 1;
        (position.x == 0 || position.x == last) && (position.y == 0 || position.y == last)
    }

    /// Iterates over every cell occupied by `color`, row by row.
    pub fn cells_of(&self, color: Color) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| **cell == Some(color))
            .map(move |(index, _)| Position::new((index % size) as i32, (index / size) as i32))
    }

    /// Returns true if any cell holds `color`.
    pub fn has_color(&self, color: Color) -> bool {
        self.cells.contains(&Some(color))
    }

    /// Number of cells occupied by `color`.
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|cell| **cell == Some(color)).count()
    }

    /// Number of occupied cells of any colour.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

/// Formats the board as text, one row per line from y = 0 downward.
///
/// Occupied cells show the colour symbol; empty cells show '.'.
pub fn format_board(board: &Board) -> String {
    let mut output = String::with_capacity(board.size * (board.size + 1));
    for row in board.cells.chunks(board.size.max(1)) {
        for cell in row {
            output.push(cell.map_or('.', Color::symbol));
        }
        output.push('\n');
    }
    output
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let board = Board::new(DEFAULT_BOARD_SIZE);
        assert!(board.in_bounds(Position::new(0, 0)));
        assert!(board.in_bounds(Position::new(19, 19)));
        assert!(!board.in_bounds(Position::new(20, 0)));
        assert!(!board.in_bounds(Position::new(0, -1)));
        assert_eq!(board.get(Position::new(-1, 5)), None);
    }

    #[test]
    fn test_corners() {
        let board = Board::new(20);
        for corner in board.corners() {
            assert!(board.is_corner(corner), "{corner} should be a corner");
        }
        assert!(!board.is_corner(Position::new(0, 1)));
        assert!(!board.is_corner(Position::new(19, 18)));
        assert_eq!(board.corners()[3], Position::new(19, 19));
    }

    #[test]
    fn test_fill_and_query() {
        let mut board = Board::new(5);
        board.fill(Position::new(1, 2), Color::Red);
        board.fill(Position::new(4, 4), Color::Blue);

        assert_eq!(board.get(Position::new(1, 2)), Some(Color::Red));
        assert!(!board.is_empty_cell(Position::new(1, 2)));
        assert!(board.is_empty_cell(Position::new(2, 1)));
        assert!(board.has_color(Color::Blue));
        assert!(!board.has_color(Color::Green));
        assert_eq!(board.count(Color::Red), 1);
        assert_eq!(board.occupied(), 2);
        assert_eq!(board.cells_of(Color::Red).collect::<Vec<_>>(), vec![Position::new(1, 2)]);
    }

    #[test]
    fn test_format_board() {
        let mut board = Board::new(5);
        board.fill(Position::new(0, 0), Color::Red);
        board.fill(Position::new(1, 1), Color::Red);
        board.fill(Position::new(2, 1), Color::Red);
        board.fill(Position::new(4, 4), Color::Blue);
        board.fill(Position::new(3, 4), Color::Blue);

        insta::assert_snapshot!(format_board(&board), @r"
        R....
        .RR..
        .....
        .....
        ...BB
        ");
    }
}
