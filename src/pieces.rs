//! Piece catalog: side colours, the 21 polyomino shapes and piece sets.
//!
//! Each shape is defined as a set of unit squares in 2D space, given
//! relative to the piece origin with non-negative coordinates.

use std::fmt;

/// A 2D square offset relative to a piece's anchor.
pub type Offset = (i32, i32);

/// Maximum number of squares in any single piece.
pub const MAX_SQUARES: usize = 5;

/// Number of shapes in the catalog (and pieces in a side's set).
pub const NUM_SHAPES: usize = 21;

/// Colours a side can play as. Two distinct colours are active in a match.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, clap::ValueEnum)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Indigo,
    Pink,
}

impl Color {
    /// The full palette, in selection order.
    pub const ALL: [Color; 7] = [
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Indigo,
        Color::Pink,
    ];

    /// Single-character symbol used by the text board formatter.
    pub fn symbol(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Indigo => 'I',
            Color::Pink => 'P',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Indigo => "indigo",
            Color::Pink => "pink",
        };
        f.write_str(name)
    }
}

/// The 21 fixed polyomino shapes, one through five squares.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, clap::ValueEnum)]
pub enum Shape {
    Monomino,
    Domino,
    I3,
    L3,
    I4,
    O,
    L4,
    Z,
    T,
    S,
    I5,
    L5,
    N,
    P,
    T5,
    U,
    V,
    W,
    X,
    Y,
    Z5,
}

impl Shape {
    /// All shapes in catalog order.
    pub const ALL: [Shape; NUM_SHAPES] = [
        Shape::Monomino,
        Shape::Domino,
        Shape::I3,
        Shape::L3,
        Shape::I4,
        Shape::O,
        Shape::L4,
        Shape::Z,
        Shape::T,
        Shape::S,
        Shape::I5,
        Shape::L5,
        Shape::N,
        Shape::P,
        Shape::T5,
        Shape::U,
        Shape::V,
        Shape::W,
        Shape::X,
        Shape::Y,
        Shape::Z5,
    ];

    /// Canonical square offsets for this shape.
    pub fn offsets(self) -> &'static [Offset] {
        SHAPE_DEFINITIONS[self as usize]
    }

    /// Number of squares in this shape.
    pub fn size(self) -> usize {
        self.offsets().len()
    }
}

/// Canonical offsets indexed by `Shape as usize`.
///
/// Squares are 4-connected and never repeat within a shape.
const SHAPE_DEFINITIONS: [&[Offset]; NUM_SHAPES] = [
    // monomino
    &[(0, 0)],
    // domino
    &[(0, 0), (1, 0)],
    // straight tromino
    &[(0, 0), (1, 0), (2, 0)],
    // bent tromino
    &[(0, 0), (0, 1), (1, 0)],
    // straight tetromino
    &[(0, 0), (1, 0), (2, 0), (3, 0)],
    // square tetromino
    &[(0, 0), (1, 0), (0, 1), (1, 1)],
    // L tetromino
    &[(0, 0), (0, 1), (0, 2), (1, 0)],
    // Z tetromino
    &[(0, 0), (1, 0), (1, 1), (2, 1)],
    // T tetromino
    &[(0, 0), (1, 0), (2, 0), (1, 1)],
    // S tetromino
    &[(1, 0), (2, 0), (0, 1), (1, 1)],
    // straight pentomino
    &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)],
    // L pentomino
    &[(0, 0), (0, 1), (0, 2), (0, 3), (1, 0)],
    // N pentomino (lightning bolt)
    &[(0, 0), (1, 0), (1, 1), (1, 2), (2, 2)],
    // P pentomino
    &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 1)],
    // T pentomino
    &[(0, 0), (1, 0), (2, 0), (1, 1), (1, 2)],
    // U pentomino
    &[(0, 0), (2, 0), (0, 1), (1, 1), (2, 1)],
    // V pentomino
    &[(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)],
    // W pentomino
    &[(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)],
    // X pentomino (plus)
    &[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)],
    // Y pentomino
    &[(0, 0), (1, 0), (2, 0), (3, 0), (1, 1)],
    // Z pentomino, drawn with the same squares as N
    &[(0, 0), (1, 0), (1, 1), (1, 2), (2, 2)],
];

/// Returns the fixed shape catalog as `(shape, canonical offsets)` pairs.
pub fn shape_definitions() -> impl Iterator<Item = (Shape, &'static [Offset])> {
    Shape::ALL.into_iter().map(|shape| (shape, shape.offsets()))
}

/// Stable identifier of a piece slot within a side's set.
///
/// Assigned at set creation (the catalog index) and kept across rotations.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct PieceId(pub u8);

/// A shape instance owned by one side, possibly rotated.
///
/// Uses a fixed-size array so pieces stay `Copy` and enumeration never
/// allocates per piece.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Piece {
    pub id: PieceId,
    pub shape: Shape,
    pub color: Color,
    positions: [Offset; MAX_SQUARES],
    square_count: u8,
}

impl Piece {
    /// Builds a piece of `shape` in its canonical orientation.
    pub fn new(id: PieceId, shape: Shape, color: Color) -> Self {
        Self::with_squares(id, shape, color, shape.offsets())
    }

    /// Builds a piece from explicit squares (e.g. a rotated offset set).
    pub(crate) fn with_squares(id: PieceId, shape: Shape, color: Color, squares: &[Offset]) -> Self {
        debug_assert!(squares.len() <= MAX_SQUARES, "piece exceeds MAX_SQUARES");
        let mut positions = [(0, 0); MAX_SQUARES];
        positions[..squares.len()].copy_from_slice(squares);
        Self {
            id,
            shape,
            color,
            positions,
            square_count: squares.len() as u8,
        }
    }

    /// Returns the current square offsets of this piece.
    #[inline]
    pub fn squares(&self) -> &[Offset] {
        &self.positions[..self.square_count as usize]
    }

    /// Number of squares, which is also the points it scores.
    #[inline]
    pub fn size(&self) -> usize {
        self.square_count as usize
    }
}

/// Creates one piece per catalog shape for `color`, in catalog order.
pub fn create_side_pieces(color: Color) -> Vec<Piece> {
    Shape::ALL
        .iter()
        .enumerate()
        .map(|(index, &shape)| Piece::new(PieceId(index as u8), shape, color))
        .collect()
}
