//! 2D rotation and normalization of piece offsets.
//!
//! A piece rotates by 90 degrees about the midpoint of its bounding box.
//! The midpoint may sit on a half-integer, so the transform works on doubled
//! coordinates and rounds halves toward positive infinity. Every square of a
//! piece shares the same parity, so rounding shifts them all alike and the
//! shape is preserved.

use rustc_hash::FxHashSet;

use crate::pieces::{Offset, Piece, MAX_SQUARES};

/// Rotates a piece by 90 degrees and normalizes it to the origin.
///
/// Clockwise maps `(dx, dy)` to `(-dy, dx)`; counter-clockwise maps it to
/// `(dy, -dx)`, both relative to the bounding-box midpoint. The returned
/// piece keeps its id, shape, colour and size.
pub fn rotate(piece: &Piece, clockwise: bool) -> Piece {
    let squares = piece.squares();
    let (min_x, max_x, min_y, max_y) = bounds(squares);

    // doubled centre: avoids half-integer midpoints for even extents
    let center_x = min_x + max_x;
    let center_y = min_y + max_y;

    let mut rotated = [(0, 0); MAX_SQUARES];
    for (slot, &(x, y)) in rotated.iter_mut().zip(squares) {
        let dx = 2 * x - center_x;
        let dy = 2 * y - center_y;
        let (rx, ry) = if clockwise { (-dy, dx) } else { (dy, -dx) };
        *slot = (round_half_up(rx + center_x), round_half_up(ry + center_y));
    }

    let normalized = normalize_to_origin(rotated[..squares.len()].to_vec());
    Piece::with_squares(piece.id, piece.shape, piece.color, &normalized)
}

/// Halves a doubled coordinate, rounding `.5` toward positive infinity.
#[inline]
fn round_half_up(doubled: i32) -> i32 {
    (doubled + 1).div_euclid(2)
}

/// Returns `(min_x, max_x, min_y, max_y)` over the given squares.
fn bounds(squares: &[Offset]) -> (i32, i32, i32, i32) {
    let min_x = squares.iter().map(|&(x, _)| x).min().unwrap_or(0);
    let max_x = squares.iter().map(|&(x, _)| x).max().unwrap_or(0);
    let min_y = squares.iter().map(|&(_, y)| y).min().unwrap_or(0);
    let max_y = squares.iter().map(|&(_, y)| y).max().unwrap_or(0);
    (min_x, max_x, min_y, max_y)
}

/// Translates offsets so the minimum x and y values are both zero.
pub fn normalize_to_origin(mut squares: Vec<Offset>) -> Vec<Offset> {
    let (min_x, _, min_y, _) = bounds(&squares);

    for (x, y) in &mut squares {
        *x -= min_x;
        *y -= min_y;
    }

    squares
}

/// Order-insensitive view of a piece's squares after normalization.
///
/// Two orientations that differ only by translation or square order compare
/// equal.
pub fn offset_set(squares: &[Offset]) -> FxHashSet<Offset> {
    normalize_to_origin(squares.to_vec()).into_iter().collect()
}
