//! Board geometry on a toroidal grid.
//!
//! Bounds are a [`Position`] whose `x` is the width and `y` the height. All
//! functions here assume both are positive.

use crate::types::{Direction, Position};

/// Wrap a position onto the board, each axis independently.
///
/// Uses true (non-negative) modulo, so `-1` maps to the last column/row.
#[inline]
pub fn wrap(bounds: Position, position: Position) -> Position {
    Position::new(
        position.x.rem_euclid(bounds.x),
        position.y.rem_euclid(bounds.y),
    )
}

/// The cell one step from `position` in `direction`, wrapped.
#[inline]
pub fn advance(bounds: Position, position: Position, direction: Direction) -> Position {
    wrap(bounds, position + direction.delta())
}

pub fn contains(bounds: Position, position: Position) -> bool {
    (0..bounds.x).contains(&position.x) && (0..bounds.y).contains(&position.y)
}

pub fn cell_count(bounds: Position) -> usize {
    (bounds.x.max(0) as usize) * (bounds.y.max(0) as usize)
}

/// Every cell, row by row.
pub fn cells(bounds: Position) -> impl Iterator<Item = Position> {
    (0..bounds.y).flat_map(move |y| (0..bounds.x).map(move |x| Position::new(x, y)))
}
