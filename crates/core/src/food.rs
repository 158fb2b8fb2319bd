//! Food placement: pick a random unoccupied cell.

use std::collections::HashSet;

use tracing::warn;

use crate::grid;
use crate::rng::SimpleRng;
use crate::types::Position;

/// Rejection-sampling budget, per board cell, before enumerating free cells.
pub const SAMPLES_PER_CELL: usize = 4;

/// Uniformly random cell on the board.
pub fn random_cell(rng: &mut SimpleRng, bounds: Position) -> Position {
    let x = rng.next_range(bounds.x as u32) as i32;
    let y = rng.next_range(bounds.y as u32) as i32;
    Position::new(x, y)
}

/// Choose a cell not in `occupied`, or `None` when the board is full.
///
/// Draws random cells until one is free. After `SAMPLES_PER_CELL * cells`
/// rejected draws it falls back to listing the free cells and picking one,
/// so a crowded board still terminates.
pub fn place_food(
    rng: &mut SimpleRng,
    bounds: Position,
    occupied: &[Position],
) -> Option<Position> {
    let cells = grid::cell_count(bounds);
    if cells == 0 {
        return None;
    }

    for _ in 0..cells * SAMPLES_PER_CELL {
        let candidate = random_cell(rng, bounds);
        if !occupied.contains(&candidate) {
            return Some(candidate);
        }
    }

    let taken: HashSet<Position> = occupied.iter().copied().collect();
    let free: Vec<Position> = grid::cells(bounds)
        .filter(|cell| !taken.contains(cell))
        .collect();
    warn!(
        occupied = taken.len(),
        free = free.len(),
        "rejection sampling exhausted, enumerating free cells"
    );
    if free.is_empty() {
        return None;
    }
    let pick = rng.next_range(free.len() as u32) as usize;
    Some(free[pick])
}
