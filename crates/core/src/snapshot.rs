//! Read-only view of the board for renderers.

use crate::ecs::{World, WorldError};
use crate::resources::{Bounds, Food, Head, Length};
use crate::types::Position;

/// What occupies a board cell, in draw priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Empty,
    Body,
    Food,
    Head,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub bounds: Position,
    pub head: Position,
    pub food: Position,
    pub length: u32,
    pub segments: Vec<Position>,
    pub finished: bool,
}

impl BoardSnapshot {
    /// Capture the committed state. Call after the frame's rules have run.
    pub fn capture(world: &World) -> Result<Self, WorldError> {
        Ok(Self {
            bounds: world.resource::<Bounds>()?.0,
            head: world.resource::<Head>()?.0,
            food: world.resource::<Food>()?.0,
            length: world.resource::<Length>()?.0,
            segments: world.segment_positions(),
            finished: world.is_finished(),
        })
    }

    /// Head wins over food, food over body.
    pub fn cell_at(&self, position: Position) -> CellKind {
        if position == self.head {
            CellKind::Head
        } else if position == self.food {
            CellKind::Food
        } else if self.segments.contains(&position) {
            CellKind::Body
        } else {
            CellKind::Empty
        }
    }
}
