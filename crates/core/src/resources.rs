//! Resource types held in the world during a game.
//!
//! [`GameShouldQuit`](crate::ecs::GameShouldQuit) and [`Timer`](crate::ecs::Timer)
//! belong to the runtime and are not repeated here.

use crate::rng::SimpleRng;
use crate::types::{Direction, Position};

/// Board dimensions. Set at start-up, never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds(pub Position);

/// Current head cell; always the position of the body-index-0 segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Head(pub Position);

/// Current direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading(pub Direction);

/// Target snake length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Length(pub u32);

/// Current food cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food(pub Position);

/// RNG state for food placement; advanced through intentions like any other state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodRng(pub SimpleRng);
