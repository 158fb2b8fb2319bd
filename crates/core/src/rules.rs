//! Game-rule systems: movement, eating and tail pruning.
//!
//! Per tick frame the rules run as
//! `move_head -> food_collision -> eat -> move_tail` (see [`crate::plugin`]).
//! `move_head` adds one segment and `move_tail` drops every segment whose body
//! index reached the length, so after each tick frame the segment count equals
//! the length.

use tracing::{debug, info};

use crate::ecs::{require_events, Event, EventKind, GameShouldQuit, Intention, Segment, System};
use crate::food::place_food;
use crate::grid;
use crate::resources::{Bounds, Food, FoodRng, Head, Heading, Length};

pub const MOVE_HEAD: &str = "move_head";
pub const FOOD_COLLISION: &str = "food_collision";
pub const EAT: &str = "eat";
pub const MOVE_TAIL: &str = "move_tail";
pub const SELF_COLLISION: &str = "self_collision";

/// Gate a system on the tick event: the game clock, not the frame rate, paces it.
pub fn require_tick(system: System) -> System {
    require_events(&[EventKind::Tick], system)
}

/// Step the head one cell along the heading and age every existing segment.
pub fn move_head() -> System {
    require_tick(System::new(MOVE_HEAD, |world| {
        let head = world.resource::<Head>()?.0;
        let bounds = world.resource::<Bounds>()?.0;
        let heading = world.resource::<Heading>()?.0;

        let next = grid::advance(bounds, head, heading);
        debug!(from = ?head, to = ?next, "move head");

        Ok(Intention::new()
            .set_resource(Head(next))
            .update_bodies(|n| n + 1)
            .spawn(Segment::new(next, 0)))
    }))
}

/// Emit a dinner event when the head sits on the food.
pub fn food_collision() -> System {
    require_tick(System::new(FOOD_COLLISION, |world| {
        let head = world.resource::<Head>()?.0;
        let food = world.resource::<Food>()?.0;
        if head == food {
            return Ok(Intention::new().emit(Event::Dinner));
        }
        Ok(Intention::new())
    }))
}

/// Grow by one and move the food to a free cell.
///
/// Occupancy is read after `move_head` committed: the new head and the tail
/// that `move_tail` has not pruned yet both count as taken. When no cell is
/// free the board is full and the game ends with the food left in place.
pub fn eat() -> System {
    require_events(
        &[EventKind::Dinner],
        System::new(EAT, |world| {
            let bounds = world.resource::<Bounds>()?.0;
            let mut rng = world.resource::<FoodRng>()?.0.clone();
            let occupied = world.segment_positions();

            let grow = Intention::new().update_resource::<Length>(|len| Length(len.0 + 1));
            match place_food(&mut rng, bounds, &occupied) {
                Some(food) => {
                    debug!(?food, "ate, food moved");
                    Ok(grow
                        .set_resource(Food(food))
                        .set_resource(FoodRng(rng)))
                }
                None => {
                    info!(segments = occupied.len(), "board filled, ending game");
                    Ok(grow.set_resource(GameShouldQuit(true)))
                }
            }
        }),
    )
}

/// Remove every segment whose body index reached the length.
pub fn move_tail() -> System {
    require_tick(System::new(MOVE_TAIL, |world| {
        let length = world.resource::<Length>()?.0;
        let stale = world
            .segments()
            .filter(|(_, segment)| segment.body >= length)
            .fold(Intention::new(), |acc, (entity, _)| acc.despawn(entity));
        if !stale.is_empty() {
            debug!(removed = stale.len(), length, "move tail");
        }
        Ok(stale)
    }))
}

/// End the game when the head shares a cell with the rest of the body.
///
/// Optional rule; by default the snake passes through itself.
pub fn self_collision() -> System {
    require_tick(System::new(SELF_COLLISION, |world| {
        let head = world.resource::<Head>()?.0;
        let bitten = world
            .segments()
            .any(|(_, segment)| segment.body != 0 && segment.position == head);
        if bitten {
            info!(?head, "snake ran into itself");
            return Ok(Intention::new().set_resource(GameShouldQuit(true)));
        }
        Ok(Intention::new())
    }))
}
