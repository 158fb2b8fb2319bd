//! Input resolution: turn a frame's control events into heading and quit changes.

use tracing::{debug, info};

use crate::ecs::{Event, GameShouldQuit, Intention, System};
use crate::resources::Heading;
use crate::types::Control;

pub const CAPTURE_CONTROLS: &str = "capture_controls";
pub const CHANGE_DIRECTION: &str = "change_direction";
pub const EXIT: &str = "exit";

/// Forward controls buffered by the host as this frame's control events.
pub fn capture_controls() -> System {
    System::new(CAPTURE_CONTROLS, |world| {
        let input = world.raw_input();
        if input.is_empty() {
            return Ok(Intention::new());
        }
        let intention = input
            .iter()
            .fold(Intention::new(), |acc, c| acc.emit(Event::Control(*c)));
        Ok(intention.drain_input())
    })
}

/// The last movement control of the frame becomes the heading.
///
/// Pause and exit are ignored; no movement control means no change. Reversing
/// onto the body is not prevented.
pub fn change_direction() -> System {
    System::new(CHANGE_DIRECTION, |world| {
        let Some(direction) = world.controls().filter_map(|c| c.direction()).last() else {
            return Ok(Intention::new());
        };
        debug!(direction = direction.as_str(), "heading changed");
        Ok(Intention::new().set_resource(Heading(direction)))
    })
}

/// Latch the quit flag when an exit control arrives. Never clears it.
pub fn exit() -> System {
    System::new(EXIT, |world| {
        if world.controls().any(|c| c == Control::Exit) {
            info!("exit requested");
            return Ok(Intention::new().set_resource(GameShouldQuit(true)));
        }
        Ok(Intention::new())
    })
}
