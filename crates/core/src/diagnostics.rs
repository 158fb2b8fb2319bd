//! Logging systems. They read state and never change it.

use tracing::{info, trace};

use crate::ecs::{Intention, System};
use crate::resources::{Food, Head, Heading, Length};
use crate::rules::require_tick;

pub const TRACE_STATE: &str = "trace_state";
pub const REPORT_FINAL_STATE: &str = "report_final_state";

/// Per-tick dump of the snake state at `trace` level.
pub fn trace_state() -> System {
    require_tick(System::new(TRACE_STATE, |world| {
        let head = world.resource::<Head>()?.0;
        let food = world.resource::<Food>()?.0;
        let length = world.resource::<Length>()?.0;
        let heading = world.resource::<Heading>()?.0;
        trace!(
            frame = world.frame(),
            ?head,
            ?food,
            length,
            heading = heading.as_str(),
            segments = ?world
                .segments()
                .map(|(e, s)| (e.id(), s.position, s.body))
                .collect::<Vec<_>>(),
            "tick"
        );
        Ok(Intention::new())
    }))
}

/// Tear-down summary.
pub fn report_final_state() -> System {
    System::new(REPORT_FINAL_STATE, |world| {
        info!(
            frames = world.frame(),
            length = world.resource_or(Length(0)).0,
            segments = world.segment_count(),
            "game over"
        );
        Ok(Intention::new())
    })
}
