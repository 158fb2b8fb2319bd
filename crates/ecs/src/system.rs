//! Systems and event gating.

use std::fmt;

use crate::error::WorldError;
use crate::event::EventKind;
use crate::intention::Intention;
use crate::world::World;

pub type SystemResult = Result<Intention, WorldError>;

/// A named rule: reads a world snapshot, returns the changes it wants.
pub struct System {
    name: &'static str,
    run: Box<dyn Fn(&World) -> SystemResult>,
}

impl fmt::Debug for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("System").field(&self.name).finish()
    }
}

impl System {
    pub fn new(name: &'static str, run: impl Fn(&World) -> SystemResult + 'static) -> Self {
        Self {
            name,
            run: Box::new(run),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn run(&self, world: &World) -> SystemResult {
        (self.run)(world)
    }
}

/// Wrap `system` so it only runs on frames where every kind in `kinds` was emitted.
///
/// On other frames the wrapper reads nothing and returns an empty intention.
/// The wrapped system keeps its name, so dependency edges still refer to it.
pub fn require_events(kinds: &'static [EventKind], system: System) -> System {
    let System { name, run } = system;
    System::new(name, move |world| {
        if kinds.iter().all(|kind| world.has_event(*kind)) {
            run(world)
        } else {
            Ok(Intention::new())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;

    fn counter() -> System {
        System::new("counter", |world| {
            let n = *world.resource::<u32>()?;
            Ok(Intention::new().set_resource(n + 1))
        })
    }

    #[test]
    fn gated_system_is_silent_without_event() {
        let mut world = World::new();
        // No u32 resource: an ungated run would fail.
        world.begin_frame(16);
        let gated = require_events(&[EventKind::Tick], counter());
        let intention = gated.run(&world).unwrap();
        assert!(intention.is_empty());
        assert_eq!(gated.name(), "counter");
    }

    #[test]
    fn gated_system_runs_when_event_present() {
        let mut world = World::new();
        world.insert_resource(1u32);
        world.begin_frame(16);
        world.apply(Intention::new().emit(Event::Tick)).unwrap();

        let gated = require_events(&[EventKind::Tick], counter());
        world.apply(gated.run(&world).unwrap()).unwrap();
        assert_eq!(*world.resource::<u32>().unwrap(), 2);
    }

    #[test]
    fn gate_requires_every_listed_kind() {
        let mut world = World::new();
        world.insert_resource(1u32);
        world.begin_frame(16);
        world.apply(Intention::new().emit(Event::Tick)).unwrap();

        let gated = require_events(&[EventKind::Tick, EventKind::Dinner], counter());
        assert!(gated.run(&world).unwrap().is_empty());
    }
}
