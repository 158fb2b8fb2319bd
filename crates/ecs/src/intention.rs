//! Intention: a system's pending changes to the world.
//!
//! Systems never write to the [`World`](crate::World). They return an
//! `Intention`, an ordered list of tagged operations that the scheduler commits
//! right after the system returns.

use std::any::{type_name, TypeId};
use std::fmt;

use crate::error::WorldError;
use crate::event::Event;
use crate::world::{BodyIndex, Entity, Resources, Segment};

pub(crate) type ResourceWrite = Box<dyn FnOnce(&mut Resources) -> Result<(), WorldError>>;

/// One pending change.
pub(crate) enum Op {
    SetResource {
        name: &'static str,
        type_id: TypeId,
        write: ResourceWrite,
    },
    UpdateResource {
        name: &'static str,
        type_id: TypeId,
        write: ResourceWrite,
    },
    /// Create a new entity carrying this segment.
    Spawn(Segment),
    /// Rewrite the body index of every live segment.
    UpdateBodies(Box<dyn Fn(BodyIndex) -> BodyIndex>),
    Despawn(Entity),
    Emit(Event),
    /// Clear the host input buffer.
    DrainInput,
}

impl fmt::Debug for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::SetResource { name, .. } => write!(f, "SetResource({name})"),
            Op::UpdateResource { name, .. } => write!(f, "UpdateResource({name})"),
            Op::Spawn(segment) => write!(f, "Spawn({segment:?})"),
            Op::UpdateBodies(_) => write!(f, "UpdateBodies"),
            Op::Despawn(entity) => write!(f, "Despawn({})", entity.id()),
            Op::Emit(event) => write!(f, "Emit({event:?})"),
            Op::DrainInput => write!(f, "DrainInput"),
        }
    }
}

/// Ordered list of pending operations. Empty means "no change".
#[derive(Debug, Default)]
pub struct Intention {
    ops: Vec<Op>,
}

impl Intention {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_resource<R: 'static>(mut self, value: R) -> Self {
        self.ops.push(Op::SetResource {
            name: type_name::<R>(),
            type_id: TypeId::of::<R>(),
            write: Box::new(move |resources| {
                resources.insert(value);
                Ok(())
            }),
        });
        self
    }

    /// Replace a resource with a value computed from its committed value.
    pub fn update_resource<R: 'static>(mut self, f: impl FnOnce(&R) -> R + 'static) -> Self {
        self.ops.push(Op::UpdateResource {
            name: type_name::<R>(),
            type_id: TypeId::of::<R>(),
            write: Box::new(move |resources| {
                let next = f(resources.get::<R>()?);
                resources.insert(next);
                Ok(())
            }),
        });
        self
    }

    pub fn spawn(mut self, segment: Segment) -> Self {
        self.ops.push(Op::Spawn(segment));
        self
    }

    pub fn spawn_all(mut self, segments: impl IntoIterator<Item = Segment>) -> Self {
        self.ops.extend(segments.into_iter().map(Op::Spawn));
        self
    }

    pub fn update_bodies(mut self, f: impl Fn(BodyIndex) -> BodyIndex + 'static) -> Self {
        self.ops.push(Op::UpdateBodies(Box::new(f)));
        self
    }

    pub fn despawn(mut self, entity: Entity) -> Self {
        self.ops.push(Op::Despawn(entity));
        self
    }

    pub fn emit(mut self, event: Event) -> Self {
        self.ops.push(Op::Emit(event));
        self
    }

    pub fn drain_input(mut self) -> Self {
        self.ops.push(Op::DrainInput);
        self
    }

    pub(crate) fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub(crate) fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Events this intention would emit, in order.
    pub fn events(&self) -> impl Iterator<Item = Event> + '_ {
        self.ops.iter().filter_map(|op| match op {
            Op::Emit(event) => Some(*event),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::World;
    use tui_snake_types::Position;

    #[test]
    fn ops_are_applied_in_order() {
        let mut world = World::new();
        world
            .apply(Intention::new().spawn(Segment::new(Position::new(0, 0), 0)))
            .unwrap();

        // Shift first, then spawn: the new segment keeps index 0.
        let intention = Intention::new()
            .update_bodies(|n| n + 1)
            .spawn(Segment::new(Position::new(1, 0), 0));
        world.apply(intention).unwrap();

        let bodies: Vec<BodyIndex> = world.segments().map(|(_, s)| s.body).collect();
        assert_eq!(bodies, vec![1, 0]);
    }

    #[test]
    fn debug_lists_operations() {
        let intention = Intention::new()
            .set_resource(3u32)
            .emit(Event::Dinner)
            .drain_input();
        let text = format!("{:?}", intention);
        assert!(text.contains("SetResource(u32)"));
        assert!(text.contains("Emit(Dinner)"));
        assert!(text.contains("DrainInput"));
        assert_eq!(intention.len(), 3);
        assert_eq!(intention.events().collect::<Vec<_>>(), vec![Event::Dinner]);
    }
}
