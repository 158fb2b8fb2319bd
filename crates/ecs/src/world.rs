//! World module - entity, resource and event storage
//!
//! The world is read-only to systems. Every change flows through an
//! [`Intention`] committed by [`World::apply`], one system at a time.

use std::any::{type_name, Any, TypeId};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use tracing::trace;
use tui_snake_types::{Control, Position};

use crate::error::WorldError;
use crate::event::{Event, EventKind};
use crate::intention::{Intention, Op};

/// Distance in ticks from the head; 0 is the head segment.
pub type BodyIndex = u32;

/// Opaque entity id. Allocated monotonically and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entity(u32);

impl Entity {
    pub fn id(self) -> u32 {
        self.0
    }
}

/// Components carried by one snake body cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub position: Position,
    pub body: BodyIndex,
}

impl Segment {
    pub fn new(position: Position, body: BodyIndex) -> Self {
        Self { position, body }
    }
}

/// Termination flag. Once present and `true`, the host stops stepping frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameShouldQuit(pub bool);

/// Type-keyed singleton storage.
#[derive(Default)]
pub(crate) struct Resources {
    map: HashMap<TypeId, Box<dyn Any>>,
}

impl Resources {
    pub(crate) fn get<R: 'static>(&self) -> Result<&R, WorldError> {
        self.map
            .get(&TypeId::of::<R>())
            .and_then(|boxed| boxed.downcast_ref::<R>())
            .ok_or(WorldError::MissingResource(type_name::<R>()))
    }

    pub(crate) fn insert<R: 'static>(&mut self, value: R) {
        self.map.insert(TypeId::of::<R>(), Box::new(value));
    }

    fn contains(&self, id: TypeId) -> bool {
        self.map.contains_key(&id)
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}

/// Entity/component/resource store for one game session.
#[derive(Default)]
pub struct World {
    next_entity: u32,
    segments: BTreeMap<Entity, Segment>,
    resources: Resources,
    events: Vec<Event>,
    raw_input: Vec<Control>,
    delta_ms: u32,
    frame: u64,
}

impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("World")
            .field("frame", &self.frame)
            .field("segments", &self.segments)
            .field("resources", &self.resources.len())
            .field("events", &self.events)
            .field("raw_input", &self.raw_input)
            .finish()
    }
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame: drop last frame's events and record elapsed time.
    pub fn begin_frame(&mut self, delta_ms: u32) {
        self.events.clear();
        self.delta_ms = delta_ms;
        self.frame += 1;
    }

    /// Number of frames begun so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Milliseconds elapsed since the previous frame.
    pub fn delta_ms(&self) -> u32 {
        self.delta_ms
    }

    // ----- components -----

    /// All live segments, ordered by entity id.
    pub fn segments(&self) -> impl Iterator<Item = (Entity, &Segment)> + '_ {
        self.segments.iter().map(|(e, s)| (*e, s))
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Positions of all live segments, in query order.
    pub fn segment_positions(&self) -> Vec<Position> {
        self.segments.values().map(|s| s.position).collect()
    }

    // ----- resources -----

    pub fn resource<R: 'static>(&self) -> Result<&R, WorldError> {
        self.resources.get::<R>()
    }

    pub fn resource_or<R: Clone + 'static>(&self, default: R) -> R {
        self.resources.get::<R>().cloned().unwrap_or(default)
    }

    /// Direct write, bypassing the intention pipeline. For hosts and tests only.
    pub fn insert_resource<R: 'static>(&mut self, value: R) {
        self.resources.insert(value);
    }

    /// Derived from the [`GameShouldQuit`] resource.
    pub fn is_finished(&self) -> bool {
        matches!(self.resources.get::<GameShouldQuit>(), Ok(GameShouldQuit(true)))
    }

    // ----- events & input -----

    /// Events emitted so far in the current frame, in emission order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn has_event(&self, kind: EventKind) -> bool {
        self.events.iter().any(|e| e.kind() == kind)
    }

    /// Control events of the current frame, in arrival order.
    pub fn controls(&self) -> impl Iterator<Item = Control> + '_ {
        self.events.iter().filter_map(|e| match e {
            Event::Control(c) => Some(*c),
            _ => None,
        })
    }

    /// Buffer a decoded control from the host; forwarded on the next frame.
    pub fn push_input(&mut self, control: Control) {
        self.raw_input.push(control);
    }

    /// Controls buffered since the last drain.
    pub fn raw_input(&self) -> &[Control] {
        &self.raw_input
    }

    // ----- commit -----

    /// Commit an intention, operations in order.
    ///
    /// Updates of missing resources are rejected before anything is written, so a
    /// failed intention leaves the world untouched. Returns the number of operations applied.
    pub fn apply(&mut self, intention: Intention) -> Result<usize, WorldError> {
        self.check_updates(&intention)?;

        let ops = intention.into_ops();
        let count = ops.len();
        for op in ops {
            match op {
                Op::SetResource { write, .. } | Op::UpdateResource { write, .. } => {
                    write(&mut self.resources)?;
                }
                Op::Spawn(segment) => {
                    let entity = self.allocate();
                    self.segments.insert(entity, segment);
                }
                Op::UpdateBodies(f) => {
                    for segment in self.segments.values_mut() {
                        segment.body = f(segment.body);
                    }
                }
                Op::Despawn(entity) => {
                    self.segments.remove(&entity);
                }
                Op::Emit(event) => self.events.push(event),
                Op::DrainInput => self.raw_input.clear(),
            }
        }

        trace!(ops = count, frame = self.frame, "applied intention");
        Ok(count)
    }

    fn check_updates(&self, intention: &Intention) -> Result<(), WorldError> {
        let mut set_earlier = HashSet::new();
        for op in intention.ops() {
            match op {
                Op::SetResource { type_id, .. } => {
                    set_earlier.insert(*type_id);
                }
                Op::UpdateResource { type_id, name, .. } => {
                    if !self.resources.contains(*type_id) && !set_earlier.contains(type_id) {
                        return Err(WorldError::MissingResource(*name));
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn allocate(&mut self) -> Entity {
        let entity = Entity(self.next_entity);
        self.next_entity += 1;
        entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Score(u32);

    #[test]
    fn missing_resource_reports_type_name() {
        let world = World::new();
        let err = world.resource::<Score>().unwrap_err();
        match err {
            WorldError::MissingResource(name) => assert!(name.ends_with("Score")),
        }
        assert_eq!(world.resource_or(Score(7)), Score(7));
    }

    #[test]
    fn apply_spawns_with_fresh_ids() {
        let mut world = World::new();
        let intention = Intention::new()
            .spawn(Segment::new(Position::new(1, 1), 1))
            .spawn(Segment::new(Position::new(2, 1), 0));
        assert_eq!(world.apply(intention).unwrap(), 2);

        let ids: Vec<u32> = world.segments().map(|(e, _)| e.id()).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(
            world.segment_positions(),
            vec![Position::new(1, 1), Position::new(2, 1)]
        );
    }

    #[test]
    fn despawned_ids_are_not_reused() {
        let mut world = World::new();
        world
            .apply(Intention::new().spawn(Segment::new(Position::new(0, 0), 0)))
            .unwrap();
        let (first, _) = world.segments().next().unwrap();
        world.apply(Intention::new().despawn(first)).unwrap();
        world
            .apply(Intention::new().spawn(Segment::new(Position::new(0, 0), 0)))
            .unwrap();
        let (second, _) = world.segments().next().unwrap();
        assert_ne!(first, second);
        assert_eq!(world.segment_count(), 1);
    }

    #[test]
    fn update_of_missing_resource_leaves_world_untouched() {
        let mut world = World::new();
        let intention = Intention::new()
            .spawn(Segment::new(Position::new(0, 0), 0))
            .update_resource::<Score>(|s| Score(s.0 + 1));
        assert!(world.apply(intention).is_err());
        assert_eq!(world.segment_count(), 0);
    }

    #[test]
    fn update_after_set_in_same_intention_is_allowed() {
        let mut world = World::new();
        let intention = Intention::new()
            .set_resource(Score(1))
            .update_resource::<Score>(|s| Score(s.0 + 1));
        world.apply(intention).unwrap();
        assert_eq!(world.resource::<Score>().unwrap(), &Score(2));
    }

    #[test]
    fn events_live_for_one_frame() {
        let mut world = World::new();
        world.begin_frame(16);
        world.apply(Intention::new().emit(Event::Dinner)).unwrap();
        assert!(world.has_event(EventKind::Dinner));

        world.begin_frame(16);
        assert!(world.events().is_empty());
        assert_eq!(world.frame(), 2);
    }

    #[test]
    fn finished_follows_quit_flag() {
        let mut world = World::new();
        assert!(!world.is_finished());
        world.insert_resource(GameShouldQuit(false));
        assert!(!world.is_finished());
        world
            .apply(Intention::new().set_resource(GameShouldQuit(true)))
            .unwrap();
        assert!(world.is_finished());
    }
}
