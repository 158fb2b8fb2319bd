//! Wiring: registers the snake systems and their ordering edges.
//!
//! Per-frame order (each arrow is an explicit dependency edge):
//!
//! ```text
//! capture_controls -> change_direction ─┐
//! capture_controls -> exit              │
//! tick ─────────────────────────────────┴-> move_head -> food_collision -> eat
//! move_head, eat -> move_tail [-> self_collision]
//! tick -> trace_state
//! ```

use crate::controls::{
    capture_controls, change_direction, exit, CAPTURE_CONTROLS, CHANGE_DIRECTION, EXIT,
};
use crate::diagnostics::{report_final_state, trace_state, TRACE_STATE};
use crate::ecs::{
    tick_system, GameShouldQuit, Intention, Segment, Stage, System, SystemGraph, Timer,
    TICK_SYSTEM,
};
use crate::resources::{Bounds, Food, FoodRng, Head, Heading, Length};
use crate::rng::SimpleRng;
use crate::rules::{
    eat, food_collision, move_head, move_tail, self_collision, EAT, FOOD_COLLISION, MOVE_HEAD,
    MOVE_TAIL, SELF_COLLISION,
};
use crate::types::{
    Direction, Position, BOARD_HEIGHT, BOARD_WIDTH, INITIAL_DIRECTION, INITIAL_FOOD,
    INITIAL_SEGMENTS, TICK_MS,
};

pub const ADD_INITIAL_DATA: &str = "add_initial_data";

/// Everything the start-up stage writes into the world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartState {
    pub bounds: Position,
    pub tick_ms: u32,
    pub direction: Direction,
    pub head: Position,
    /// Segments behind the head, nearest first (body index 1, 2, ...).
    pub body: Vec<Position>,
    pub food: Position,
    pub seed: u32,
    pub self_collision_ends_game: bool,
}

impl StartState {
    /// Initial length: head plus body.
    pub fn length(&self) -> u32 {
        self.body.len() as u32 + 1
    }

    /// Initial segments with their body indices.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        std::iter::once(self.head)
            .chain(self.body.iter().copied())
            .enumerate()
            .map(|(i, p)| Segment::new(p, i as u32))
    }
}

impl Default for StartState {
    fn default() -> Self {
        let [tail, head] = INITIAL_SEGMENTS;
        Self {
            bounds: Position::new(BOARD_WIDTH, BOARD_HEIGHT),
            tick_ms: TICK_MS,
            direction: INITIAL_DIRECTION,
            head,
            body: vec![tail],
            food: INITIAL_FOOD,
            seed: 1,
            self_collision_ends_game: false,
        }
    }
}

/// Populate resources and the initial segments.
pub fn add_initial_data(start: StartState) -> System {
    System::new(ADD_INITIAL_DATA, move |_| {
        tracing::info!(
            bounds = ?start.bounds,
            head = ?start.head,
            length = start.length(),
            tick_ms = start.tick_ms,
            "start-up"
        );
        Ok(Intention::new()
            .set_resource(Bounds(start.bounds))
            .set_resource(Timer::new(start.tick_ms))
            .set_resource(Length(start.length()))
            .set_resource(Head(start.head))
            .set_resource(Heading(start.direction))
            .set_resource(Food(start.food))
            .set_resource(FoodRng(SimpleRng::new(start.seed)))
            .set_resource(GameShouldQuit(false))
            .spawn_all(start.segments()))
    })
}

/// Input capture. Must be registered before [`snake_plugin`].
pub fn controls_plugin(graph: &mut SystemGraph) {
    graph.add_system(Stage::Update, capture_controls());
}

/// Start-up data, the timer, every rule and their ordering edges.
pub fn snake_plugin(start: StartState) -> impl FnOnce(&mut SystemGraph) {
    move |graph| {
        let self_collision_ends_game = start.self_collision_ends_game;
        graph
            .add_system(Stage::StartUp, add_initial_data(start))
            .add_system(Stage::Update, tick_system())
            .add_system(Stage::Update, change_direction())
            .add_dependency(CHANGE_DIRECTION, CAPTURE_CONTROLS)
            .add_system(Stage::Update, exit())
            .add_dependency(EXIT, CAPTURE_CONTROLS)
            .add_system(Stage::Update, move_head())
            .add_dependency(MOVE_HEAD, TICK_SYSTEM)
            .add_dependency(MOVE_HEAD, CHANGE_DIRECTION)
            .add_system(Stage::Update, food_collision())
            .add_dependency(FOOD_COLLISION, MOVE_HEAD)
            .add_system(Stage::Update, eat())
            .add_dependency(EAT, FOOD_COLLISION)
            .add_system(Stage::Update, move_tail())
            .add_dependency(MOVE_TAIL, MOVE_HEAD)
            .add_dependency(MOVE_TAIL, EAT)
            .add_system(Stage::Update, trace_state())
            .add_dependency(TRACE_STATE, TICK_SYSTEM)
            .add_system(Stage::TearDown, report_final_state());

        if self_collision_ends_game {
            // After pruning, so stepping into the cell the tail just left is allowed.
            graph
                .add_system(Stage::Update, self_collision())
                .add_dependency(SELF_COLLISION, MOVE_TAIL);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::{ScheduleError, World};

    fn graph(start: StartState) -> SystemGraph {
        let mut graph = SystemGraph::new();
        graph.add_plugin(controls_plugin).add_plugin(snake_plugin(start));
        graph
    }

    #[test]
    fn frame_order_follows_edges() {
        let schedule = graph(StartState::default()).build().unwrap();
        assert_eq!(
            schedule.order(Stage::Update),
            vec![
                CAPTURE_CONTROLS,
                TICK_SYSTEM,
                CHANGE_DIRECTION,
                EXIT,
                MOVE_HEAD,
                FOOD_COLLISION,
                EAT,
                MOVE_TAIL,
                TRACE_STATE,
            ]
        );
        assert_eq!(schedule.order(Stage::StartUp), vec![ADD_INITIAL_DATA]);
    }

    #[test]
    fn self_collision_runs_after_tail() {
        let start = StartState {
            self_collision_ends_game: true,
            ..StartState::default()
        };
        let order = graph(start).build().unwrap().order(Stage::Update);
        let tail = order.iter().position(|n| *n == MOVE_TAIL).unwrap();
        let bite = order.iter().position(|n| *n == SELF_COLLISION).unwrap();
        assert!(bite > tail);
    }

    #[test]
    fn snake_plugin_needs_input_capture() {
        let mut graph = SystemGraph::new();
        graph.add_plugin(snake_plugin(StartState::default()));
        assert_eq!(
            graph.build().unwrap_err(),
            ScheduleError::UnknownSystem(CAPTURE_CONTROLS)
        );
    }

    #[test]
    fn start_up_writes_default_state() {
        let schedule = graph(StartState::default()).build().unwrap();
        let mut world = World::new();
        schedule.run_stage(Stage::StartUp, &mut world).unwrap();

        assert_eq!(world.resource::<Head>().unwrap().0, Position::new(2, 1));
        assert_eq!(world.resource::<Length>().unwrap().0, 2);
        assert_eq!(world.resource::<Heading>().unwrap().0, Direction::Down);
        assert_eq!(world.resource::<Food>().unwrap().0, Position::new(2, 4));
        assert_eq!(world.resource::<Timer>().unwrap().period_ms(), 1000);
        let segments: Vec<_> = world.segments().map(|(_, s)| *s).collect();
        assert_eq!(
            segments,
            vec![
                Segment::new(Position::new(2, 1), 0),
                Segment::new(Position::new(1, 1), 1),
            ]
        );
        assert!(!world.is_finished());
    }
}
