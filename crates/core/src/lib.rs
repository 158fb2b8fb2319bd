//! Snake rules - deterministic systems over the [`ecs`] world
//!
//! Every rule is a [`System`](ecs::System) that reads the world and returns an
//! intention. Nothing here touches the terminal, the clock or the filesystem:
//! the host feeds frame deltas and controls, and a fixed seed reproduces a game.
//!
//! # Module Structure
//!
//! - [`controls`]: input capture, heading changes, exit
//! - [`rules`]: head movement, food collision, eating, tail pruning
//! - [`diagnostics`]: per-tick trace and the tear-down summary
//! - [`plugin`]: start-up data and the system wiring
//! - [`food`]: free-cell selection for new food
//! - [`grid`]: toroidal board arithmetic
//! - [`rng`]: seeded LCG
//! - [`resources`]: the singleton resource types
//! - [`snapshot`]: renderer-facing board view
//!
//! # Game Rules
//!
//! - The board wraps on both axes.
//! - The snake moves one cell per tick (1000 ms by default).
//! - The last movement control of a frame becomes the heading.
//! - Eating grows the snake by one and moves the food to a free cell.
//! - Running into the body does nothing unless self-collision is enabled.
//!
//! # Example
//!
//! ```
//! use tui_snake_core::ecs::{Stage, SystemGraph, World};
//! use tui_snake_core::plugin::{controls_plugin, snake_plugin, StartState};
//! use tui_snake_core::resources::Head;
//! use tui_snake_core::types::Position;
//!
//! let mut graph = SystemGraph::new();
//! graph
//!     .add_plugin(controls_plugin)
//!     .add_plugin(snake_plugin(StartState::default()));
//! let schedule = graph.build().unwrap();
//!
//! let mut world = World::new();
//! schedule.run_stage(Stage::StartUp, &mut world).unwrap();
//!
//! // One full period: the head steps down.
//! world.begin_frame(1000);
//! schedule.run_stage(Stage::Update, &mut world).unwrap();
//! assert_eq!(world.resource::<Head>().unwrap().0, Position::new(2, 2));
//! ```

pub mod controls;
pub mod diagnostics;
pub mod food;
pub mod grid;
pub mod plugin;
pub mod resources;
pub mod rng;
pub mod rules;
pub mod snapshot;

pub use tui_snake_ecs as ecs;
pub use tui_snake_types as types;

pub use plugin::{add_initial_data, controls_plugin, snake_plugin, StartState};
pub use resources::{Bounds, Food, FoodRng, Head, Heading, Length};
pub use rng::SimpleRng;
pub use snapshot::{BoardSnapshot, CellKind};
