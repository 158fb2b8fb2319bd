//! Minimal entity/component/system runtime for tick-driven rule sets.
//!
//! State lives in a [`World`]: segment entities, type-keyed resources, the
//! current frame's events and a host input buffer. Rules are [`System`]s that
//! read the world and return an [`Intention`] describing the changes they want.
//! A [`Schedule`] built from a [`SystemGraph`] runs the systems of a [`Stage`] in
//! dependency order and commits each intention before the next system runs.
//!
//! # Module Structure
//!
//! - [`world`]: storage, queries and the commit step
//! - [`intention`]: the ordered diff a system returns
//! - [`event`]: per-frame events
//! - [`system`]: named systems and the [`require_events`] gate
//! - [`schedule`]: stages, dependency validation and topological ordering
//! - [`timer`]: fixed-period timer resource and tick system
//! - [`error`]: world and schedule errors

pub mod error;
pub mod event;
pub mod intention;
pub mod schedule;
pub mod system;
pub mod timer;
pub mod world;

pub use tui_snake_types as types;

pub use error::{ScheduleError, WorldError};
pub use event::{Event, EventKind};
pub use intention::Intention;
pub use schedule::{Schedule, Stage, SystemGraph};
pub use system::{require_events, System, SystemResult};
pub use timer::{tick_system, Timer, TICK_SYSTEM};
pub use world::{BodyIndex, Entity, GameShouldQuit, Segment, World};
