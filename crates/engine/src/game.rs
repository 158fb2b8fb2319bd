//! Game session: owns the world and the built schedule and drives the stages.

use thiserror::Error;
use tracing::{debug, info};

use crate::config::{ConfigError, GameConfig};
use crate::core::ecs::{Schedule, ScheduleError, Stage, SystemGraph, World, WorldError};
use crate::core::{controls_plugin, snake_plugin, BoardSnapshot};
use crate::types::Control;

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid system graph: {0}")]
    Schedule(#[from] ScheduleError),
    #[error(transparent)]
    World(#[from] WorldError),
    #[error("game has not been started")]
    NotStarted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Created,
    Running,
    TornDown,
}

#[derive(Debug)]
pub struct Game {
    world: World,
    schedule: Schedule,
    phase: Phase,
}

impl Game {
    /// Validate the config and build the schedule. Nothing runs until [`Game::start`].
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;

        let mut graph = SystemGraph::new();
        graph
            .add_plugin(controls_plugin)
            .add_plugin(snake_plugin(config.start_state()));
        let schedule = graph.build()?;
        debug!(order = ?schedule.order(Stage::Update), "schedule built");

        Ok(Self {
            world: World::new(),
            schedule,
            phase: Phase::Created,
        })
    }

    /// Run the start-up stage. Later calls do nothing.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Created {
            return Ok(());
        }
        self.schedule.run_stage(Stage::StartUp, &mut self.world)?;
        self.phase = Phase::Running;
        Ok(())
    }

    /// Run one frame with `delta_ms` elapsed since the previous one.
    ///
    /// Returns `false` once the game has finished; finished games are not stepped.
    pub fn step(&mut self, delta_ms: u32) -> Result<bool, GameError> {
        match self.phase {
            Phase::Created => return Err(GameError::NotStarted),
            Phase::TornDown => return Ok(false),
            Phase::Running => {}
        }
        if self.world.is_finished() {
            return Ok(false);
        }
        self.world.begin_frame(delta_ms);
        self.schedule.run_stage(Stage::Update, &mut self.world)?;
        Ok(!self.world.is_finished())
    }

    /// Queue a decoded control for the next frame.
    pub fn push_control(&mut self, control: Control) {
        self.world.push_input(control);
    }

    pub fn is_finished(&self) -> bool {
        self.world.is_finished()
    }

    /// Run the tear-down stage once. Does nothing for a game that never started.
    pub fn tear_down(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Running {
            return Ok(());
        }
        self.phase = Phase::TornDown;
        self.schedule.run_stage(Stage::TearDown, &mut self.world)?;
        info!(frames = self.world.frame(), "session closed");
        Ok(())
    }

    pub fn snapshot(&self) -> Result<BoardSnapshot, GameError> {
        if self.phase == Phase::Created {
            return Err(GameError::NotStarted);
        }
        Ok(BoardSnapshot::capture(&self.world)?)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }
}
