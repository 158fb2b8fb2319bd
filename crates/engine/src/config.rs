//! Start-up configuration: board size, timing, initial snake and food.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::grid;
use crate::core::StartState;
use crate::types::{Direction, Position};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("board must be at least 1x1, got {width}x{height}")]
    EmptyBoard { width: i32, height: i32 },
    #[error("tick period must be positive")]
    ZeroTickPeriod,
    #[error("{what} at {position:?} is outside the board")]
    OutOfBounds {
        what: &'static str,
        position: Position,
    },
    #[error("two segments share cell {0:?}")]
    DuplicateSegment(Position),
    #[error("food at {0:?} starts on the snake")]
    FoodOnSnake(Position),
}

/// Everything needed to start a game. Missing JSON fields take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub bounds: Position,
    pub tick_ms: u32,
    pub direction: Direction,
    pub head: Position,
    /// Cells behind the head, nearest first.
    pub body: Vec<Position>,
    pub food: Position,
    pub seed: u32,
    pub self_collision_ends_game: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        let start = StartState::default();
        Self {
            bounds: start.bounds,
            tick_ms: start.tick_ms,
            direction: start.direction,
            head: start.head,
            body: start.body,
            food: start.food,
            seed: start.seed,
            self_collision_ends_game: start.self_collision_ends_game,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bounds.x <= 0 || self.bounds.y <= 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.bounds.x,
                height: self.bounds.y,
            });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }

        let mut seen = HashSet::with_capacity(self.body.len() + 1);
        for (what, position) in std::iter::once(("head", self.head))
            .chain(self.body.iter().map(|p| ("body segment", *p)))
        {
            if !grid::contains(self.bounds, position) {
                return Err(ConfigError::OutOfBounds { what, position });
            }
            if !seen.insert(position) {
                return Err(ConfigError::DuplicateSegment(position));
            }
        }

        if !grid::contains(self.bounds, self.food) {
            return Err(ConfigError::OutOfBounds {
                what: "food",
                position: self.food,
            });
        }
        if seen.contains(&self.food) {
            return Err(ConfigError::FoodOnSnake(self.food));
        }
        Ok(())
    }

    pub fn start_state(&self) -> StartState {
        StartState {
            bounds: self.bounds,
            tick_ms: self.tick_ms,
            direction: self.direction,
            head: self.head,
            body: self.body.clone(),
            food: self.food,
            seed: self.seed,
            self_collision_ends_game: self.self_collision_ends_game,
        }
    }
}
