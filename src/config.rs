use crate::constants::*;
use crate::error::MazeError;
use crate::maze_gen::MazeStyle;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Generator settings. Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub width: usize,
    pub height: usize,
    /// Defaults to (1, 1)
    pub start: Option<(i32, i32)>,
    /// Defaults to (width - 2, height - 2)
    pub goal: Option<(i32, i32)>,
    /// Fixed RNG seed for reproducible mazes
    pub seed: Option<u64>,
    /// Regeneration attempts used by `MazeGenerator::generate_solvable`
    pub max_attempts: u32,
    /// Pipeline for bare mazes; word-maze levels pick their own
    pub style: MazeStyle,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: MAZE_DEFAULT_WIDTH,
            height: MAZE_DEFAULT_HEIGHT,
            start: None,
            goal: None,
            seed: None,
            max_attempts: MAZE_DEFAULT_MAX_ATTEMPTS,
            style: MazeStyle::default(),
        }
    }
}

impl MazeConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn start(&self) -> (i32, i32) {
        self.start.unwrap_or(MAZE_DEFAULT_START)
    }

    pub fn goal(&self) -> (i32, i32) {
        self.goal
            .unwrap_or((self.width as i32 - 2, self.height as i32 - 2))
    }

    /// Check dimensions and that start/goal sit inside the border ring.
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.width < MAZE_MIN_DIMENSION || self.height < MAZE_MIN_DIMENSION {
            return Err(MazeError::TooSmall {
                width: self.width,
                height: self.height,
            });
        }

        let interior = |(x, y): (i32, i32)| {
            x >= 1 && y >= 1 && x <= self.width as i32 - 2 && y <= self.height as i32 - 2
        };
        for (what, (x, y)) in [("start", self.start()), ("goal", self.goal())] {
            if !interior((x, y)) {
                return Err(MazeError::OutOfInterior { what, x, y });
            }
        }

        if self.max_attempts == 0 {
            return Err(MazeError::Config("max_attempts must be at least 1".into()));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, MazeError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| MazeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, MazeError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| MazeError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }
}
