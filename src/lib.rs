//! Procedural maze generation for the word-maze game.
//!
//! [`MazeGenerator`] carves recursive-backtracking mazes and relaxes them with
//! shortcuts, dead-end pockets and loops. [`WordMaze`] layers the game rules
//! on top: letters hidden in walls that must be collected in sentence order.

pub mod cell;
pub mod config;
pub mod constants;
pub mod error;
pub mod grid;
pub mod maze_gen;
pub mod pathfinding;
pub mod sentences;
pub mod word_maze;

pub use cell::Cell;
pub use config::MazeConfig;
pub use error::MazeError;
pub use grid::Grid;
pub use maze_gen::{MazeGenerator, MazeStyle};
pub use word_maze::{Direction, LetterWall, MoveOutcome, WordMaze};
