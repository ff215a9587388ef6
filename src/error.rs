use std::fmt;

/// Errors raised while configuring or generating a maze
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Requested dimensions leave no room for the start/goal layout
    TooSmall { width: usize, height: usize },
    /// A start or goal cell lies on the border or outside the grid
    OutOfInterior { what: &'static str, x: i32, y: i32 },
    /// Every regeneration attempt left start and goal disconnected
    Unsolvable { attempts: u32 },
    /// Config file could not be read or parsed
    Config(String),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::TooSmall { width, height } => write!(
                f,
                "maze of {width}x{height} is too small (minimum {min}x{min})",
                min = crate::constants::MAZE_MIN_DIMENSION
            ),
            MazeError::OutOfInterior { what, x, y } => {
                write!(f, "{what} ({x}, {y}) is not an interior cell")
            }
            MazeError::Unsolvable { attempts } => {
                write!(f, "no solvable maze after {attempts} attempts")
            }
            MazeError::Config(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for MazeError {}
