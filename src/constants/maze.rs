//! Maze generation constants.

/// Smallest width or height a generator accepts
pub const MAZE_MIN_DIMENSION: usize = 6;
/// Default maze width
pub const MAZE_DEFAULT_WIDTH: usize = 20;
/// Default maze height
pub const MAZE_DEFAULT_HEIGHT: usize = 15;
/// Default start cell (the goal defaults to the opposite interior corner)
pub const MAZE_DEFAULT_START: (i32, i32) = (1, 1);
/// Distance between lattice rooms during backtracking
pub const MAZE_CARVE_STEP: i32 = 2;

/// Fraction of cells probed for shortcut openings
pub const MAZE_OPENING_RATIO: f64 = 0.05;
/// Path neighbors a wall needs before it is opened as a shortcut
pub const MAZE_OPENING_NEIGHBORS: usize = 2;

/// Fraction of cells probed for re-walling in the simple generator
pub const MAZE_SIMPLE_BLOCK_RATIO: f64 = 0.1;
/// Column spacing of vertical corridors in the simple generator
pub const MAZE_SIMPLE_COLUMN_SPACING: usize = 4;
/// First column with a vertical corridor in the simple generator
pub const MAZE_SIMPLE_FIRST_COLUMN: usize = 3;

/// Dead-end pockets added by the complex generator (inclusive range)
pub const MAZE_DEAD_END_MIN: usize = 3;
pub const MAZE_DEAD_END_MAX: usize = 7;
/// Chance of re-walling each pocket exit
pub const MAZE_DEAD_END_BLOCK_CHANCE: f64 = 0.5;

/// Loop rings added by the complex generator (inclusive range)
pub const MAZE_LOOP_MIN: usize = 2;
pub const MAZE_LOOP_MAX: usize = 4;

/// Regeneration attempts before giving up on a solvable maze
pub const MAZE_DEFAULT_MAX_ATTEMPTS: u32 = 8;
