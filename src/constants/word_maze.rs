//! Word-maze level constants (scoring, layout fix-ups).

/// Points for collecting the expected letter
pub const SCORE_LETTER: u32 = 50;
/// Bonus for finishing a level
pub const SCORE_LEVEL_COMPLETE: u32 = 100;

/// Chance of opening each cell on the alternate rows of the level 1 path
pub const LEVEL_ONE_ALTERNATE_CHANCE: f64 = 0.3;
/// Levels above this get extra clearings
pub const CLEARINGS_AFTER_LEVEL: u32 = 2;
/// Clearings carved on harder levels
pub const CLEARING_COUNT: usize = 3;
/// Side length of the open block cleared at the start
pub const START_CLEARING_SIZE: i32 = 3;

/// Highest level with its own sentence list
pub const MAX_SENTENCE_LEVEL: u32 = 5;
