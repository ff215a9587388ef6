//! Word-maze level rules: layout fix-ups, letter walls and ordered collection.
//!
//! A level is a standard maze with letters hidden in wall cells. The player
//! breaks through a letter wall only when it holds the next letter of the
//! sentence, and the level ends on the first plain move after the last letter.

use crate::cell::Cell;
use crate::config::MazeConfig;
use crate::constants::*;
use crate::error::MazeError;
use crate::grid::Grid;
use crate::maze_gen::MazeGenerator;
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    fn from_delta(delta: (i32, i32)) -> Option<Self> {
        match delta {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

/// A wall cell carrying one letter of the sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterWall {
    pub x: i32,
    pub y: i32,
    pub letter: char,
    /// Position of the letter in the sentence (spaces removed)
    pub index: usize,
    pub collected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// Broke through the expected letter wall
    Collected(char),
    /// Bumped a letter wall out of order; the player stays put
    WrongLetter(char),
    Blocked,
    LevelComplete,
}

/// Build the maze for a level: standard generation, start and goal forced open,
/// a guaranteed route on level 1, extra clearings past level 2, and an open
/// block at the start.
pub fn layout_level(generator: &mut MazeGenerator, level: u32) -> Grid {
    puffin::profile_function!();
    let start = generator.config().start();
    let goal = generator.config().goal();

    let mut grid = generator.generate();
    grid.set(start.0, start.1, Cell::Path);
    grid.set(goal.0, goal.1, Cell::Path);

    if level <= 1 {
        carve_guaranteed_path(&mut grid, start, goal, generator.rng_mut());
    } else if level > CLEARINGS_AFTER_LEVEL {
        add_clearings(&mut grid, generator.rng_mut());
    }

    clear_around_start(&mut grid, start);
    grid
}

/// L-shaped route along the start row then down the goal column,
/// plus scattered openings on the rows next to it.
fn carve_guaranteed_path(grid: &mut Grid, start: (i32, i32), goal: (i32, i32), rng: &mut impl Rng) {
    let (mut x, mut y) = start;
    let step_x = (goal.0 - start.0).signum();
    while x != goal.0 {
        grid.set_interior(x, y, Cell::Path);
        x += step_x;
    }

    let step_y = (goal.1 - start.1).signum();
    while y != goal.1 {
        grid.set_interior(x, y, Cell::Path);
        y += step_y;
    }

    for x in 2..=grid.width as i32 - 4 {
        if rng.gen_bool(LEVEL_ONE_ALTERNATE_CHANCE) {
            grid.set_interior(x, start.1 + 1, Cell::Path);
        }
        if rng.gen_bool(LEVEL_ONE_ALTERNATE_CHANCE) {
            grid.set_interior(x, goal.1 - 1, Cell::Path);
        }
    }
}

fn add_clearings(grid: &mut Grid, rng: &mut impl Rng) {
    let width = grid.width as i32;
    let height = grid.height as i32;
    for _ in 0..CLEARING_COUNT {
        let x = rng.gen_range(2..=width - 3);
        let y = rng.gen_range(2..=height - 3);
        for dy in -1..=1 {
            for dx in -1..=1 {
                grid.set_interior(x + dx, y + dy, Cell::Path);
            }
        }
    }
}

fn clear_around_start(grid: &mut Grid, start: (i32, i32)) {
    for dy in 0..START_CLEARING_SIZE {
        for dx in 0..START_CLEARING_SIZE {
            grid.set_interior(start.0 + dx, start.1 + dy, Cell::Path);
        }
    }
}

/// Hide the sentence's letters (whitespace removed, in order) in shuffled wall
/// cells that touch at least one path. Letters beyond the candidate count are dropped.
pub fn place_letters(grid: &Grid, sentence: &str, rng: &mut impl Rng) -> Vec<LetterWall> {
    let width = grid.width as i32;
    let height = grid.height as i32;

    let mut candidates = Vec::new();
    for x in 2..=width - 3 {
        for y in 2..=height - 3 {
            if grid.get(x, y) == Some(Cell::Wall) && grid.path_neighbors(x, y) >= 1 {
                candidates.push((x, y));
            }
        }
    }
    candidates.shuffle(rng);

    let letters: Vec<LetterWall> = sentence
        .chars()
        .filter(|c| !c.is_whitespace())
        .zip(candidates)
        .enumerate()
        .map(|(index, (letter, (x, y)))| LetterWall {
            x,
            y,
            letter,
            index,
            collected: false,
        })
        .collect();

    debug!("Placed {} letters for {sentence:?}", letters.len());
    letters
}

/// One word-maze session: the current level's grid, letters, player and score.
pub struct WordMaze {
    generator: MazeGenerator,
    grid: Grid,
    letters: Vec<LetterWall>,
    sentence: String,
    player: (i32, i32),
    level: u32,
    score: u32,
    target_index: usize,
    collected: Vec<char>,
    complete: bool,
}

impl WordMaze {
    pub fn new(config: MazeConfig, level: u32, sentence: &str) -> Result<Self, MazeError> {
        let generator = MazeGenerator::new(config)?;
        Ok(Self::from_generator(generator, level, sentence))
    }

    pub fn from_generator(generator: MazeGenerator, level: u32, sentence: &str) -> Self {
        let start = generator.config().start();
        let mut game = Self {
            generator,
            grid: Grid::new(0, 0),
            letters: Vec::new(),
            sentence: String::new(),
            player: start,
            level: level.max(1),
            score: 0,
            target_index: 0,
            collected: Vec::new(),
            complete: false,
        };
        game.setup_level(sentence);
        game
    }

    fn setup_level(&mut self, sentence: &str) {
        self.grid = layout_level(&mut self.generator, self.level);
        self.letters = place_letters(&self.grid, sentence, self.generator.rng_mut());
        self.sentence = sentence.to_string();
        self.player = self.generator.config().start();
        self.target_index = 0;
        self.collected.clear();
        self.complete = false;
        info!("Level {} ready: {:?}", self.level, self.sentence);
    }

    /// Move to the next level with a new sentence. Score carries over.
    pub fn advance_level(&mut self, sentence: &str) {
        self.level += 1;
        self.setup_level(sentence);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn letters(&self) -> &[LetterWall] {
        &self.letters
    }

    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    pub fn player(&self) -> (i32, i32) {
        self.player
    }

    pub fn goal(&self) -> (i32, i32) {
        self.generator.config().goal()
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn collected(&self) -> &[char] {
        &self.collected
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Next letter to collect, None once every placed letter is taken
    pub fn expected_letter(&self) -> Option<char> {
        self.letters.get(self.target_index).map(|lw| lw.letter)
    }

    pub fn remaining_letters(&self) -> usize {
        self.letters.len() - self.target_index
    }

    pub fn letter_at(&self, x: i32, y: i32) -> Option<&LetterWall> {
        self.letters
            .iter()
            .find(|lw| lw.x == x && lw.y == y && !lw.collected)
    }

    pub fn try_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.complete {
            return MoveOutcome::Blocked;
        }

        let (dx, dy) = direction.delta();
        let (nx, ny) = (self.player.0 + dx, self.player.1 + dy);
        if !self.grid.in_bounds(nx, ny) {
            return MoveOutcome::Blocked;
        }

        if let Some(wall) = self.letter_at(nx, ny).copied() {
            return self.hit_letter_wall(wall);
        }

        if !self.grid.is_walkable(nx, ny) {
            return MoveOutcome::Blocked;
        }

        self.player = (nx, ny);
        if self.remaining_letters() == 0 {
            self.complete = true;
            self.score += SCORE_LEVEL_COMPLETE;
            info!("Level {} complete, score {}", self.level, self.score);
            return MoveOutcome::LevelComplete;
        }
        MoveOutcome::Moved
    }

    fn hit_letter_wall(&mut self, wall: LetterWall) -> MoveOutcome {
        if Some(wall.letter) != self.expected_letter() {
            debug!("Wrong letter {:?} at ({}, {})", wall.letter, wall.x, wall.y);
            return MoveOutcome::WrongLetter(wall.letter);
        }

        if let Some(lw) = self
            .letters
            .iter_mut()
            .find(|lw| lw.x == wall.x && lw.y == wall.y)
        {
            lw.collected = true;
        }
        self.collected.push(wall.letter);
        self.target_index += 1;
        self.player = (wall.x, wall.y);
        self.grid.set(wall.x, wall.y, Cell::Path);
        self.score += SCORE_LETTER;
        MoveOutcome::Collected(wall.letter)
    }

    /// Greedy step toward the goal: dominant axis first, then the other axis
    /// both ways, then back. Falls back to right, left, down, up.
    pub fn hint_direction(&self) -> Option<Direction> {
        let goal = self.goal();
        let dx = goal.0 - self.player.0;
        let dy = goal.1 - self.player.1;
        let sx = if dx > 0 { 1 } else { -1 };
        let sy = if dy > 0 { 1 } else { -1 };

        let preferred = if dx.abs() > dy.abs() {
            [(sx, 0), (0, sy), (0, -sy), (-sx, 0)]
        } else {
            [(0, sy), (sx, 0), (-sx, 0), (0, -sy)]
        };
        let fallback = [(1, 0), (-1, 0), (0, 1), (0, -1)];

        preferred
            .into_iter()
            .chain(fallback)
            .find(|(mx, my)| self.grid.is_walkable(self.player.0 + mx, self.player.1 + my))
            .and_then(Direction::from_delta)
    }
}

impl fmt::Display for WordMaze {
    /// `@` player, `S`/`G` start and goal, letters for uncollected letter walls
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.generator.config().start();
        let goal = self.goal();
        for y in 0..self.grid.height as i32 {
            let line: String = (0..self.grid.width as i32)
                .map(|x| {
                    if (x, y) == self.player {
                        '@'
                    } else if let Some(lw) = self.letter_at(x, y) {
                        lw.letter
                    } else if (x, y) == goal {
                        'G'
                    } else if (x, y) == start {
                        'S'
                    } else {
                        self.grid.get(x, y).map(|c| c.glyph()).unwrap_or(' ')
                    }
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathfinding::{flood_fill, is_solvable};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(level: u32, sentence: &str, seed: u64) -> WordMaze {
        WordMaze::new(MazeConfig::default().with_seed(seed), level, sentence).unwrap()
    }

    /// 8x6 corridor: H and I walls at (3, 1) and (4, 1), goal down the right side
    fn corridor_game(letters: &[(char, i32)]) -> WordMaze {
        let mut game = WordMaze::new(MazeConfig::new(8, 6).with_seed(1), 2, "HI").unwrap();
        game.grid = Grid::from_rows(&[
            "########",
            "#..##..#",
            "######.#",
            "######.#",
            "######.#",
            "########",
        ]);
        game.letters = letters
            .iter()
            .enumerate()
            .map(|(index, &(letter, x))| LetterWall {
                x,
                y: 1,
                letter,
                index,
                collected: false,
            })
            .collect();
        game.player = (2, 1);
        game
    }

    #[test]
    fn test_level_one_has_guaranteed_route() {
        for seed in 0..10 {
            let game = seeded(1, "RUN TO WIN", seed);
            let grid = game.grid();
            for x in 1..=18 {
                assert_eq!(grid.get(x, 1), Some(Cell::Path));
            }
            for y in 1..=13 {
                assert_eq!(grid.get(18, y), Some(Cell::Path));
            }
            assert!(is_solvable(grid, (1, 1), (18, 13)));
        }
    }

    #[test]
    fn test_start_block_is_open() {
        for level in 1..=4 {
            let game = seeded(level, "CAT AND DOG", 3);
            for y in 1..=3 {
                for x in 1..=3 {
                    assert_eq!(game.grid().get(x, y), Some(Cell::Path));
                }
            }
            assert_eq!(game.grid().get(18, 13), Some(Cell::Path));
        }
    }

    #[test]
    fn test_layout_keeps_border() {
        for level in 1..=5 {
            let game = seeded(level, "GET THE SUN", level as u64);
            let grid = game.grid();
            for x in 0..20 {
                assert_eq!(grid.get(x, 0), Some(Cell::Wall));
                assert_eq!(grid.get(x, 14), Some(Cell::Wall));
            }
        }
    }

    #[test]
    fn test_letters_sit_in_reachable_walls() {
        for seed in 0..10 {
            let game = seeded(2, "PLAY THE MAZE GAME", seed);
            let grid = game.grid();
            assert_eq!(game.letters().len(), 15);
            let expected: Vec<char> = "PLAYTHEMAZEGAME".chars().collect();
            let placed: Vec<char> = game.letters().iter().map(|lw| lw.letter).collect();
            assert_eq!(placed, expected);

            for (i, lw) in game.letters().iter().enumerate() {
                assert_eq!(lw.index, i);
                assert!((2..=17).contains(&lw.x) && (2..=12).contains(&lw.y));
                assert_eq!(grid.get(lw.x, lw.y), Some(Cell::Wall));
                assert!(grid.path_neighbors(lw.x, lw.y) >= 1);
            }

            let mut spots: Vec<(i32, i32)> = game.letters().iter().map(|lw| (lw.x, lw.y)).collect();
            spots.sort();
            spots.dedup();
            assert_eq!(spots.len(), 15);
        }
    }

    #[test]
    fn test_place_letters_drops_overflow() {
        let grid = Grid::from_rows(&[
            "######",
            "#....#",
            "#.##.#",
            "#....#",
            "######",
        ]);
        let mut rng = StdRng::seed_from_u64(4);
        let letters = place_letters(&grid, "A B C D", &mut rng);
        // Only (2, 2) and (3, 2) are inside [2, w-3] x [2, h-3]
        assert_eq!(letters.len(), 2);
        assert_eq!(letters[0].letter, 'A');
        assert_eq!(letters[1].letter, 'B');
        let mut spots = vec![(letters[0].x, letters[0].y), (letters[1].x, letters[1].y)];
        spots.sort();
        assert_eq!(spots, vec![(2, 2), (3, 2)]);
    }

    #[test]
    fn test_collect_in_order_completes_level() {
        let mut game = corridor_game(&[('H', 3), ('I', 4)]);
        assert_eq!(game.expected_letter(), Some('H'));

        assert_eq!(game.try_move(Direction::Right), MoveOutcome::Collected('H'));
        assert_eq!(game.player(), (3, 1));
        assert_eq!(game.grid().get(3, 1), Some(Cell::Path));
        assert_eq!(game.try_move(Direction::Right), MoveOutcome::Collected('I'));
        assert_eq!(game.remaining_letters(), 0);
        assert_eq!(game.collected(), &['H', 'I']);

        assert_eq!(game.try_move(Direction::Right), MoveOutcome::LevelComplete);
        assert!(game.is_complete());
        assert_eq!(game.score(), 2 * SCORE_LETTER + SCORE_LEVEL_COMPLETE);
        assert_eq!(game.try_move(Direction::Right), MoveOutcome::Blocked);
    }

    #[test]
    fn test_wrong_letter_is_refused() {
        let mut game = corridor_game(&[('H', 4), ('I', 3)]);
        assert_eq!(game.try_move(Direction::Right), MoveOutcome::WrongLetter('I'));
        assert_eq!(game.player(), (2, 1));
        assert_eq!(game.grid().get(3, 1), Some(Cell::Wall));
        assert_eq!(game.score(), 0);
        assert_eq!(game.expected_letter(), Some('H'));
    }

    #[test]
    fn test_walls_and_edges_block() {
        let mut game = corridor_game(&[('H', 3), ('I', 4)]);
        assert_eq!(game.try_move(Direction::Up), MoveOutcome::Blocked);
        assert_eq!(game.try_move(Direction::Left), MoveOutcome::Moved);
        assert_eq!(game.try_move(Direction::Left), MoveOutcome::Blocked);

        game.player = (0, 1);
        assert_eq!(game.try_move(Direction::Left), MoveOutcome::Blocked);
    }

    #[test]
    fn test_hint_direction() {
        let mut game = corridor_game(&[('H', 3), ('I', 4)]);
        game.player = (1, 1);
        assert_eq!(game.hint_direction(), Some(Direction::Right));
        game.player = (2, 1);
        assert_eq!(game.hint_direction(), Some(Direction::Left));
        game.player = (6, 1);
        assert_eq!(game.hint_direction(), Some(Direction::Down));
    }

    #[test]
    fn test_advance_level_resets_position_keeps_score() {
        let mut game = seeded(1, "WIN THE GAME", 8);
        game.score = 150;
        game.player = (5, 5);
        game.advance_level("JUMP TO THE GOAL");
        assert_eq!(game.level(), 2);
        assert_eq!(game.player(), (1, 1));
        assert_eq!(game.score(), 150);
        assert_eq!(game.sentence(), "JUMP TO THE GOAL");
        assert_eq!(game.expected_letter(), Some('J'));
        assert!(!game.is_complete());
    }

    #[test]
    fn test_display_marks_player_goal_and_letters() {
        let game = corridor_game(&[('H', 3), ('I', 4)]);
        let text = game.to_string();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[1], "#S@HI..#");
        assert_eq!(rows[4], "######G#");
    }

    #[test]
    fn test_start_region_connects_to_letters() {
        let game = seeded(2, "CAT AND DOG", 21);
        let region = flood_fill(game.grid(), (1, 1));
        for lw in game.letters() {
            let touches = [(0, -1), (1, 0), (0, 1), (-1, 0)]
                .iter()
                .any(|(dx, dy)| region.contains(&(lw.x + dx, lw.y + dy)));
            assert!(touches, "letter {} at ({}, {}) is cut off", lw.letter, lw.x, lw.y);
        }
    }
}
