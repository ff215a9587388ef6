use crate::cell::Cell;
use crate::config::MazeConfig;
use crate::constants::*;
use crate::error::MazeError;
use crate::grid::Grid;
use crate::pathfinding;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which generation pipeline to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MazeStyle {
    /// Straight corridor lattice with random blocks, for introductory levels
    Simple,
    /// Backtracking maze plus shortcut openings
    #[default]
    Standard,
    /// Standard maze plus dead-end pockets and loop rings
    Complex,
}

/// Room steps used by the backtracking carve: up, right, down, left
const CARVE_DIRECTIONS: [(i32, i32); 4] = [
    (0, -MAZE_CARVE_STEP),
    (MAZE_CARVE_STEP, 0),
    (0, MAZE_CARVE_STEP),
    (-MAZE_CARVE_STEP, 0),
];

/// Builds mazes for one validated config. Each `generate*` call returns a fresh grid.
pub struct MazeGenerator {
    config: MazeConfig,
    rng: StdRng,
}

impl MazeGenerator {
    /// Seeds from `config.seed` when present, otherwise from OS entropy.
    pub fn new(config: MazeConfig) -> Result<Self, MazeError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: MazeConfig, rng: StdRng) -> Result<Self, MazeError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// All-wall grid sized to the config
    pub fn initialize(&self) -> Grid {
        Grid::new(self.config.width, self.config.height)
    }

    /// Backtracking maze with random shortcut openings.
    pub fn generate(&mut self) -> Grid {
        puffin::profile_function!();
        let mut grid = self.initialize();
        self.carve_backtrack(&mut grid);
        self.add_random_openings(&mut grid);
        info!(
            "Generated {}x{} maze ({} path cells)",
            grid.width,
            grid.height,
            grid.count(Cell::Path)
        );
        grid
    }

    /// Backtracking maze without post-processing (a spanning tree of rooms).
    pub fn generate_perfect(&mut self) -> Grid {
        puffin::profile_function!();
        let mut grid = self.initialize();
        self.carve_backtrack(&mut grid);
        grid
    }

    /// Corridor lattice: every odd row, every fourth column from 3, then random blocks.
    /// Start and goal stay open but nothing else checks reachability.
    pub fn generate_simple(&mut self) -> Grid {
        puffin::profile_function!();
        let mut grid = self.initialize();
        let width = grid.width as i32;
        let height = grid.height as i32;

        {
            puffin::profile_scope!("simple_corridors");
            for y in (1..height).step_by(2) {
                for x in 1..width - 1 {
                    grid.set(x, y, Cell::Path);
                }
            }
            for x in (MAZE_SIMPLE_FIRST_COLUMN as i32..width).step_by(MAZE_SIMPLE_COLUMN_SPACING) {
                for y in 1..height - 1 {
                    grid.set(x, y, Cell::Path);
                }
            }
        }

        let start = self.config.start();
        let goal = self.config.goal();
        let attempts = (grid.width as f64 * grid.height as f64 * MAZE_SIMPLE_BLOCK_RATIO) as usize;
        let mut blocked = 0;
        puffin::profile_scope!("simple_blocking");
        for _ in 0..attempts {
            let x = self.rng.gen_range(2..=width - 3);
            let y = self.rng.gen_range(2..=height - 3);
            if grid.get(x, y) == Some(Cell::Path) && (x, y) != start && (x, y) != goal {
                grid.set(x, y, Cell::Wall);
                blocked += 1;
            }
        }
        debug!("Simple maze: blocked {blocked} of {attempts} probes");
        grid
    }

    /// Standard maze plus dead-end pockets and small loop rings.
    pub fn generate_complex(&mut self) -> Grid {
        puffin::profile_function!();
        let mut grid = {
            puffin::profile_scope!("complex_carve");
            self.generate()
        };
        {
            puffin::profile_scope!("complex_dead_ends");
            self.add_dead_ends(&mut grid);
        }
        {
            puffin::profile_scope!("complex_loops");
            self.add_loops(&mut grid);
        }
        grid
    }

    pub fn generate_style(&mut self, style: MazeStyle) -> Grid {
        match style {
            MazeStyle::Simple => self.generate_simple(),
            MazeStyle::Standard => self.generate(),
            MazeStyle::Complex => self.generate_complex(),
        }
    }

    /// Generate until start and goal are connected, up to `config.max_attempts` times.
    /// Start and goal are forced open on every attempt.
    pub fn generate_solvable(&mut self, style: MazeStyle) -> Result<Grid, MazeError> {
        puffin::profile_function!();
        let start = self.config.start();
        let goal = self.config.goal();

        for attempt in 1..=self.config.max_attempts {
            let mut grid = self.generate_style(style);
            grid.set(start.0, start.1, Cell::Path);
            grid.set(goal.0, goal.1, Cell::Path);

            if pathfinding::is_solvable(&grid, start, goal) {
                debug!("Solvable {style:?} maze on attempt {attempt}");
                return Ok(grid);
            }
            warn!("{style:?} maze attempt {attempt} left goal {goal:?} unreachable, regenerating");
        }

        Err(MazeError::Unsolvable {
            attempts: self.config.max_attempts,
        })
    }

    /// Randomized depth-first carve over the odd-offset room lattice rooted at the start.
    pub fn carve_backtrack(&mut self, grid: &mut Grid) {
        puffin::profile_function!();
        let start = self.config.start();
        if !grid.is_interior(start.0, start.1) {
            return;
        }

        let mut stack = vec![start];
        let mut visited = HashSet::from([start]);
        grid.set(start.0, start.1, Cell::Path);

        while let Some(&current) = stack.last() {
            let neighbors = unvisited_neighbors(grid, current, &visited);
            if neighbors.is_empty() {
                stack.pop();
                continue;
            }

            let next = neighbors[self.rng.gen_range(0..neighbors.len())];
            remove_wall(grid, current, next);
            visited.insert(next);
            grid.set(next.0, next.1, Cell::Path);
            stack.push(next);
        }

        debug!("Backtracking visited {} rooms", visited.len());
    }

    /// Probe ~5% of cells and open walls that join exactly two corridors.
    /// Returns the opened cells in the order they were opened.
    pub fn add_random_openings(&mut self, grid: &mut Grid) -> Vec<(i32, i32)> {
        puffin::profile_function!();
        let width = grid.width as i32;
        let height = grid.height as i32;
        if width < 3 || height < 3 {
            return Vec::new();
        }

        let attempts = (grid.width as f64 * grid.height as f64 * MAZE_OPENING_RATIO) as usize;
        let mut opened = Vec::new();
        for _ in 0..attempts {
            let x = self.rng.gen_range(1..=width - 2);
            let y = self.rng.gen_range(1..=height - 2);

            if grid.get(x, y) == Some(Cell::Wall) && should_open_wall(grid, x, y) {
                grid.set(x, y, Cell::Path);
                opened.push((x, y));
            }
        }

        debug!("Opened {} shortcuts from {attempts} probes", opened.len());
        opened
    }

    /// Clear 3x3 pockets around random path cells, then maybe wall the east/south exits.
    pub fn add_dead_ends(&mut self, grid: &mut Grid) {
        puffin::profile_function!();
        let width = grid.width as i32;
        let height = grid.height as i32;
        if width < 5 || height < 5 {
            return;
        }

        let count = self.rng.gen_range(MAZE_DEAD_END_MIN..=MAZE_DEAD_END_MAX);
        for _ in 0..count {
            let x = self.rng.gen_range(2..=width - 3);
            let y = self.rng.gen_range(2..=height - 3);
            if grid.get(x, y) != Some(Cell::Path) {
                continue;
            }

            for dy in -1..=1 {
                for dx in -1..=1 {
                    grid.set_interior(x + dx, y + dy, Cell::Path);
                }
            }

            if self.rng.gen_bool(MAZE_DEAD_END_BLOCK_CHANCE) {
                grid.set_interior(x + 1, y, Cell::Wall);
            }
            if self.rng.gen_bool(MAZE_DEAD_END_BLOCK_CHANCE) {
                grid.set_interior(x, y + 1, Cell::Wall);
            }
        }
        debug!("Tried {count} dead-end pockets");
    }

    /// Clear the 8-cell ring around a few random centers.
    pub fn add_loops(&mut self, grid: &mut Grid) {
        puffin::profile_function!();
        let width = grid.width as i32;
        let height = grid.height as i32;

        let count = self.rng.gen_range(MAZE_LOOP_MIN..=MAZE_LOOP_MAX);
        for _ in 0..count {
            let cx = self.rng.gen_range(3..=(width - 4).max(3));
            let cy = self.rng.gen_range(3..=(height - 4).max(3));

            for dy in -1..=1 {
                for dx in -1..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    grid.set_interior(cx + dx, cy + dy, Cell::Path);
                }
            }
        }
        debug!("Added {count} loop rings");
    }
}

/// Rooms two steps away inside `1..dim-1` that have not been carved yet
fn unvisited_neighbors(
    grid: &Grid,
    cell: (i32, i32),
    visited: &HashSet<(i32, i32)>,
) -> Vec<(i32, i32)> {
    CARVE_DIRECTIONS
        .iter()
        .map(|(dx, dy)| (cell.0 + dx, cell.1 + dy))
        .filter(|&(nx, ny)| grid.is_interior(nx, ny) && !visited.contains(&(nx, ny)))
        .collect()
}

/// Open the wall cell halfway between two rooms
fn remove_wall(grid: &mut Grid, current: (i32, i32), next: (i32, i32)) {
    let wall_x = current.0 + (next.0 - current.0) / 2;
    let wall_y = current.1 + (next.1 - current.1) / 2;
    grid.set(wall_x, wall_y, Cell::Path);
}

/// A wall is worth opening when it joins exactly two corridors
fn should_open_wall(grid: &Grid, x: i32, y: i32) -> bool {
    grid.path_neighbors(x, y) == MAZE_OPENING_NEIGHBORS
}
