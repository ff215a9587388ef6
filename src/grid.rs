use crate::cell::Cell;
use std::fmt;

/// Orthogonal neighbor offsets: up, right, down, left
pub const ORTHOGONAL: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// A width x height maze addressed by (x, y). Stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate a grid with every cell set to `Cell::Wall`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Wall; width * height],
        }
    }

    /// Parse a grid from text rows where `#` is a wall and anything else is path.
    /// Rows shorter than the first are padded with walls.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().take(width).enumerate() {
                if ch != '#' {
                    grid.set(x as i32, y as i32, Cell::Path);
                }
            }
        }
        grid
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// True for cells off the outer border ring
    pub fn is_interior(&self, x: i32, y: i32) -> bool {
        x >= 1 && y >= 1 && x < self.width as i32 - 1 && y < self.height as i32 - 1
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        let idx = self.index(x, y)?;
        Some(&mut self.cells[idx])
    }

    /// Set a cell. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    /// Set a cell only when it lies in the interior.
    pub fn set_interior(&mut self, x: i32, y: i32, cell: Cell) {
        if self.is_interior(x, y) {
            self.set(x, y, cell);
        }
    }

    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(|c| c.is_walkable())
    }

    /// Number of in-bounds orthogonal neighbors that are path
    pub fn path_neighbors(&self, x: i32, y: i32) -> usize {
        ORTHOGONAL
            .iter()
            .filter(|(dx, dy)| self.is_walkable(x + dx, y + dy))
            .count()
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// All path coordinates in row-major order
    pub fn path_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.is_walkable()
                .then(|| ((idx % self.width) as i32, (idx / self.width) as i32))
        })
    }

    /// Column-major copy indexed `[x][y]`
    pub fn columns(&self) -> Vec<Vec<Cell>> {
        (0..self.width)
            .map(|x| {
                (0..self.height)
                    .map(|y| self.cells[y * self.width + x])
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            let line: String = row.iter().map(Cell::glyph).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
