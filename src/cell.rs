use serde::{Deserialize, Serialize};

/// State of a single maze cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Wall,
    Path,
}

impl Cell {
    pub fn is_walkable(&self) -> bool {
        matches!(self, Cell::Path)
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Cell::Wall)
    }

    /// Character used when printing a grid as text
    pub fn glyph(&self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Path => '.',
        }
    }
}
