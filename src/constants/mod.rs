//! Tuning constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.

mod maze;
mod word_maze;

pub use maze::*;
pub use word_maze::*;
