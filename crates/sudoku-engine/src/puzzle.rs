use crate::grid::{Grid, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty level of a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl Difficulty {
    /// Number of cells carved out of the solved grid for this level
    pub fn removed_cells(self) -> usize {
        match self {
            Difficulty::Easy => 30,
            Difficulty::Medium => 40,
            Difficulty::Hard => 50,
        }
    }

    /// Number of givens a puzzle of this level starts with
    pub fn given_cells(self) -> usize {
        81 - self.removed_cells()
    }

    /// All difficulty levels, easiest first
    pub fn all_levels() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    /// Parse a level from its display name, case-insensitively.
    ///
    /// Unrecognized names fall back to `Medium` rather than erroring, so
    /// a presentation layer can pass selector text straight through.
    pub fn from_name(name: &str) -> Difficulty {
        match name.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// The 9x9 mask of cells that are givens (pre-filled, not user-editable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Givens {
    mask: [[bool; 9]; 9],
}

impl Givens {
    /// Mark every non-empty cell of `grid` as a given
    pub fn from_grid(grid: &Grid) -> Self {
        let mut mask = [[false; 9]; 9];
        for pos in Position::all() {
            mask[pos.row][pos.col] = grid.get(pos) != 0;
        }
        Self { mask }
    }

    /// Whether the cell at `pos` is a given
    pub fn is_given(&self, pos: Position) -> bool {
        self.mask[pos.row][pos.col]
    }

    /// Number of givens in the mask
    pub fn count(&self) -> usize {
        Position::all().filter(|&p| self.is_given(p)).count()
    }
}

/// A playable puzzle produced by one generate call.
///
/// `grid` is the in-play state the presentation layer mutates on
/// non-given cells; `givens` and `solution` never change after creation.
/// A new generate request replaces the whole value, it is never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// The playable grid, with carved cells empty
    pub grid: Grid,
    /// Which cells are givens
    pub givens: Givens,
    /// The fully solved reference grid
    pub solution: Grid,
}

impl Puzzle {
    /// Whether the cell at `pos` is a given
    pub fn is_given(&self, pos: Position) -> bool {
        self.givens.is_given(pos)
    }

    /// Number of given cells
    pub fn given_count(&self) -> usize {
        self.givens.count()
    }

    /// Number of cells left for the player to fill
    pub fn empty_count(&self) -> usize {
        self.grid.empty_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removal_counts_per_level() {
        assert_eq!(Difficulty::Easy.removed_cells(), 30);
        assert_eq!(Difficulty::Medium.removed_cells(), 40);
        assert_eq!(Difficulty::Hard.removed_cells(), 50);
        assert_eq!(Difficulty::Easy.given_cells(), 51);
    }

    #[test]
    fn from_name_falls_back_to_medium() {
        assert_eq!(Difficulty::from_name("Easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name("hard"), Difficulty::Hard);
        assert_eq!(Difficulty::from_name("MEDIUM"), Difficulty::Medium);
        assert_eq!(Difficulty::from_name("brutal"), Difficulty::Medium);
        assert_eq!(Difficulty::from_name(""), Difficulty::Medium);
    }

    #[test]
    fn givens_track_non_empty_cells() {
        let mut grid = Grid::new();
        grid.set(Position::new(2, 3), 7).unwrap();
        grid.set(Position::new(8, 0), 1).unwrap();
        let givens = Givens::from_grid(&grid);
        assert_eq!(givens.count(), 2);
        assert!(givens.is_given(Position::new(2, 3)));
        assert!(givens.is_given(Position::new(8, 0)));
        assert!(!givens.is_given(Position::new(0, 0)));
    }
}
