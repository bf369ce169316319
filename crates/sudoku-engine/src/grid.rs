use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::ops::Index;

/// A cell coordinate on the 9x9 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater.
    pub fn new(row: usize, col: usize) -> Self {
        assert!(row < 9 && col < 9, "position ({row}, {col}) out of bounds");
        Self { row, col }
    }

    /// Iterate over all 81 positions in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..81).map(Position::from_index)
    }

    /// Position for a row-major cell index in 0..81
    pub(crate) fn from_index(index: usize) -> Self {
        Self::new(index / 9, index % 9)
    }

    /// Top-left corner of the 3x3 box containing this position
    pub fn box_origin(&self) -> Position {
        Position {
            row: self.row - self.row % 3,
            col: self.col - self.col % 3,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row + 1, self.col + 1)
    }
}

/// A 9x9 grid of cell values.
///
/// Values are in `0..=9`, with 0 meaning empty. The grid stores values
/// only; whether a cell is a given belongs to [`Givens`](crate::Givens).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; 9]; 9],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self { cells: [[0; 9]; 9] }
    }

    /// Get the value at a position (0 = empty)
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Set the value at a position. 0 clears the cell.
    ///
    /// Values above 9 are a caller error and are rejected rather than
    /// stored.
    pub fn set(&mut self, pos: Position, value: u8) -> Result<(), Error> {
        if value > 9 {
            return Err(Error::ValueOutOfRange { value });
        }
        self.cells[pos.row][pos.col] = value;
        Ok(())
    }

    /// Set a value already known to be in range
    pub(crate) fn set_raw(&mut self, pos: Position, value: u8) {
        debug_assert!(value <= 9);
        self.cells[pos.row][pos.col] = value;
    }

    /// Clear a cell
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = 0;
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        Position::all().filter(|&p| self.get(p) != 0).count()
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        81 - self.filled_count()
    }

    /// Whether every cell is non-empty
    pub fn is_full(&self) -> bool {
        Position::all().all(|p| self.get(p) != 0)
    }

    /// Parse a grid from an 81-character string in row-major order.
    ///
    /// Digits 1-9 are values; '0' and '.' are empty cells. Returns `None`
    /// for any other character or a wrong length.
    pub fn from_string(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.len() != 81 {
            return None;
        }
        let mut grid = Self::new();
        for (i, c) in s.chars().enumerate() {
            let value = match c {
                '0' | '.' => 0,
                '1'..='9' => c as u8 - b'0',
                _ => return None,
            };
            grid.set_raw(Position::from_index(i), value);
        }
        Some(grid)
    }

    /// The 81-character row-major form accepted by [`Grid::from_string`]
    pub fn to_string_compact(&self) -> String {
        Position::all()
            .map(|p| (b'0' + self.get(p)) as char)
            .collect()
    }
}

impl Index<Position> for Grid {
    type Output = u8;

    fn index(&self, pos: Position) -> &u8 {
        &self.cells[pos.row][pos.col]
    }
}

impl TryFrom<[[u8; 9]; 9]> for Grid {
    type Error = Error;

    fn try_from(cells: [[u8; 9]; 9]) -> Result<Self, Error> {
        for row in &cells {
            for &value in row {
                if value > 9 {
                    return Err(Error::ValueOutOfRange { value });
                }
            }
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            if row > 0 && row % 3 == 0 {
                writeln!(f, "------+-------+------")?;
            }
            for col in 0..9 {
                if col > 0 {
                    write!(f, "{}", if col % 3 == 0 { " | " } else { " " })?;
                }
                match self.cells[row][col] {
                    0 => write!(f, ".")?,
                    v => write!(f, "{v}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
