//! Constraint checking: per-cell legality and whole-grid verdicts.
//!
//! Everything here is a pure function over a borrowed grid; nothing is
//! mutated and nothing fails on well-formed input.

use crate::error::Error;
use crate::grid::{Grid, Position};
use crate::puzzle::Givens;
use serde::{Deserialize, Serialize};

/// Outcome of checking an in-progress grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Every cell is filled and no constraint is violated
    Solved,
    /// At least one filled cell conflicts with its row, column, or box
    Invalid { conflicts: Vec<Position> },
    /// No conflicts, but empty cells remain
    Incomplete,
}

/// Would placing `value` at `pos` violate a row, column, or box
/// constraint?
///
/// The cell at `pos` itself is excluded from every comparison, so an
/// already-placed value can be re-validated in place without clearing it
/// first. 27 comparisons, no allocation.
pub(crate) fn is_legal(grid: &Grid, pos: Position, value: u8) -> bool {
    for col in 0..9 {
        if col != pos.col && grid.get(Position::new(pos.row, col)) == value {
            return false;
        }
    }
    for row in 0..9 {
        if row != pos.row && grid.get(Position::new(row, pos.col)) == value {
            return false;
        }
    }
    let origin = pos.box_origin();
    for row in origin.row..origin.row + 3 {
        for col in origin.col..origin.col + 3 {
            if (row, col) != (pos.row, pos.col) && grid.get(Position::new(row, col)) == value {
                return false;
            }
        }
    }
    true
}

/// Check whether `value` may be placed at `pos` without conflicting with
/// any other cell.
///
/// This is the live-feedback surface for a presentation layer: call it as
/// the user types to highlight conflicts without a full [`check`] pass.
/// `value` must be in 1..=9; anything else is a caller error.
pub fn is_legal_placement(grid: &Grid, pos: Position, value: u8) -> Result<bool, Error> {
    if value == 0 || value > 9 {
        return Err(Error::ValueOutOfRange { value });
    }
    Ok(is_legal(grid, pos, value))
}

/// All filled cells whose value also occurs elsewhere in their row,
/// column, or box, in row-major order
pub fn conflicts(grid: &Grid) -> Vec<Position> {
    Position::all()
        .filter(|&pos| {
            let value = grid.get(pos);
            value != 0 && !is_legal(grid, pos, value)
        })
        .collect()
}

/// Check an in-progress grid against the Sudoku constraints.
///
/// The verdict depends only on cell values; the givens mask is accepted
/// so callers can hand over their whole play state, but it does not
/// change the outcome.
pub fn check(grid: &Grid, _givens: &Givens) -> Verdict {
    let conflicts = conflicts(grid);
    if !conflicts.is_empty() {
        Verdict::Invalid { conflicts }
    } else if grid.is_full() {
        Verdict::Solved
    } else {
        Verdict::Incomplete
    }
}
