use crate::error::Error;
use crate::grid::{Grid, Position};
use crate::puzzle::Difficulty;
use log::debug;
use rand::Rng;

/// Total-draw ceiling across one carve. Expected draws are a few hundred
/// even at Hard; this only trips on a broken random source.
const CARVE_DRAW_LIMIT: u32 = 81_000;

/// Carve a playable grid out of a solved one by clearing
/// [`removed_cells`](Difficulty::removed_cells) cells at uniformly
/// random positions.
///
/// Removal is unconditional: no solvability or uniqueness check is made
/// afterwards, so the carved puzzle may admit solutions other than the
/// one it was carved from.
pub(crate) fn carve<R: Rng>(
    solution: &Grid,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Grid, Error> {
    let mut grid = solution.clone();
    let mut remaining = difficulty.removed_cells();
    let mut draws = 0;

    while remaining > 0 {
        draws += 1;
        if draws > CARVE_DRAW_LIMIT {
            return Err(Error::GenerationFailed { attempts: draws });
        }
        let pos = Position::new(rng.gen_range(0..9), rng.gen_range(0..9));
        if grid.get(pos) != 0 {
            grid.clear(pos);
            remaining -= 1;
        }
    }

    debug!(
        "carved {} cells for {difficulty}, {} draws",
        difficulty.removed_cells(),
        draws
    );
    Ok(grid)
}
