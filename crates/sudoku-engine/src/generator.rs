use crate::carver;
use crate::error::Error;
use crate::grid::{Grid, Position};
use crate::puzzle::{Difficulty, Givens, Puzzle};
use crate::validate::is_legal;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Rejection-sampling ceiling per seeded cell. A legal value always
/// exists while a diagonal box is being filled, so this only trips on a
/// broken random source.
const BOX_SEED_DRAW_LIMIT: u32 = 729;

/// Ceiling on total placements during the backtracking search. A
/// diagonally seeded grid completes in well under a thousand placements;
/// the cap exists so a pathological run fails loudly instead of spinning.
const SOLVE_PLACEMENT_LIMIT: u32 = 250_000;

/// Sudoku puzzle generator.
///
/// Holds the injected random source; every other piece of state lives
/// only for the duration of one [`generate`](Generator::generate) call,
/// so a single generator can be reused across calls and the same seed
/// always reproduces the same puzzle.
pub struct Generator<R: Rng = StdRng> {
    rng: R,
}

impl Generator<StdRng> {
    /// Create a generator seeded from system entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for Generator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Generator<R> {
    /// Create a generator around an existing random source
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a puzzle at the requested difficulty.
    ///
    /// Produces a fully solved grid by diagonal-box seeding followed by
    /// randomized backtracking, then carves
    /// [`removed_cells`](Difficulty::removed_cells) cells out of a copy
    /// to make the playable grid. The only failure mode is a defensive
    /// attempt ceiling, which a correct run never reaches.
    pub fn generate(&mut self, difficulty: Difficulty) -> Result<Puzzle, Error> {
        let solution = self.fill_grid()?;
        debug!("solved grid:\n{solution}");

        let grid = carver::carve(&solution, difficulty, &mut self.rng)?;
        let givens = Givens::from_grid(&grid);
        Ok(Puzzle {
            grid,
            givens,
            solution,
        })
    }

    /// Produce a complete valid grid
    fn fill_grid(&mut self) -> Result<Grid, Error> {
        let mut grid = Grid::new();

        // The three diagonal boxes share no row or column, so each can
        // be seeded independently of the others.
        for origin in [(0, 0), (3, 3), (6, 6)] {
            self.fill_box(&mut grid, origin.0, origin.1)?;
        }

        let mut placements = 0;
        if self.solve_from(&mut grid, 0, &mut placements)? {
            Ok(grid)
        } else {
            // Unreachable from a legally seeded diagonal start; getting
            // here means the search itself is broken.
            Err(Error::GenerationFailed {
                attempts: placements,
            })
        }
    }

    /// Fill one 3x3 box with random values by rejection sampling
    fn fill_box(&mut self, grid: &mut Grid, start_row: usize, start_col: usize) -> Result<(), Error> {
        for row in start_row..start_row + 3 {
            for col in start_col..start_col + 3 {
                let pos = Position::new(row, col);
                let mut draws = 0;
                loop {
                    draws += 1;
                    if draws > BOX_SEED_DRAW_LIMIT {
                        return Err(Error::GenerationFailed { attempts: draws });
                    }
                    let value = self.rng.gen_range(1..=9);
                    if is_legal(grid, pos, value) {
                        grid.set_raw(pos, value);
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Backtracking search over cell indices in row-major order.
    ///
    /// Returns `Ok(true)` once the index runs past the last cell,
    /// `Ok(false)` if every candidate at some cell fails (the caller
    /// then undoes its own placement), and an error only if the
    /// placement ceiling is hit.
    fn solve_from(&mut self, grid: &mut Grid, index: usize, placements: &mut u32) -> Result<bool, Error> {
        if index == 81 {
            return Ok(true);
        }
        let pos = Position::from_index(index);
        if grid.get(pos) != 0 {
            return self.solve_from(grid, index + 1, placements);
        }

        let mut candidates: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        candidates.shuffle(&mut self.rng);

        for &value in &candidates {
            if !is_legal(grid, pos, value) {
                continue;
            }
            *placements += 1;
            if *placements > SOLVE_PLACEMENT_LIMIT {
                return Err(Error::GenerationFailed {
                    attempts: *placements,
                });
            }
            grid.set_raw(pos, value);
            if self.solve_from(grid, index + 1, placements)? {
                return Ok(true);
            }
            grid.clear(pos);
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{check, Verdict};

    fn is_permutation(values: &mut [u8; 9]) -> bool {
        values.sort_unstable();
        *values == [1, 2, 3, 4, 5, 6, 7, 8, 9]
    }

    fn assert_valid_solution(solution: &Grid) {
        for row in 0..9 {
            let mut values = [0u8; 9];
            for col in 0..9 {
                values[col] = solution.get(Position::new(row, col));
            }
            assert!(is_permutation(&mut values), "row {row} is not a permutation");
        }
        for col in 0..9 {
            let mut values = [0u8; 9];
            for row in 0..9 {
                values[row] = solution.get(Position::new(row, col));
            }
            assert!(is_permutation(&mut values), "column {col} is not a permutation");
        }
        for box_row in (0..9).step_by(3) {
            for box_col in (0..9).step_by(3) {
                let mut values = [0u8; 9];
                let mut i = 0;
                for row in box_row..box_row + 3 {
                    for col in box_col..box_col + 3 {
                        values[i] = solution.get(Position::new(row, col));
                        i += 1;
                    }
                }
                assert!(
                    is_permutation(&mut values),
                    "box at ({box_row}, {box_col}) is not a permutation"
                );
            }
        }
    }

    #[test]
    fn solutions_are_valid_across_seeds_and_levels() {
        for seed in [0, 1, 42, 1234, 99999] {
            for &difficulty in Difficulty::all_levels() {
                let mut generator = Generator::with_seed(seed);
                let puzzle = generator.generate(difficulty).unwrap();
                assert_valid_solution(&puzzle.solution);
            }
        }
    }

    #[test]
    fn filled_count_matches_difficulty() {
        let cases = [
            (Difficulty::Easy, 51),
            (Difficulty::Medium, 41),
            (Difficulty::Hard, 31),
        ];
        for (difficulty, expected) in cases {
            let mut generator = Generator::with_seed(42);
            let puzzle = generator.generate(difficulty).unwrap();
            assert_eq!(puzzle.grid.filled_count(), expected);
            assert_eq!(puzzle.given_count(), expected);
        }
    }

    #[test]
    fn givens_agree_with_grid_and_solution() {
        let mut generator = Generator::with_seed(7);
        let puzzle = generator.generate(Difficulty::Medium).unwrap();
        for pos in Position::all() {
            assert_eq!(puzzle.is_given(pos), puzzle.grid.get(pos) != 0);
            if puzzle.is_given(pos) {
                assert_eq!(puzzle.grid.get(pos), puzzle.solution.get(pos));
            }
        }
    }

    #[test]
    fn solution_passes_check() {
        let mut generator = Generator::with_seed(3);
        let puzzle = generator.generate(Difficulty::Hard).unwrap();
        assert_eq!(check(&puzzle.solution, &puzzle.givens), Verdict::Solved);
    }

    #[test]
    fn fresh_puzzle_is_incomplete_but_valid() {
        let mut generator = Generator::with_seed(11);
        let puzzle = generator.generate(Difficulty::Easy).unwrap();
        assert_eq!(check(&puzzle.grid, &puzzle.givens), Verdict::Incomplete);
    }

    #[test]
    fn same_seed_reproduces_the_same_puzzle() {
        let a = Generator::with_seed(42).generate(Difficulty::Medium).unwrap();
        let b = Generator::with_seed(42).generate(Difficulty::Medium).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = Generator::with_seed(1).generate(Difficulty::Medium).unwrap();
        let b = Generator::with_seed(2).generate(Difficulty::Medium).unwrap();
        assert_ne!(a.solution, b.solution);
    }

    #[test]
    fn generator_can_be_reused_across_calls() {
        let mut generator = Generator::with_seed(5);
        let a = generator.generate(Difficulty::Easy).unwrap();
        let b = generator.generate(Difficulty::Easy).unwrap();
        assert_valid_solution(&a.solution);
        assert_valid_solution(&b.solution);
        assert_ne!(a.solution, b.solution);
    }

    #[test]
    fn external_rng_can_be_injected() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut generator = Generator::with_rng(StdRng::seed_from_u64(42));
        let a = generator.generate(Difficulty::Medium).unwrap();
        let b = Generator::with_seed(42).generate(Difficulty::Medium).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn puzzle_survives_serde_round_trip() {
        let mut generator = Generator::with_seed(17);
        let puzzle = generator.generate(Difficulty::Medium).unwrap();
        let json = serde_json::to_string(&puzzle).unwrap();
        let back: Puzzle = serde_json::from_str(&json).unwrap();
        assert_eq!(puzzle, back);
    }
}
