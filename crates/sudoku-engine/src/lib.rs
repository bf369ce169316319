//! Sudoku puzzle engine: generation, carving, and constraint checking.
//!
//! The engine produces a fully solved 9x9 grid by diagonal-box seeding
//! followed by randomized backtracking, carves a difficulty-dependent
//! number of cells out of it to make a playable [`Puzzle`], and checks
//! an in-progress grid against the Sudoku constraints. It is a pure
//! library boundary: a presentation layer supplies the difficulty and
//! the candidate grid, and renders the [`Puzzle`] and [`Verdict`] values
//! it gets back.
//!
//! ```
//! use sudoku_engine::{check, Difficulty, Generator, Verdict};
//!
//! let mut generator = Generator::with_seed(42);
//! let puzzle = generator.generate(Difficulty::Medium)?;
//!
//! assert_eq!(puzzle.given_count(), 41);
//! assert_eq!(check(&puzzle.grid, &puzzle.givens), Verdict::Incomplete);
//! assert_eq!(check(&puzzle.solution, &puzzle.givens), Verdict::Solved);
//! # Ok::<(), sudoku_engine::Error>(())
//! ```
//!
//! Randomness is an injected dependency: the same seed reproduces the
//! same puzzle bit for bit, and no global state is read or written.

mod carver;
pub mod error;
pub mod generator;
pub mod grid;
pub mod puzzle;
pub mod validate;

pub use error::Error;
pub use generator::Generator;
pub use grid::{Grid, Position};
pub use puzzle::{Difficulty, Givens, Puzzle};
pub use validate::{check, conflicts, is_legal_placement, Verdict};
