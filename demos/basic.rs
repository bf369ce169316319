//! Basic example of using the Sudoku engine

use sudoku_engine::{check, is_legal_placement, Difficulty, Generator, Position, Verdict};

fn main() -> Result<(), sudoku_engine::Error> {
    env_logger::init();

    // Generate a puzzle
    println!("Generating a Medium difficulty puzzle...\n");
    let mut generator = Generator::new();
    let puzzle = generator.generate(Difficulty::Medium)?;

    println!("Generated puzzle:");
    println!("{}", puzzle.grid);

    // Show some stats
    println!("Given cells: {}", puzzle.given_count());
    println!("Empty cells: {}", puzzle.empty_count());

    // The freshly carved grid has no conflicts yet
    match check(&puzzle.grid, &puzzle.givens) {
        Verdict::Incomplete => println!("Puzzle is incomplete but valid so far."),
        Verdict::Solved => println!("Puzzle is already solved?!"),
        Verdict::Invalid { conflicts } => println!("Unexpected conflicts: {conflicts:?}"),
    }

    // Live feedback for a single placement, the way a UI would use it
    let pos = Position::all()
        .find(|&p| !puzzle.is_given(p))
        .expect("a carved puzzle always has empty cells");
    println!();
    for value in 1..=9 {
        let legal = is_legal_placement(&puzzle.grid, pos, value)?;
        println!(
            "placing {value} at {pos}: {}",
            if legal { "ok" } else { "conflict" }
        );
    }

    // The recorded solution passes a full check
    println!("\nSolution:");
    println!("{}", puzzle.solution);
    assert_eq!(check(&puzzle.solution, &puzzle.givens), Verdict::Solved);

    Ok(())
}
