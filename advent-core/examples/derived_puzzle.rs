//! The usual path: `#[derive(Puzzle)]` plus automatic registration
//!
//! Run with: cargo run --example derived_puzzle

use advent_core::{CatalogBuilder, Day, DynPuzzle, ParseError, Part, Puzzle, SolveError};

/// Sums and multiplies a line of comma-separated integers
#[derive(Puzzle)]
#[puzzle(year = 2022, day = 1, parts = 2, tags = ["example"])]
struct Totals;

impl Day for Totals {
    type Data<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError> {
        input
            .trim()
            .split(',')
            .map(|n| {
                n.parse()
                    .map_err(|_| ParseError::Malformed(format!("expected integer, got {n:?}")))
            })
            .collect()
    }
}

impl Part<1> for Totals {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        Ok(data.iter().sum::<i64>().to_string())
    }
}

impl Part<2> for Totals {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        Ok(data.iter().product::<i64>().to_string())
    }
}

fn main() {
    // The derive submitted a PuzzleEntry; collect everything tagged "example".
    let catalog = CatalogBuilder::new()
        .with_registered_filtered(|entry| entry.has_tag("example"))
        .expect("entries registered exactly once")
        .build();

    let mut puzzle = catalog
        .instantiate(2022, 1, "2,3,5")
        .expect("derive registered this slot");

    println!("sum:     {}", puzzle.solve(1).expect("part 1 declared").answer);
    println!("product: {}", puzzle.solve(2).expect("part 2 declared").answer);
}
