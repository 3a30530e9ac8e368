//! Building a catalog by hand, without the derive macro
//!
//! Run with: cargo run --example manual_catalog

use advent_core::{
    CatalogBuilder, Day, DynPuzzle, ParseError, Puzzle, RegisterablePuzzle, SolveError,
};

/// Counts lines and characters of its input
struct Inventory;

impl Day for Inventory {
    type Data<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError> {
        Ok(input.lines().collect())
    }
}

impl Puzzle for Inventory {
    const PARTS: u8 = 2;

    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(data.len().to_string()),
            2 => Ok(data.iter().map(|line| line.len()).sum::<usize>().to_string()),
            other => Err(SolveError::NotImplemented(other)),
        }
    }
}

fn main() {
    let catalog = Inventory
        .register_into(CatalogBuilder::new(), 2022, 1)
        .expect("fresh builder has no duplicate slots")
        .build();

    let input = "forty-two\nitems";
    let mut puzzle = catalog
        .instantiate(2022, 1, input)
        .expect("puzzle was just registered");

    for part in 1..=puzzle.parts() {
        match puzzle.solve(part) {
            Ok(outcome) => println!("part {part}: {}", outcome.answer),
            Err(e) => eprintln!("part {part}: {e}"),
        }
    }
}
