//! Puzzle framework for the Advent of Code 2022 solutions
//!
//! Each advent day is a type implementing [`Day`] (input parsing into shared
//! data) and one [`Part<N>`] impl per answer. `#[derive(Puzzle)]` ties the
//! parts together into [`Puzzle::solve_part`] and registers the day with the
//! [`Catalog`] through `inventory`, so solution crates only need to define
//! their types — the runner discovers them.
//!
//! # Quick example
//!
//! ```
//! use advent_core::{
//!     CatalogBuilder, Day, DynPuzzle, ParseError, Puzzle, RegisterablePuzzle, SolveError,
//! };
//!
//! struct Report;
//!
//! impl Day for Report {
//!     type Data<'a> = Vec<i64>;
//!
//!     fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| {
//!                 line.parse()
//!                     .map_err(|_| ParseError::Malformed(format!("expected integer, got {line:?}")))
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl Puzzle for Report {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(data.iter().sum::<i64>().to_string()),
//!             other => Err(SolveError::NotImplemented(other)),
//!         }
//!     }
//! }
//!
//! let catalog = Report
//!     .register_into(CatalogBuilder::new(), 2022, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut puzzle = catalog.instantiate(2022, 1, "1\n2\n3").unwrap();
//! assert_eq!(puzzle.solve(1).unwrap().answer, "6");
//! ```
//!
//! # Pieces
//!
//! - [`Day`] / [`Part`] / [`Puzzle`]: the solver traits
//! - [`Catalog`] / [`CatalogBuilder`]: lookup from (year, day) to factories,
//!   fed by collected [`PuzzleEntry`] registrations
//! - [`PuzzleInstance`] / [`DynPuzzle`]: parsed, timed, type-erased instances
//! - Error taxonomy: [`ParseError`], [`SolveError`], [`PuzzleError`],
//!   [`RegistrationError`]

mod catalog;
mod error;
mod instance;
mod puzzle;

pub use catalog::{
    Catalog, CatalogBuilder, FIRST_DAY, LAST_DAY, PuzzleEntry, PuzzleFactory, PuzzleId,
    PuzzleInfo, RegisterablePuzzle,
};
pub use error::{ParseError, PuzzleError, RegistrationError, SolveError};
pub use instance::{DynPuzzle, PartOutcome, PuzzleInstance};
pub use puzzle::{Day, Part, Puzzle};

// Re-exported for the derive macro's generated code
pub use inventory;

// The derive macro shares the trait's name, serde-style
pub use advent_derive::Puzzle;
