//! Core puzzle traits

use crate::error::{ParseError, SolveError};

/// Input parsing for one advent day.
///
/// The `Data` associated type holds everything the parts need: the parsed
/// input, plus any intermediate results a part wants to keep around. Any
/// ownership strategy works:
/// - owned structs or `Vec<T>` when the input is transformed (the common case)
/// - `&'a str` for zero-copy access when no transformation is needed
///
/// # Example
///
/// ```
/// use advent_core::{Day, ParseError};
///
/// struct Depths;
///
/// impl Day for Depths {
///     type Data<'a> = Vec<u32>;
///
///     fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError> {
///         input
///             .lines()
///             .map(|line| {
///                 line.parse()
///                     .map_err(|_| ParseError::Malformed(format!("expected integer, got {line:?}")))
///             })
///             .collect()
///     }
/// }
/// ```
pub trait Day {
    /// Parsed input plus any state shared between parts.
    type Data<'a>;

    /// Parse the raw input text into [`Self::Data`].
    fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError>;
}

/// One part of an advent day, identified by the const generic `N`.
///
/// Implementing `Part<1>` and `Part<2>` separately keeps each part a small
/// pure function over the shared data; `#[derive(Puzzle)]` wires them into
/// [`Puzzle::solve_part`] so that a missing part impl is a compile error.
pub trait Part<const N: u8>: Day {
    /// Solve this part.
    ///
    /// Takes `&mut` so a part can cache work in the shared data for the
    /// other part to reuse.
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError>;
}

/// A complete advent day: parsing plus numbered-part dispatch.
///
/// Usually generated by `#[derive(Puzzle)]`, which matches `part` onto the
/// type's [`Part<N>`] impls. Hand-written impls are fine too:
///
/// ```
/// use advent_core::{Day, ParseError, Puzzle, SolveError};
///
/// struct Echo;
///
/// impl Day for Echo {
///     type Data<'a> = &'a str;
///
///     fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Puzzle for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(data.len().to_string()),
///             other => Err(SolveError::NotImplemented(other)),
///         }
///     }
/// }
/// ```
pub trait Puzzle: Day {
    /// Number of parts this puzzle answers.
    const PARTS: u8;

    /// Solve the given part.
    ///
    /// Callers are expected to pass `part` in `1..=PARTS`; the catalog's
    /// instances enforce that boundary and reject anything else as
    /// [`SolveError::OutOfRange`] before dispatching here.
    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<String, SolveError>;
}
