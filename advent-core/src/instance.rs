//! Timed, type-erased puzzle instances

use crate::error::{ParseError, SolveError};
use crate::puzzle::Puzzle;
use chrono::{DateTime, TimeDelta, Utc};

/// The answer to one part, with solve timing
#[derive(Debug, Clone)]
pub struct PartOutcome {
    /// The answer text
    pub answer: String,
    /// When solving started (UTC)
    pub started: DateTime<Utc>,
    /// When solving finished (UTC)
    pub finished: DateTime<Utc>,
}

impl PartOutcome {
    /// Time spent solving
    pub fn elapsed(&self) -> TimeDelta {
        self.finished - self.started
    }
}

/// A parsed puzzle, ready to answer its parts.
///
/// Holds the shared data produced by [`Day::parse`] together with parse
/// timing, for a specific year-day slot.
///
/// [`Day::parse`]: crate::Day::parse
pub struct PuzzleInstance<'a, P: Puzzle> {
    year: u16,
    day: u8,
    data: P::Data<'a>,
    parse_started: DateTime<Utc>,
    parse_finished: DateTime<Utc>,
}

impl<'a, P: Puzzle> PuzzleInstance<'a, P> {
    /// Parse `input` and create an instance, recording parse timing.
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_started = Utc::now();
        let data = P::parse(input)?;
        let parse_finished = Utc::now();

        Ok(Self {
            year,
            day,
            data,
            parse_started,
            parse_finished,
        })
    }
}

/// Type-erased interface over any [`PuzzleInstance`].
///
/// The catalog hands these out so callers can run puzzles of different
/// concrete types uniformly.
///
/// # Example
///
/// ```no_run
/// use advent_core::DynPuzzle;
///
/// fn run(mut puzzle: Box<dyn DynPuzzle + '_>) {
///     for part in 1..=puzzle.parts() {
///         match puzzle.solve(part) {
///             Ok(outcome) => println!("part {part}: {}", outcome.answer),
///             Err(e) => eprintln!("part {part}: {e}"),
///         }
///     }
/// }
/// ```
pub trait DynPuzzle {
    /// Solve one part, with timing.
    ///
    /// Parts outside `1..=parts()` are rejected with
    /// [`SolveError::OutOfRange`] without touching the puzzle.
    fn solve(&mut self, part: u8) -> Result<PartOutcome, SolveError>;

    /// The year this instance was registered under
    fn year(&self) -> u16;

    /// The day this instance was registered under
    fn day(&self) -> u8;

    /// Number of parts the puzzle answers
    fn parts(&self) -> u8;

    /// When parsing started (UTC)
    fn parse_started(&self) -> DateTime<Utc>;

    /// When parsing finished (UTC)
    fn parse_finished(&self) -> DateTime<Utc>;

    /// Time spent parsing
    fn parse_elapsed(&self) -> TimeDelta {
        self.parse_finished() - self.parse_started()
    }
}

impl<'a, P: Puzzle> DynPuzzle for PuzzleInstance<'a, P> {
    fn solve(&mut self, part: u8) -> Result<PartOutcome, SolveError> {
        if !(1..=P::PARTS).contains(&part) {
            return Err(SolveError::OutOfRange(part));
        }

        let started = Utc::now();
        let answer = P::solve_part(&mut self.data, part)?;
        let finished = Utc::now();

        Ok(PartOutcome {
            answer,
            started,
            finished,
        })
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        P::PARTS
    }

    fn parse_started(&self) -> DateTime<Utc> {
        self.parse_started
    }

    fn parse_finished(&self) -> DateTime<Utc> {
        self.parse_finished
    }
}
