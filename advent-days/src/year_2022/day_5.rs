//! Day 5: supply stacks. Unfinished.
//!
//! Parsing keeps the raw drawing and move list around; neither part
//! computes anything yet.

use advent_core::{Day, ParseError, Part, Puzzle, SolveError};

#[derive(Puzzle)]
#[puzzle(year = 2022, day = 5, parts = 2, tags = ["wip"])]
pub struct SupplyStacks;

impl Day for SupplyStacks {
    type Data<'a> = &'a str;

    fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError> {
        Ok(input)
    }
}

impl Part<1> for SupplyStacks {
    fn solve(_data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        // TODO: parse the crate drawing, replay the moves one crate at a
        // time, and read off the top of each stack.
        Err(SolveError::NotImplemented(1))
    }
}

impl Part<2> for SupplyStacks {
    fn solve(_data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        Err(SolveError::NotImplemented(2))
    }
}
