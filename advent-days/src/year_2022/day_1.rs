//! Day 1: calorie counting.
//!
//! The input lists the calories of every snack each elf carries, one group
//! of integer lines per elf, groups separated by blank lines.

use advent_core::{Day, ParseError, Part, Puzzle, SolveError};
use anyhow::anyhow;
use itertools::Itertools;

#[derive(Puzzle)]
#[puzzle(year = 2022, day = 1, parts = 2, tags = ["calories"])]
pub struct CalorieCounting;

#[derive(Debug)]
pub struct Expedition {
    /// Total calories carried per elf
    totals: Vec<u64>,
}

impl Day for CalorieCounting {
    type Data<'a> = Expedition;

    fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError> {
        input
            .trim_end()
            .split("\n\n")
            .map(|group| {
                group
                    .lines()
                    .map(|line| {
                        line.trim()
                            .parse::<u64>()
                            .map_err(|_| anyhow!("expected a calorie count, got {line:?}"))
                    })
                    .sum::<Result<u64, _>>()
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|totals| Expedition { totals })
            .map_err(|e| ParseError::Malformed(e.to_string()))
    }
}

impl Part<1> for CalorieCounting {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        data.totals
            .iter()
            .max()
            .map(|most| most.to_string())
            .ok_or_else(|| SolveError::failed(anyhow!("no elves in the expedition")))
    }
}

impl Part<2> for CalorieCounting {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        let top_three: u64 = data.totals.iter().sorted_unstable().rev().take(3).sum();
        Ok(top_three.to_string())
    }
}
