//! Day 3: duplicated rucksack items.
//!
//! Each input line is one rucksack of item-type letters, split into two
//! equal compartments. Item sets are 52-bit priority masks, so the set
//! intersections both parts need are single bitwise ANDs.

use advent_core::{Day, ParseError, Part, Puzzle, SolveError};
use anyhow::{anyhow, bail};
use itertools::Itertools;

#[derive(Puzzle)]
#[puzzle(year = 2022, day = 3, parts = 2, tags = ["rucksacks"])]
pub struct RucksackReorg;

/// Item types of one rucksack, one priority mask per compartment.
///
/// Bit `p - 1` is set when an item of priority `p` is present
/// (`a..z` map to 1..26, `A..Z` to 27..52).
#[derive(Debug, Clone, Copy)]
pub struct Rucksack {
    front: u64,
    back: u64,
}

impl Rucksack {
    fn from_line(line: &str) -> anyhow::Result<Self> {
        let items = line.as_bytes();
        if items.len() % 2 != 0 {
            bail!("rucksack holds an odd number of items ({})", items.len());
        }

        let (front, back) = items.split_at(items.len() / 2);
        Ok(Rucksack {
            front: item_mask(front)?,
            back: item_mask(back)?,
        })
    }

    /// Every item type in the rucksack
    fn contents(self) -> u64 {
        self.front | self.back
    }

    /// Item types present in both compartments
    fn duplicates(self) -> u64 {
        self.front & self.back
    }
}

fn priority(item: u8) -> anyhow::Result<u32> {
    match item {
        b'a'..=b'z' => Ok(u32::from(item - b'a') + 1),
        b'A'..=b'Z' => Ok(u32::from(item - b'A') + 27),
        other => bail!("item {:?} is not a letter", other as char),
    }
}

fn item_mask(items: &[u8]) -> anyhow::Result<u64> {
    items
        .iter()
        .try_fold(0u64, |mask, &item| Ok(mask | 1 << (priority(item)? - 1)))
}

/// Priority of the single item type in `mask`
fn single_priority(mask: u64) -> anyhow::Result<u64> {
    match mask.count_ones() {
        1 => Ok(u64::from(mask.trailing_zeros()) + 1),
        0 => bail!("no shared item type"),
        n => bail!("{n} shared item types, expected exactly one"),
    }
}

impl Day for RucksackReorg {
    type Data<'a> = Vec<Rucksack>;

    fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError> {
        input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                Rucksack::from_line(line)
                    .map_err(|e| ParseError::Malformed(format!("(line {}) {}", idx + 1, e)))
            })
            .collect()
    }
}

impl Part<1> for RucksackReorg {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        data.iter()
            .map(|sack| single_priority(sack.duplicates()))
            .sum::<anyhow::Result<u64>>()
            .map(|total| total.to_string())
            .map_err(SolveError::failed)
    }
}

impl Part<2> for RucksackReorg {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        if data.len() % 3 != 0 {
            return Err(SolveError::failed(anyhow!(
                "expected groups of three elves, found {} rucksacks",
                data.len()
            )));
        }

        data.iter()
            .tuples()
            .map(|(a, b, c)| single_priority(a.contents() & b.contents() & c.contents()))
            .sum::<anyhow::Result<u64>>()
            .map(|total| total.to_string())
            .map_err(SolveError::failed)
    }
}
