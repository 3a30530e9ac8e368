//! Day 4: overlapping section assignments.
//!
//! Each input line pairs two inclusive section ranges, `a-b,c-d`.
//! Containment and overlap are decided from the endpoints alone.

use advent_core::{Day, ParseError, Part, Puzzle, SolveError};
use anyhow::{Context, anyhow};
use std::ops::RangeInclusive;

#[derive(Puzzle)]
#[puzzle(year = 2022, day = 4, parts = 2, tags = ["ranges"])]
pub struct CampCleanup;

/// Sections assigned to one elf
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment(RangeInclusive<u32>);

impl Assignment {
    fn from_text(text: &str) -> anyhow::Result<Self> {
        let (start, end) = text
            .split_once('-')
            .ok_or_else(|| anyhow!("expected start-end, got {text:?}"))?;
        let start = start
            .parse()
            .with_context(|| format!("bad section id {start:?}"))?;
        let end = end
            .parse()
            .with_context(|| format!("bad section id {end:?}"))?;

        Ok(Assignment(start..=end))
    }

    /// Whether every section of `other` is also in `self`
    fn fully_contains(&self, other: &Self) -> bool {
        self.0.start() <= other.0.start() && self.0.end() >= other.0.end()
    }

    /// Whether the two assignments share any section
    fn overlaps(&self, other: &Self) -> bool {
        self.0.start() <= other.0.end() && self.0.end() >= other.0.start()
    }
}

/// The two assignments of one elf pair
pub type ElfPair = (Assignment, Assignment);

fn parse_pair(line: &str) -> anyhow::Result<ElfPair> {
    let (left, right) = line
        .split_once(',')
        .ok_or_else(|| anyhow!("expected two assignments separated by a comma, got {line:?}"))?;

    Ok((Assignment::from_text(left)?, Assignment::from_text(right)?))
}

impl Day for CampCleanup {
    type Data<'a> = Vec<ElfPair>;

    fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError> {
        input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                parse_pair(line)
                    .map_err(|e| ParseError::Malformed(format!("(line {}) {:#}", idx + 1, e)))
            })
            .collect()
    }
}

impl Part<1> for CampCleanup {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        let fully_contained = data
            .iter()
            .filter(|(a, b)| a.fully_contains(b) || b.fully_contains(a))
            .count();
        Ok(fully_contained.to_string())
    }
}

impl Part<2> for CampCleanup {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        let overlapping = data.iter().filter(|(a, b)| a.overlaps(b)).count();
        Ok(overlapping.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EXAMPLE: &str = "2-4,6-8\n2-3,4-5\n5-7,7-9\n2-8,3-7\n6-6,4-6\n2-6,4-8\n";

    #[test]
    fn fully_overlapping_pairs() {
        let mut data = CampCleanup::parse(EXAMPLE).unwrap();
        assert_eq!(<CampCleanup as Part<1>>::solve(&mut data).unwrap(), "2");
    }

    #[test]
    fn partially_overlapping_pairs() {
        let mut data = CampCleanup::parse(EXAMPLE).unwrap();
        assert_eq!(<CampCleanup as Part<2>>::solve(&mut data).unwrap(), "4");
    }

    #[test]
    fn touching_endpoints_count_as_overlap() {
        let (a, b) = parse_pair("5-7,7-9").unwrap();
        assert!(a.overlaps(&b));
        assert!(!a.fully_contains(&b));
    }

    #[test]
    fn malformed_pair_is_a_parse_error_with_line_number() {
        match CampCleanup::parse("2-4,6-8\n2-3;4-5\n") {
            Err(ParseError::Malformed(msg)) => assert!(msg.contains("(line 2)")),
            other => panic!("expected parse error, got {:?}", other.map(|d| d.len())),
        }
    }

    fn assignments() -> impl Strategy<Value = Assignment> {
        (0u32..100, 0u32..100).prop_map(|(a, b)| Assignment(a.min(b)..=a.max(b)))
    }

    proptest! {
        /// Overlap does not depend on which elf comes first.
        #[test]
        fn overlap_is_symmetric(a in assignments(), b in assignments()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        /// A contained assignment always overlaps its container.
        #[test]
        fn containment_implies_overlap(a in assignments(), b in assignments()) {
            if a.fully_contains(&b) || b.fully_contains(&a) {
                prop_assert!(a.overlaps(&b));
            }
        }

        /// Endpoint comparison agrees with walking the actual sections.
        #[test]
        fn overlap_matches_section_walk(a in assignments(), b in assignments()) {
            let shares_section = a.0.clone().any(|section| b.0.contains(&section));
            prop_assert_eq!(a.overlaps(&b), shares_section);
        }
    }
}
