//! Property-based tests for part dispatch and part bounds

use advent_core::{
    Day, DynPuzzle, ParseError, Part, Puzzle, PuzzleInstance, SolveError,
};
use proptest::prelude::*;

#[derive(Puzzle)]
#[puzzle(year = 2021, day = 1, parts = 2)]
struct Sums;

impl Day for Sums {
    type Data<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.parse()
                    .map_err(|_| ParseError::Malformed(format!("expected integer, got {line:?}")))
            })
            .collect()
    }
}

impl Part<1> for Sums {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        Ok(data.iter().sum::<i64>().to_string())
    }
}

impl Part<2> for Sums {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        Ok(data.iter().product::<i64>().to_string())
    }
}

/// Puzzle with a configurable part count, for bounds tests
struct Bounded<const N: u8>;

impl<const N: u8> Day for Bounded<N> {
    type Data<'a> = ();

    fn parse<'a>(_input: &'a str) -> Result<Self::Data<'a>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Puzzle for Bounded<N> {
    const PARTS: u8 = N;

    fn solve_part(_data: &mut Self::Data<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{part}"))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any part in 1..=PARTS, the derived `solve_part` produces the same
    /// answer as calling the matching `Part<N>` impl directly.
    #[test]
    fn derived_dispatch_matches_part_impls(
        numbers in prop::collection::vec(1i64..100, 1..8),
        part in 1u8..=2,
    ) {
        let input = numbers
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        let mut via_puzzle = Sums::parse(&input).unwrap();
        let mut via_part = Sums::parse(&input).unwrap();

        let dispatched = <Sums as Puzzle>::solve_part(&mut via_puzzle, part);
        let direct = match part {
            1 => <Sums as Part<1>>::solve(&mut via_part),
            2 => <Sums as Part<2>>::solve(&mut via_part),
            _ => unreachable!(),
        };

        prop_assert_eq!(dispatched.unwrap(), direct.unwrap());
    }

    /// Parts beyond the declared count fall through the derived match to
    /// `NotImplemented` with the offending part number.
    #[test]
    fn derived_dispatch_rejects_undeclared_parts(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut data = Sums::parse("1\n2\n3").unwrap();

        match <Sums as Puzzle>::solve_part(&mut data, part) {
            Err(SolveError::NotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "expected NotImplemented for part {}, got {:?}", part, other),
        }
    }

    /// Instances reject parts outside 1..=PARTS with `OutOfRange` before
    /// dispatching, and accept everything inside the range.
    #[test]
    fn instance_enforces_part_bounds(max_parts in 1u8..=3, part in 0u8..=255) {
        let result = match max_parts {
            1 => PuzzleInstance::<Bounded<1>>::new(2021, 2, "").unwrap().solve(part),
            2 => PuzzleInstance::<Bounded<2>>::new(2021, 2, "").unwrap().solve(part),
            _ => PuzzleInstance::<Bounded<3>>::new(2021, 2, "").unwrap().solve(part),
        };

        if part == 0 || part > max_parts {
            match result {
                Err(SolveError::OutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "expected OutOfRange for part {}, got {:?}", part, other),
            }
        } else {
            prop_assert_eq!(result.unwrap().answer, format!("part{}", part));
        }
    }
}

#[test]
fn instance_reports_identity_and_timing() {
    let mut instance = PuzzleInstance::<Sums>::new(2021, 1, "4\n5").unwrap();

    assert_eq!(instance.year(), 2021);
    assert_eq!(instance.day(), 1);
    assert_eq!(instance.parts(), 2);
    assert!(instance.parse_elapsed() >= chrono::TimeDelta::zero());

    let outcome = instance.solve(1).unwrap();
    assert_eq!(outcome.answer, "9");
    assert!(outcome.elapsed() >= chrono::TimeDelta::zero());
    assert!(outcome.started >= instance.parse_finished());
}
