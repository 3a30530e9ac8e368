//! Catalog construction and lookup behavior

use advent_core::{
    CatalogBuilder, Day, DynPuzzle, ParseError, Puzzle, PuzzleError, PuzzleId,
    RegisterablePuzzle, RegistrationError, SolveError,
};

struct Lines;

impl Day for Lines {
    type Data<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError> {
        Ok(input.lines().collect())
    }
}

impl Puzzle for Lines {
    const PARTS: u8 = 2;

    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(data.len().to_string()),
            2 => Ok(data.iter().map(|line| line.len()).sum::<usize>().to_string()),
            other => Err(SolveError::NotImplemented(other)),
        }
    }
}

struct Rejecting;

impl Day for Rejecting {
    type Data<'a> = ();

    fn parse<'a>(_input: &'a str) -> Result<Self::Data<'a>, ParseError> {
        Err(ParseError::Malformed("always rejects".into()))
    }
}

impl Puzzle for Rejecting {
    const PARTS: u8 = 1;

    fn solve_part(_data: &mut Self::Data<'_>, part: u8) -> Result<String, SolveError> {
        Err(SolveError::NotImplemented(part))
    }
}

#[test]
fn duplicate_registration_is_rejected() {
    let builder = Lines.register_into(CatalogBuilder::new(), 2022, 1).unwrap();

    match Lines.register_into(builder, 2022, 1) {
        Err(RegistrationError::Duplicate(2022, 1)) => {}
        other => panic!("expected Duplicate(2022, 1), got {:?}", other.err()),
    }
}

#[test]
fn day_outside_calendar_is_rejected() {
    for day in [0u8, 26, 255] {
        match Lines.register_into(CatalogBuilder::new(), 2022, day) {
            Err(RegistrationError::DayOutOfRange(2022, d)) => assert_eq!(d, day),
            other => panic!("expected DayOutOfRange for day {day}, got {:?}", other.err()),
        }
    }
}

#[test]
fn unknown_slot_is_reported() {
    let catalog = CatalogBuilder::new().build();

    assert!(catalog.is_empty());
    match catalog.instantiate(2022, 3, "x") {
        Err(PuzzleError::Unknown(2022, 3)) => {}
        other => panic!("expected Unknown(2022, 3), got {:?}", other.err()),
    }
}

#[test]
fn parse_failure_surfaces_through_instantiate() {
    let catalog = Rejecting
        .register_into(CatalogBuilder::new(), 2022, 2)
        .unwrap()
        .build();

    match catalog.instantiate(2022, 2, "anything") {
        Err(PuzzleError::Parse(ParseError::Malformed(msg))) => {
            assert_eq!(msg, "always rejects");
        }
        other => panic!("expected parse error, got {:?}", other.err()),
    }
}

#[test]
fn info_and_iteration_follow_year_day_order() {
    let builder = Lines.register_into(CatalogBuilder::new(), 2022, 9).unwrap();
    let builder = Lines.register_into(builder, 2021, 25).unwrap();
    let catalog = Lines.register_into(builder, 2022, 2).unwrap().build();

    let ids: Vec<PuzzleId> = catalog.iter_info().map(|info| info.id).collect();
    assert_eq!(
        ids,
        vec![
            PuzzleId { year: 2021, day: 25 },
            PuzzleId { year: 2022, day: 2 },
            PuzzleId { year: 2022, day: 9 },
        ]
    );

    let info = catalog.info(2022, 9).unwrap();
    assert_eq!(info.parts, 2);
    assert!(catalog.contains(2021, 25));
    assert!(!catalog.contains(2020, 1));
    assert_eq!(catalog.len(), 3);
}

#[test]
fn instantiated_puzzle_solves_both_parts() {
    let catalog = Lines.register_into(CatalogBuilder::new(), 2022, 1).unwrap().build();

    let mut puzzle = catalog.instantiate(2022, 1, "abc\nde").unwrap();
    assert_eq!(puzzle.solve(1).unwrap().answer, "2");
    assert_eq!(puzzle.solve(2).unwrap().answer, "5");
}
