//! End-to-end behavior of `#[derive(Puzzle)]` against the real framework

use advent_core::{
    CatalogBuilder, Day, DynPuzzle, ParseError, Part, Puzzle, PuzzleEntry, SolveError,
};

#[derive(Puzzle)]
#[puzzle(year = 2021, day = 7, parts = 2, tags = ["derive-test", "crabs"])]
struct Crabs;

impl Day for Crabs {
    type Data<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError> {
        input
            .trim()
            .split(',')
            .map(|n| {
                n.parse()
                    .map_err(|_| ParseError::Malformed(format!("expected integer, got {n:?}")))
            })
            .collect()
    }
}

impl Part<1> for Crabs {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        Ok(data.iter().sum::<i64>().to_string())
    }
}

impl Part<2> for Crabs {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        Ok(data.iter().product::<i64>().to_string())
    }
}

#[test]
fn parts_constant_comes_from_attribute() {
    assert_eq!(<Crabs as Puzzle>::PARTS, 2);
}

#[test]
fn solve_part_dispatches_to_part_impls() {
    let mut data = Crabs::parse("1,2,3,4").unwrap();
    assert_eq!(
        <Crabs as Puzzle>::solve_part(&mut data, 1).unwrap(),
        <Crabs as Part<1>>::solve(&mut Crabs::parse("1,2,3,4").unwrap()).unwrap()
    );
    assert_eq!(<Crabs as Puzzle>::solve_part(&mut data, 2).unwrap(), "24");
}

#[test]
fn undeclared_part_falls_through_to_not_implemented() {
    let mut data = Crabs::parse("1,2").unwrap();
    match <Crabs as Puzzle>::solve_part(&mut data, 3) {
        Err(SolveError::NotImplemented(3)) => {}
        other => panic!("expected NotImplemented(3), got {other:?}"),
    }
}

#[test]
fn entry_is_collected_with_tags() {
    let entry = advent_core::inventory::iter::<PuzzleEntry>()
        .into_iter()
        .find(|entry| entry.year == 2021 && entry.day == 7)
        .expect("derived entry should be collected");

    assert!(entry.has_tag("derive-test"));
    assert!(entry.has_tag("crabs"));
    assert!(!entry.has_tag("wip"));
}

#[test]
fn collected_entry_registers_and_solves() {
    let catalog = CatalogBuilder::new()
        .with_registered_filtered(|entry| entry.has_tag("derive-test"))
        .unwrap()
        .build();

    assert_eq!(catalog.len(), 1);
    let info = catalog.info(2021, 7).unwrap();
    assert_eq!(info.parts, 2);

    let mut puzzle = catalog.instantiate(2021, 7, "2,3,5").unwrap();
    assert_eq!(puzzle.solve(1).unwrap().answer, "10");
    assert_eq!(puzzle.solve(2).unwrap().answer, "30");
}
