//! Advent of Code 2022 puzzle solutions
//!
//! One module per day. Each day's type derives `Puzzle`, which submits it to
//! the catalog; linking this crate is all the runner needs to discover every
//! solution.

pub mod year_2022;
