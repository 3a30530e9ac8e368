//! Day 2: rock paper scissors strategy guide.
//!
//! Each input line holds the opponent's command (`A`/`B`/`C`) and a second
//! command (`X`/`Y`/`Z`) whose meaning the two parts disagree on: a shape to
//! play, or an outcome to arrange.

use advent_core::{Day, ParseError, Part, Puzzle, SolveError};
use anyhow::anyhow;

#[derive(Puzzle)]
#[puzzle(year = 2022, day = 2, parts = 2, tags = ["rock-paper-scissors"])]
pub struct StrategyGuide;

/// One hand shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rock,
    Paper,
    Scissors,
}

/// How one round ends, seen from the player's side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Loss,
    Draw,
    Win,
}

impl Shape {
    /// Score for playing this shape
    fn score(self) -> u64 {
        match self {
            Shape::Rock => 1,
            Shape::Paper => 2,
            Shape::Scissors => 3,
        }
    }

    /// The shape this one defeats
    fn defeats(self) -> Shape {
        match self {
            Shape::Rock => Shape::Scissors,
            Shape::Paper => Shape::Rock,
            Shape::Scissors => Shape::Paper,
        }
    }

    /// The shape that defeats this one
    fn defeated_by(self) -> Shape {
        match self {
            Shape::Rock => Shape::Paper,
            Shape::Paper => Shape::Scissors,
            Shape::Scissors => Shape::Rock,
        }
    }

    /// Outcome for the player of `self` against `opponent`
    fn against(self, opponent: Shape) -> Outcome {
        if self == opponent {
            Outcome::Draw
        } else if self.defeats() == opponent {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }
}

impl Outcome {
    /// Score for ending a round this way
    fn score(self) -> u64 {
        match self {
            Outcome::Loss => 0,
            Outcome::Draw => 3,
            Outcome::Win => 6,
        }
    }

    /// The shape the player must pick against `opponent` to force this outcome
    fn forced_shape(self, opponent: Shape) -> Shape {
        match self {
            Outcome::Draw => opponent,
            Outcome::Win => opponent.defeated_by(),
            Outcome::Loss => opponent.defeats(),
        }
    }
}

/// One round of the guide, with the second command decoded both ways
#[derive(Debug, Clone, Copy)]
pub struct Round {
    opponent: Shape,
    /// The second command read as the player's shape (part 1)
    as_shape: Shape,
    /// The second command read as the required outcome (part 2)
    as_outcome: Outcome,
}

impl Round {
    fn from_line(line: &str) -> anyhow::Result<Self> {
        let (opponent, command) = line
            .split_once(' ')
            .ok_or_else(|| anyhow!("expected two commands separated by a space, got {line:?}"))?;

        let opponent = match opponent {
            "A" => Shape::Rock,
            "B" => Shape::Paper,
            "C" => Shape::Scissors,
            other => return Err(anyhow!("unknown opponent command {other:?}")),
        };
        let (as_shape, as_outcome) = match command {
            "X" => (Shape::Rock, Outcome::Loss),
            "Y" => (Shape::Paper, Outcome::Draw),
            "Z" => (Shape::Scissors, Outcome::Win),
            other => return Err(anyhow!("unknown player command {other:?}")),
        };

        Ok(Round {
            opponent,
            as_shape,
            as_outcome,
        })
    }
}

impl Day for StrategyGuide {
    type Data<'a> = Vec<Round>;

    fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError> {
        input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                Round::from_line(line)
                    .map_err(|e| ParseError::Malformed(format!("(line {}) {}", idx + 1, e)))
            })
            .collect()
    }
}

impl Part<1> for StrategyGuide {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        let score: u64 = data
            .iter()
            .map(|round| {
                round.as_shape.score() + round.as_shape.against(round.opponent).score()
            })
            .sum();
        Ok(score.to_string())
    }
}

impl Part<2> for StrategyGuide {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        let score: u64 = data
            .iter()
            .map(|round| {
                round.as_outcome.forced_shape(round.opponent).score() + round.as_outcome.score()
            })
            .sum();
        Ok(score.to_string())
    }
}
