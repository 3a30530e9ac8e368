//! Parallel executor for running puzzles

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcRunnerError, RunnerError};
use crate::inputs::InputStore;
use advent_core::{Catalog, DynPuzzle, ParseError, PuzzleError};
use chrono::{TimeDelta, Utc};
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

/// Result of running one part of one day
pub struct RunReport {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, PuzzleError>,
    /// Parse timing, shared by every part solved on the same instance
    pub parse_elapsed: Option<TimeDelta>,
    pub solve_elapsed: TimeDelta,
}

/// One day selected for execution
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running puzzles
pub struct Executor {
    shared: SharedRunConfig,
    thread_pool: rayon::ThreadPool,
}

struct SharedRunConfig {
    catalog: Catalog,
    store: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(catalog: Catalog, config: &Config) -> Result<Self, RunnerError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| RunnerError::ThreadPool(e.to_string()))?;

        Ok(Self {
            shared: SharedRunConfig {
                catalog,
                store: InputStore::new(config.input_dir.clone()),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// The input store this executor reads from
    pub fn store(&self) -> &InputStore {
        &self.shared.store
    }

    /// Collect work items by filtering catalog metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let shared = &self.shared;
        shared
            .catalog
            .iter_info()
            .filter(|info| shared.year_filter.is_none_or(|y| info.id.year == y))
            .filter(|info| shared.day_filter.is_none_or(|d| info.id.day == d))
            .map(|info| WorkItem {
                year: info.id.year,
                day: info.id.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|work| !work.parts.is_empty())
            .collect()
    }

    /// Narrow a puzzle's parts by the part filter
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.shared.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send reports to the channel
    pub fn execute(&self, tx: Sender<RunReport>) -> Result<(), ArcRunnerError> {
        let work_items = self.collect_work_items();

        match self.shared.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected: Option<ArcRunnerError> = None;
                for work in work_items {
                    if let Err(e) = run_one(&work, &tx, &self.shared) {
                        collected = Some(ArcRunnerError::combine_opt(collected, e));
                    }
                }
                collected.map_or(Ok(()), Err)
            }
            // Day and Part both parallelize across work items; Part additionally
            // splits within run_one
            ParallelizeBy::Day | ParallelizeBy::Part => self.execute_parallel(work_items, &tx),
        }
    }

    /// Execute work items in parallel, combining errors
    fn execute_parallel(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<RunReport>,
    ) -> Result<(), ArcRunnerError> {
        let shared = &self.shared;

        self.thread_pool.install(|| {
            work_items
                .into_par_iter()
                .map(|work| run_one(&work, tx, shared).err())
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(err1), Some(err2)) => Some(ArcRunnerError::combine(err1, err2)),
                    (err1, err2) => err1.or(err2),
                })
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }
}

/// Report for a day that could not be loaded or parsed
fn failure_report(year: u16, day: u8, part: u8, message: &str) -> RunReport {
    RunReport {
        year,
        day,
        part,
        answer: Err(PuzzleError::Parse(ParseError::Malformed(
            message.to_string(),
        ))),
        parse_elapsed: None,
        solve_elapsed: TimeDelta::zero(),
    }
}

/// Run one work item: load input, instantiate, solve its parts
fn run_one(
    work: &WorkItem,
    tx: &Sender<RunReport>,
    shared: &SharedRunConfig,
) -> Result<(), ArcRunnerError> {
    let input = match shared.store.load(work.year, work.day) {
        Ok(input) => input,
        Err(e) => {
            // The run keeps going; the failure shows up once per part
            let message = e.to_string();
            for part in work.parts.clone() {
                tx.send(failure_report(work.year, work.day, part, &message))
                    .map_err(|_| ArcRunnerError::from(RunnerError::ChannelSend))?;
            }
            return Ok(());
        }
    };

    if matches!(shared.parallelize_by, ParallelizeBy::Part) {
        run_parts_parallel(work, &input, tx, shared)
    } else {
        run_parts_sequential(work, &input, tx, shared)
    }
}

/// Solve parts in order on a single instance
fn run_parts_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<RunReport>,
    shared: &SharedRunConfig,
) -> Result<(), ArcRunnerError> {
    let mut puzzle = match shared.catalog.instantiate(work.year, work.day, input) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            let message = e.to_string();
            for part in work.parts.clone() {
                tx.send(failure_report(work.year, work.day, part, &message))
                    .map_err(|_| ArcRunnerError::from(RunnerError::ChannelSend))?;
            }
            return Ok(());
        }
    };

    for part in work.parts.clone() {
        tx.send(solve_one(&mut *puzzle, part))
            .map_err(|_| ArcRunnerError::from(RunnerError::ChannelSend))?;
    }
    Ok(())
}

/// Solve parts in parallel, buffering reports to emit in part order.
///
/// Each part parses its own instance; the parts of one day share nothing
/// when run this way.
fn run_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<RunReport>,
    shared: &SharedRunConfig,
) -> Result<(), ArcRunnerError> {
    let (report_tx, report_rx) = std::sync::mpsc::channel();
    let (year, day) = (work.year, work.day);
    let catalog = &shared.catalog;

    work.parts
        .clone()
        .into_par_iter()
        .for_each_with(report_tx, |rtx, part| {
            let report = match catalog.instantiate(year, day, input) {
                Ok(mut puzzle) => solve_one(&mut *puzzle, part),
                Err(e) => failure_report(year, day, part, &e.to_string()),
            };
            rtx.send(report).ok();
        });

    // Emit buffered reports in part order
    let mut buffer: [Option<RunReport>; 2] = [None, None];
    let start_part = *work.parts.start();
    let mut next_part = start_part;

    for report in report_rx {
        let idx = (report.part - start_part) as usize;
        if idx < buffer.len() {
            buffer[idx] = Some(report);
        }
        while let Some(report) = buffer
            .get_mut((next_part - start_part) as usize)
            .and_then(Option::take)
        {
            tx.send(report)
                .map_err(|_| ArcRunnerError::from(RunnerError::ChannelSend))?;
            next_part += 1;
        }
    }
    Ok(())
}

/// Solve a single part on an instance, with timing
fn solve_one(puzzle: &mut dyn DynPuzzle, part: u8) -> RunReport {
    let started = Utc::now();
    let (year, day) = (puzzle.year(), puzzle.day());

    match puzzle.solve(part) {
        Ok(outcome) => {
            let solve_elapsed = outcome.elapsed();
            RunReport {
                year,
                day,
                part,
                answer: Ok(outcome.answer),
                parse_elapsed: Some(puzzle.parse_elapsed()),
                solve_elapsed,
            }
        }
        Err(e) => RunReport {
            year,
            day,
            part,
            answer: Err(e.into()),
            parse_elapsed: Some(puzzle.parse_elapsed()),
            solve_elapsed: Utc::now() - started,
        },
    }
}
