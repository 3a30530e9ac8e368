//! Re-orders concurrent run reports into display order
//!
//! Work items are collected from the catalog in (year, day) order, so the
//! expected keys are known up front; reports that arrive early wait in a
//! min-heap until everything before them has been emitted.

use crate::executor::RunReport;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Key for ordering reports (year, day, part), ascending
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ReportKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&RunReport> for ReportKey {
    fn from(report: &RunReport) -> Self {
        Self {
            year: report.year,
            day: report.day,
            part: report.part,
        }
    }
}

/// Heap entry ordered by report key
struct PendingReport(RunReport);

impl Ord for PendingReport {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        ReportKey::from(&self.0).cmp(&ReportKey::from(&other.0))
    }
}

impl PartialOrd for PendingReport {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for PendingReport {}

impl PartialEq for PendingReport {
    fn eq(&self, other: &Self) -> bool {
        ReportKey::from(&self.0) == ReportKey::from(&other.0)
    }
}

/// Aggregator that buffers reports and emits them in sorted order
pub struct ReportAggregator {
    /// Expected keys in output order; `next` indexes the first not yet emitted
    expected: Vec<ReportKey>,
    next: usize,
    /// Min-heap of reports waiting for their turn
    pending: BinaryHeap<Reverse<PendingReport>>,
}

impl ReportAggregator {
    /// Create an aggregator from the list of expected keys
    pub fn new(mut expected: Vec<ReportKey>) -> Self {
        expected.sort_unstable();
        Self {
            expected,
            next: 0,
            pending: BinaryHeap::new(),
        }
    }

    /// Add a report and return any reports now ready for output, in order
    pub fn add(&mut self, report: RunReport) -> Vec<RunReport> {
        self.pending.push(Reverse(PendingReport(report)));

        let mut ready = Vec::new();
        while let (Some(next_key), Some(Reverse(top))) =
            (self.expected.get(self.next), self.pending.peek())
        {
            if ReportKey::from(&top.0) != *next_key {
                break;
            }
            self.next += 1;
            let Some(Reverse(PendingReport(report))) = self.pending.pop() else {
                break;
            };
            ready.push(report);
        }
        ready
    }

    /// Drain remaining reports in order (for final output)
    pub fn drain(&mut self) -> Vec<RunReport> {
        let mut rest: Vec<_> = self.pending.drain().map(|Reverse(p)| p.0).collect();
        rest.sort_by_key(|report| ReportKey::from(report));
        rest
    }

    /// Whether every expected report has been emitted
    pub fn is_complete(&self) -> bool {
        self.next == self.expected.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use proptest::prelude::*;

    fn make_report(year: u16, day: u8, part: u8) -> RunReport {
        RunReport {
            year,
            day,
            part,
            answer: Ok(format!("{year}_{day}_{part}")),
            parse_elapsed: Some(TimeDelta::milliseconds(5)),
            solve_elapsed: TimeDelta::milliseconds(10),
        }
    }

    fn key(year: u16, day: u8, part: u8) -> ReportKey {
        ReportKey { year, day, part }
    }

    #[test]
    fn in_order_reports_pass_straight_through() {
        let mut agg = ReportAggregator::new(vec![key(2022, 1, 1), key(2022, 1, 2)]);

        let ready = agg.add(make_report(2022, 1, 1));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 1);

        let ready = agg.add(make_report(2022, 1, 2));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 2);

        assert!(agg.is_complete());
    }

    #[test]
    fn early_reports_wait_for_their_turn() {
        let mut agg =
            ReportAggregator::new(vec![key(2022, 1, 1), key(2022, 1, 2), key(2022, 2, 1)]);

        assert!(agg.add(make_report(2022, 1, 2)).is_empty());
        assert!(agg.add(make_report(2022, 2, 1)).is_empty());

        // The missing head releases everything
        let ready = agg.add(make_report(2022, 1, 1));
        let keys: Vec<ReportKey> = ready.iter().map(ReportKey::from).collect();
        assert_eq!(keys, vec![key(2022, 1, 1), key(2022, 1, 2), key(2022, 2, 1)]);
        assert!(agg.is_complete());
    }

    #[test]
    fn drain_flushes_stragglers_sorted() {
        let mut agg = ReportAggregator::new(vec![key(2022, 1, 1), key(2022, 1, 2)]);

        agg.add(make_report(2022, 1, 2));

        let remaining = agg.drain();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].part, 2);
        assert!(!agg.is_complete());
    }

    fn all_keys() -> Vec<ReportKey> {
        vec![
            key(2022, 1, 1),
            key(2022, 1, 2),
            key(2022, 2, 1),
            key(2022, 2, 2),
            key(2022, 3, 1),
        ]
    }

    proptest! {
        /// Whatever the arrival order, reports come out in key order and
        /// nothing is lost.
        #[test]
        fn arrival_order_never_changes_output_order(order in Just(all_keys()).prop_shuffle()) {
            let expected: Vec<ReportKey> = {
                let mut sorted = order.clone();
                sorted.sort_unstable();
                sorted
            };
            let mut agg = ReportAggregator::new(expected.clone());

            let mut emitted = Vec::new();
            for k in &order {
                emitted.extend(agg.add(make_report(k.year, k.day, k.part)));
            }

            let emitted_keys: Vec<ReportKey> = emitted.iter().map(ReportKey::from).collect();
            prop_assert_eq!(emitted_keys, expected);
            prop_assert!(agg.is_complete());
        }
    }
}
