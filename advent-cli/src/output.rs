//! Output formatting for run reports

use crate::executor::RunReport;
use chrono::TimeDelta;

/// Output formatter for run reports
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single report
    pub fn print_report(&self, report: &RunReport) {
        if self.quiet {
            self.print_quiet(report);
        } else {
            self.print_full(report);
        }
    }

    /// Print in quiet mode (just the answer)
    fn print_quiet(&self, report: &RunReport) {
        match &report.answer {
            Ok(answer) => println!("{answer}"),
            Err(e) => eprintln!("error: {e}"),
        }
    }

    /// Print the labeled line with timing
    fn print_full(&self, report: &RunReport) {
        let prefix = format!(
            "{}/day{:02} part {}",
            report.year, report.day, report.part
        );

        match &report.answer {
            Ok(answer) => {
                let parse_timing = report
                    .parse_elapsed
                    .map(|d| format!("parse: {}, ", format_delta(d)))
                    .unwrap_or_default();
                let solve_timing = format_delta(report.solve_elapsed);

                println!("{prefix}: {answer} ({parse_timing}solve: {solve_timing})");
            }
            Err(e) => {
                eprintln!("{prefix}: error - {e}");
            }
        }
    }

    /// Print a summary after all reports.
    ///
    /// Shows both total compute time (sum of durations) and the actual
    /// wall-clock time, so the parallel speedup is visible.
    pub fn print_summary(&self, reports: &[RunReport]) {
        if self.quiet {
            return;
        }

        let total = reports.len();
        let solved = reports.iter().filter(|r| r.answer.is_ok()).count();
        let failed = total - solved;

        let total_parse: TimeDelta = reports
            .iter()
            .filter(|r| r.answer.is_ok())
            .filter_map(|r| r.parse_elapsed)
            .sum();
        let total_solve: TimeDelta = reports
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_elapsed)
            .sum();
        let total_compute = total_parse + total_solve;
        let elapsed = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!("Parts: {solved} solved, {failed} failed");
        println!("Total parse time: {}", format_delta(total_parse));
        println!("Total solve time: {}", format_delta(total_solve));
        println!("Elapsed wall-clock time: {}", format_wall(elapsed));
        if !elapsed.is_zero() {
            let compute_secs =
                total_compute.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
            let speedup = compute_secs / elapsed.as_secs_f64();
            println!("Speedup factor: {speedup:.2}x");
        }
    }
}

/// Format a TimeDelta for display
fn format_delta(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_delta(-d));
    }

    if micros < 1000 {
        format!("{micros}µs")
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (wall-clock time)
fn format_wall(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{micros}µs")
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_formatting_scales_units() {
        assert_eq!(format_delta(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_delta(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_delta(TimeDelta::seconds(2)), "2.00s");
        assert_eq!(format_delta(TimeDelta::microseconds(-1500)), "-1.50ms");
    }

    #[test]
    fn wall_formatting_scales_units() {
        assert_eq!(format_wall(std::time::Duration::from_micros(42)), "42µs");
        assert_eq!(format_wall(std::time::Duration::from_millis(20)), "20.00ms");
        assert_eq!(format_wall(std::time::Duration::from_secs(3)), "3.00s");
    }
}
