//! Tabular report output
//!
//! Prints the raw per-format result lists, the original combined size, and
//! the aggregate stats table to stdout. Output only; nothing is persisted.

use console::style;

use crate::codec::Format;
use crate::fmt::{format_bytes, CHART};
use crate::runner::RunResults;
use crate::stats::AggregateStat;

const RULE_WIDTH: usize = 78;

/// Formats and prints benchmark results
pub struct Reporter;

impl Reporter {
    /// Print the full report: raw results, original size, aggregates
    pub fn print(run: &RunResults, stats: &[(Format, AggregateStat)]) {
        Self::print_raw_results(run);
        println!("\nOriginal Size: {}", run.original_total_size);
        Self::print_aggregates(stats);
    }

    /// Print every collected (size, duration) entry grouped by format
    ///
    /// Entries appear in completion order within each format.
    pub fn print_raw_results(run: &RunResults) {
        println!("\n{} {}", CHART, style("Raw encode results").bold());
        println!("{}", "=".repeat(RULE_WIDTH));
        println!(
            "{:<8} {:>4} {:>14} {:>12} {:>12}",
            "Format", "#", "Size (bytes)", "Size", "Duration"
        );
        println!("{}", "-".repeat(RULE_WIDTH));

        for (format, results) in run.results.iter() {
            for (i, result) in results.iter().enumerate() {
                println!(
                    "{:<8} {:>4} {:>14} {:>12} {:>9} ms",
                    format.name(),
                    i,
                    result.size,
                    format_bytes(result.size),
                    result.duration_ms
                );
            }
        }

        println!("{}", "=".repeat(RULE_WIDTH));
    }

    /// Print the per-format aggregate stats table
    pub fn print_aggregates(stats: &[(Format, AggregateStat)]) {
        println!("\n{} {}", CHART, style("Aggregate stats").bold());
        println!("{}", "=".repeat(RULE_WIDTH));
        println!(
            "{:<8} {:>12} {:>9} {:>6} {:>12} {:>12} {:>12}",
            "Format", "Size", "Duration", "Less?", "Difference", "Save", "Lost"
        );
        println!("{}", "-".repeat(RULE_WIDTH));

        for (format, stat) in stats {
            let save = if stat.difference > 0 {
                style(stat.save.clone()).green()
            } else {
                style(stat.save.clone()).dim()
            };
            let lost = if stat.difference < 0 {
                style(stat.lost.clone()).red()
            } else {
                style(stat.lost.clone()).dim()
            };

            println!(
                "{:<8} {:>12} {:>6} ms {:>6} {:>12} {:>12} {:>12}",
                format.name(),
                stat.total_size,
                stat.total_duration_ms,
                if stat.is_less { "yes" } else { "no" },
                stat.difference,
                save,
                lost
            );
        }

        println!("{}", "=".repeat(RULE_WIDTH));
    }
}
