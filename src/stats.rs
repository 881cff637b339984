//! Aggregate statistics over per-format encode results
//!
//! Pure functions from collected results to per-format totals and
//! savings/losses versus the combined original size.

use crate::codec::Format;
use crate::fmt::format_bytes;
use crate::runner::RunResults;

/// Per-format totals compared against the original combined size
///
/// `difference` keeps its sign, but the human-readable view deliberately
/// splits it into separately formatted `save` and `lost` strings, exactly
/// one of which is "0 Bytes". That dual convention is intended behavior,
/// not a bug to fold into one signed string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateStat {
    /// Sum of encoded output sizes for this format, in bytes
    pub total_size: u64,
    /// Sum of encode durations for this format, in milliseconds
    pub total_duration_ms: u64,
    /// Whether the format came out smaller than the original total
    pub is_less: bool,
    /// original_total_size − total_size
    pub difference: i64,
    /// Human-readable bytes saved (difference ≥ 0, else "0 Bytes")
    pub save: String,
    /// Human-readable bytes lost (difference < 0, else "0 Bytes")
    pub lost: String,
}

/// Compute one [`AggregateStat`] per format, in canonical format order
pub fn aggregate(run: &RunResults) -> Vec<(Format, AggregateStat)> {
    Format::ALL
        .into_iter()
        .map(|format| {
            (
                format,
                aggregate_format(run.results.get(format), run.original_total_size),
            )
        })
        .collect()
}

fn aggregate_format(
    results: &[crate::runner::EncodeResult],
    original_total_size: u64,
) -> AggregateStat {
    let total_size: u64 = results.iter().map(|r| r.size).sum();
    let total_duration_ms: u64 = results.iter().map(|r| r.duration_ms).sum();
    let difference = original_total_size as i64 - total_size as i64;

    AggregateStat {
        total_size,
        total_duration_ms,
        is_less: total_size < original_total_size,
        difference,
        save: format_bytes(difference.max(0) as u64),
        lost: format_bytes(if difference < 0 { difference.unsigned_abs() } else { 0 }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fmt::format_bytes;
    use crate::runner::{EncodeResult, ResultSet};

    fn run_with(format: Format, sizes: &[u64], original_total_size: u64) -> RunResults {
        let mut results = ResultSet::default();
        for &size in sizes {
            results.push(
                format,
                EncodeResult {
                    size,
                    duration_ms: 7,
                },
            );
        }
        RunResults {
            original_total_size,
            results,
        }
    }

    #[test]
    fn test_aggregate_savings_scenario() {
        // two images of 1000 and 2000 bytes, format totals 1500
        let run = run_with(Format::WebP, &[700, 800], 3000);
        let stats = aggregate(&run);
        let (format, stat) = &stats[0];

        assert_eq!(*format, Format::WebP);
        assert_eq!(stat.total_size, 1500);
        assert_eq!(stat.total_duration_ms, 14);
        assert!(stat.is_less);
        assert_eq!(stat.difference, 1500);
        assert_eq!(stat.save, format_bytes(1500));
        assert_eq!(stat.lost, "0 Bytes");
    }

    #[test]
    fn test_aggregate_loss_scenario() {
        let run = run_with(Format::Png, &[2500, 2500], 3000);
        let stat = &stats_for(&run, Format::Png);

        assert_eq!(stat.total_size, 5000);
        assert!(!stat.is_less);
        assert_eq!(stat.difference, -2000);
        assert_eq!(stat.save, "0 Bytes");
        assert_eq!(stat.lost, format_bytes(2000));
    }

    #[test]
    fn test_aggregate_break_even_counts_as_save() {
        // difference == 0: not less, save and lost both format zero
        let run = run_with(Format::Jpeg, &[3000], 3000);
        let stat = &stats_for(&run, Format::Jpeg);

        assert!(!stat.is_less);
        assert_eq!(stat.difference, 0);
        assert_eq!(stat.save, "0 Bytes");
        assert_eq!(stat.lost, "0 Bytes");
    }

    #[test]
    fn test_exactly_one_of_save_lost_is_nonzero_when_difference_nonzero() {
        for (sizes, original) in [(&[100u64, 100][..], 3000u64), (&[5000, 5000][..], 3000)] {
            let run = run_with(Format::Avif, sizes, original);
            let stat = &stats_for(&run, Format::Avif);
            if stat.difference > 0 {
                assert_ne!(stat.save, "0 Bytes");
                assert_eq!(stat.lost, "0 Bytes");
            } else {
                assert_eq!(stat.save, "0 Bytes");
                assert_ne!(stat.lost, "0 Bytes");
            }
        }
    }

    #[test]
    fn test_aggregate_covers_all_formats_in_order() {
        let run = run_with(Format::WebP, &[10], 100);
        let stats = aggregate(&run);
        let order: Vec<Format> = stats.iter().map(|(f, _)| *f).collect();
        assert_eq!(order, Format::ALL);
    }

    #[test]
    fn test_original_total_size_shared_across_formats() {
        // empty formats all compare against the same original size
        let run = RunResults {
            original_total_size: 4096,
            results: ResultSet::default(),
        };
        for (_, stat) in aggregate(&run) {
            assert_eq!(stat.difference, 4096);
            assert!(stat.is_less);
        }
    }

    fn stats_for(run: &RunResults, format: Format) -> AggregateStat {
        aggregate(run)
            .into_iter()
            .find(|(f, _)| *f == format)
            .map(|(_, stat)| stat)
            .expect("every format is aggregated")
    }
}
