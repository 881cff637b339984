//! Concurrent encode fan-out and result collection
//!
//! Launches one task per (image, format) pair — all five format batches in
//! flight at once, no concurrency cap — and collects timed results over a
//! channel as tasks complete. The first failed encode aborts the whole run;
//! there is no per-item isolation, retry, or timeout.

use std::sync::mpsc;
use std::time::Instant;

use indicatif::ProgressBar;
use log::{debug, info};

use crate::codec::{Encoder, Format};
use crate::error::BenchError;
use crate::loader::SampleImage;

/// Size and timing of a single encode operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeResult {
    /// Encoded output size in bytes
    pub size: u64,
    /// Wall-clock encode time in whole milliseconds
    pub duration_ms: u64,
}

/// Per-format result lists, indexable by [`Format`]
///
/// Entries within a format's list appear in completion order, not input
/// order, since encodes run concurrently.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    lists: [Vec<EncodeResult>; Format::COUNT],
}

impl ResultSet {
    /// Append a completed result to a format's list
    pub fn push(&mut self, format: Format, result: EncodeResult) {
        self.lists[format.index()].push(result);
    }

    /// Results collected for one format
    pub fn get(&self, format: Format) -> &[EncodeResult] {
        &self.lists[format.index()]
    }

    /// Iterate (format, results) in canonical format order
    pub fn iter(&self) -> impl Iterator<Item = (Format, &[EncodeResult])> {
        Format::ALL
            .into_iter()
            .map(|format| (format, self.get(format)))
    }
}

/// Everything a completed run produced, passed forward to aggregation
///
/// An explicit immutable result struct rather than a shared mutable
/// accumulator, so downstream stages never race with collection.
#[derive(Debug, Clone)]
pub struct RunResults {
    /// Combined byte length of all input samples
    pub original_total_size: u64,
    /// Per-format encode results
    pub results: ResultSet,
}

/// Drives the Load → Encode fan-out for a fixed sample set
pub struct BenchmarkRunner<E> {
    samples: Vec<SampleImage>,
    encoder: E,
}

impl<E: Encoder + Sync> BenchmarkRunner<E> {
    /// Create a runner over loaded samples and a codec capability
    pub fn new(samples: Vec<SampleImage>, encoder: E) -> Self {
        Self { samples, encoder }
    }

    /// Encode every sample into every target format concurrently
    ///
    /// Blocks until all (image, format) operations have completed, then
    /// returns the collected results.
    ///
    /// # Errors
    /// The first [`BenchError`] from any encode aborts the run; no partial
    /// results are returned.
    pub fn run(&self) -> Result<RunResults, BenchError> {
        let original_total_size: u64 = self.samples.iter().map(SampleImage::len).sum();
        let total_ops = (self.samples.len() * Format::COUNT) as u64;

        info!(
            "encoding {} samples ({} bytes) into {} formats",
            self.samples.len(),
            original_total_size,
            Format::COUNT
        );

        let progress = ProgressBar::new(total_ops);
        let (tx, rx) = mpsc::channel();

        rayon::scope(|scope| {
            for format in Format::ALL {
                for sample in &self.samples {
                    let tx = tx.clone();
                    let progress = progress.clone();
                    scope.spawn(move |_| {
                        let outcome = self.encode_timed(sample, format);
                        progress.inc(1);
                        // collector may already have bailed on an error
                        let _ = tx.send((format, outcome));
                    });
                }
            }
        });
        drop(tx);
        progress.finish_and_clear();

        let mut results = ResultSet::default();
        for (format, outcome) in rx {
            results.push(format, outcome?);
        }

        Ok(RunResults {
            original_total_size,
            results,
        })
    }

    fn encode_timed(
        &self,
        sample: &SampleImage,
        format: Format,
    ) -> Result<EncodeResult, BenchError> {
        let start = Instant::now();
        let encoded = self.encoder.encode(&sample.bytes, format)?;
        let duration_ms = start.elapsed().as_millis() as u64;

        debug!(
            "{} -> {format}: {} bytes in {duration_ms} ms",
            sample.path.display(),
            encoded.len()
        );

        Ok(EncodeResult {
            size: encoded.len() as u64,
            duration_ms,
        })
    }
}
