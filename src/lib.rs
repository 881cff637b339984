#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! imgbench library
//!
//! Benchmarks image re-encoding across WebP, PNG, JPEG, AVIF and HEIF,
//! measuring output size and encode duration for a fixed sample set, then
//! summarizes storage savings or losses versus the combined original size.
//!
//! The whole run is a single linear pipeline:
//! Load → (Encode ‖ for all formats × images) → Aggregate → Report.
//!
//! # Example
//!
//! Running the pipeline over an explicit sample list:
//!
//! ```no_run
//! use imgbench::codec::ImageCodec;
//! use imgbench::runner::BenchmarkRunner;
//! use imgbench::{loader, report::Reporter, stats};
//! use std::path::PathBuf;
//!
//! # fn main() -> anyhow::Result<()> {
//! let samples = loader::load_from(vec![
//!     PathBuf::from("photo.jpg"),
//!     PathBuf::from("logo.png"),
//! ])?;
//!
//! let runner = BenchmarkRunner::new(samples, ImageCodec::new());
//! let run = runner.run()?;
//!
//! let stats = stats::aggregate(&run);
//! Reporter::print(&run, &stats);
//! # Ok(())
//! # }
//! ```

/// Encoder adapter over the image codec stack
pub mod codec;
/// Error types for the benchmark pipeline
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Sample image loading
pub mod loader;
/// Tabular report output
pub mod report;
/// Concurrent encode fan-out and result collection
pub mod runner;
/// Aggregate statistics over encode results
pub mod stats;
