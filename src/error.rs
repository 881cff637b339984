//! Error types for the benchmark pipeline
//!
//! Every error here is fatal to the run: an unreadable sample aborts before
//! any encoding starts, and a failed encode aborts the whole run with no
//! partial report. Errors propagate to the binary boundary, where they are
//! printed as a styled chain and the process exits non-zero.

use std::path::PathBuf;
use thiserror::Error;

use crate::codec::Format;

/// Errors produced by the benchmark pipeline
#[derive(Error, Debug)]
pub enum BenchError {
    /// Sample image could not be read at startup
    #[error("failed to read sample image: {}", path.display())]
    ReadSample {
        /// Path of the unreadable sample
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Input image could not be decoded for re-encoding
    #[error("failed to decode input for {format} encode")]
    Decode {
        /// Target format whose encode required the decode
        format: Format,
        #[source]
        /// Codec error source
        source: image::ImageError,
    },

    /// Codec could not produce output for a (image, format) pair
    #[error("failed to encode image as {format}")]
    Encode {
        /// Target format that failed
        format: Format,
        #[source]
        /// Codec error source
        source: image::ImageError,
    },
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format an error with its full cause chain
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();
        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        output
    }
}
