//! Sample image loading
//!
//! Reads the fixed set of sample images into memory before any encoding
//! starts. Any unreadable path aborts startup; there is no retry.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::BenchError;

/// Built-in sample set, one image per common source format
pub const SAMPLE_IMAGES: [&str; 6] = [
    "assets/image-1.jpg",
    "assets/image-2.webp",
    "assets/image-3.png",
    "assets/image-4.gif",
    "assets/image-5.bmp",
    "assets/image-6.tiff",
];

/// A sample image held in memory for the lifetime of the run
///
/// The raw bytes are loaded once and shared read-only by every concurrent
/// encode task.
#[derive(Debug, Clone)]
pub struct SampleImage {
    /// Where the sample was read from
    pub path: PathBuf,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl SampleImage {
    /// Size of the raw sample in bytes
    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Whether the sample is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Load the built-in sample set
///
/// # Errors
/// Returns [`BenchError::ReadSample`] for the first unreadable path.
pub fn load_samples() -> Result<Vec<SampleImage>, BenchError> {
    load_from(SAMPLE_IMAGES.iter().map(PathBuf::from))
}

/// Load samples from an explicit ordered path list
///
/// The returned vec preserves input order. Used directly by tests and by
/// [`load_samples`] for the built-in set.
pub fn load_from<I>(paths: I) -> Result<Vec<SampleImage>, BenchError>
where
    I: IntoIterator<Item = PathBuf>,
{
    paths
        .into_iter()
        .map(|path| {
            let bytes = read_sample(&path)?;
            debug!("loaded {} ({} bytes)", path.display(), bytes.len());
            Ok(SampleImage { path, bytes })
        })
        .collect()
}

fn read_sample(path: &Path) -> Result<Vec<u8>, BenchError> {
    fs::read(path).map_err(|source| BenchError::ReadSample {
        path: path.to_path_buf(),
        source,
    })
}
