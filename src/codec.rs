//! Encoder adapter over the image codec stack
//!
//! Wraps the `image` crate behind a single `encode(image, format)` entry
//! point dispatched on a [`Format`] tag. Every encode requests maximum
//! quality; the HEIF target rides the AV1 encoder, an AVIF payload being a
//! HEIF container carrying AV1.

use std::fmt;

use image::codecs::avif::AvifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::codecs::webp::WebPEncoder;
use image::DynamicImage;
use log::trace;

use crate::error::BenchError;

/// Maximum-quality setting requested for every target format
const MAX_QUALITY: u8 = 100;

/// AV1 encoder speed (1 = slowest/best, 10 = fastest)
const AV1_SPEED: u8 = 4;

/// Target re-encoding format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// WebP, lossless at maximum quality
    WebP,
    /// PNG at best compression
    Png,
    /// JPEG at quality 100
    Jpeg,
    /// AVIF at quality 100
    Avif,
    /// HEIF with AV1-based compression
    Heif,
}

impl Format {
    /// Every target format, in canonical report order
    pub const ALL: [Format; 5] = [
        Format::WebP,
        Format::Png,
        Format::Jpeg,
        Format::Avif,
        Format::Heif,
    ];

    /// Number of target formats
    pub const COUNT: usize = Self::ALL.len();

    /// Lowercase format name used as the report key
    pub fn name(self) -> &'static str {
        match self {
            Format::WebP => "webp",
            Format::Png => "png",
            Format::Jpeg => "jpeg",
            Format::Avif => "avif",
            Format::Heif => "heif",
        }
    }

    /// Position in [`Format::ALL`]
    pub(crate) fn index(self) -> usize {
        match self {
            Format::WebP => 0,
            Format::Png => 1,
            Format::Jpeg => 2,
            Format::Avif => 3,
            Format::Heif => 4,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A codec capability: raw image bytes in, encoded bytes out
///
/// One-shot buffer-in/buffer-out, no streaming. Implemented for production
/// by [`ImageCodec`]; tests substitute deterministic mocks.
pub trait Encoder {
    /// Re-encode `image` into `format` at maximum quality
    ///
    /// # Errors
    /// Fails with [`BenchError::Decode`] if the input cannot be decoded and
    /// [`BenchError::Encode`] if the codec cannot produce output. Both are
    /// fatal to the run.
    fn encode(&self, image: &[u8], format: Format) -> Result<Vec<u8>, BenchError>;
}

/// Production encoder backed by the `image` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageCodec;

impl ImageCodec {
    /// Create the production codec
    pub fn new() -> Self {
        Self
    }
}

impl Encoder for ImageCodec {
    fn encode(&self, image: &[u8], format: Format) -> Result<Vec<u8>, BenchError> {
        let decoded = image::load_from_memory(image)
            .map_err(|source| BenchError::Decode { format, source })?;
        let decoded = normalize(decoded);

        trace!(
            "encoding {}x{} image as {format}",
            decoded.width(),
            decoded.height()
        );

        let mut out = Vec::new();
        let written = match format {
            Format::WebP => decoded.write_with_encoder(WebPEncoder::new_lossless(&mut out)),
            Format::Png => decoded.write_with_encoder(PngEncoder::new_with_quality(
                &mut out,
                CompressionType::Best,
                FilterType::Adaptive,
            )),
            // JPEG has no alpha channel, always feed it RGB
            Format::Jpeg => decoded
                .to_rgb8()
                .write_with_encoder(JpegEncoder::new_with_quality(&mut out, MAX_QUALITY)),
            Format::Avif => decoded.write_with_encoder(AvifEncoder::new_with_speed_quality(
                &mut out,
                AV1_SPEED,
                MAX_QUALITY,
            )),
            // HEIF with AV1 compression: same AV1 encoder, HEIF container family
            Format::Heif => decoded.write_with_encoder(AvifEncoder::new_with_speed_quality(
                &mut out,
                AV1_SPEED,
                MAX_QUALITY,
            )),
        };

        written.map_err(|source| BenchError::Encode { format, source })?;
        Ok(out)
    }
}

/// Reduce exotic pixel layouts to RGB8/RGBA8
///
/// The WebP lossless and AV1 encoders only take 8-bit RGB(A) input, while
/// decoded samples may be 16-bit or grayscale.
fn normalize(img: DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => img,
        other if other.color().has_alpha() => DynamicImage::ImageRgba8(other.to_rgba8()),
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}
