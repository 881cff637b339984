//! Test fixture helpers for generating sample images
//!
//! Produces small real raster files in temporary directories so tests can
//! exercise the full decode → re-encode path without bundled assets.

#![allow(dead_code)]

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use tempfile::TempDir;

/// Re-export anyhow for convenience
pub use anyhow;

/// Encode a small gradient test image into the given container format
pub fn encode_test_image(format: ImageFormat) -> anyhow::Result<Vec<u8>> {
    let img = RgbImage::from_fn(16, 16, |x, y| {
        Rgb([(x * 16) as u8, (y * 16) as u8, ((x + y) * 8) as u8])
    });

    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(img).write_to(&mut Cursor::new(&mut bytes), format)?;
    Ok(bytes)
}

/// Write the full built-in sample set into `dir/assets`
///
/// File names match the paths the binary loads, so running it with `dir`
/// as the working directory picks these up.
pub fn create_sample_assets(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let assets = dir.join("assets");
    fs::create_dir_all(&assets)?;

    let formats = [
        ("image-1.jpg", ImageFormat::Jpeg),
        ("image-2.webp", ImageFormat::WebP),
        ("image-3.png", ImageFormat::Png),
        ("image-4.gif", ImageFormat::Gif),
        ("image-5.bmp", ImageFormat::Bmp),
        ("image-6.tiff", ImageFormat::Tiff),
    ];

    let mut paths = Vec::new();
    for (name, format) in formats {
        let path = assets.join(name);
        fs::write(&path, encode_test_image(format)?)?;
        paths.push(path);
    }
    Ok(paths)
}

/// Create a temp workspace holding the full sample set under `assets/`
pub fn sample_workspace() -> anyhow::Result<(TempDir, Vec<PathBuf>)> {
    let dir = TempDir::new()?;
    let paths = create_sample_assets(dir.path())?;
    Ok((dir, paths))
}
