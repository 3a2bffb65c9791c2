#![allow(dead_code)]

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

/// RGB noise from a small LCG so PNG can't compress it below the threshold.
pub fn noisy_image(width: u32, height: u32, seed: u32) -> DynamicImage {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    let img = RgbImage::from_fn(width, height, |_, _| {
        let mut next = || {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        };
        Rgb([next(), next(), next()])
    });
    DynamicImage::ImageRgb8(img)
}

pub fn write_png(path: &Path, width: u32, height: u32, seed: u32) -> PathBuf {
    noisy_image(width, height, seed)
        .save_with_format(path, ImageFormat::Png)
        .unwrap();
    path.to_path_buf()
}

/// Large image that is noisy only in its top `noisy_rows`, so it clears the
/// size threshold without a multi-megabyte PNG.
pub fn write_banded_png(path: &Path, width: u32, height: u32, noisy_rows: u32, seed: u32) -> PathBuf {
    let noise = noisy_image(width, noisy_rows.min(height), seed).to_rgb8();
    let img = RgbImage::from_fn(width, height, |x, y| {
        if y < noise.height() {
            *noise.get_pixel(x, y)
        } else {
            Rgb([90, 120, 150])
        }
    });
    DynamicImage::ImageRgb8(img)
        .save_with_format(path, ImageFormat::Png)
        .unwrap();
    path.to_path_buf()
}

pub fn write_small_jpeg(path: &Path) -> PathBuf {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(80, 60, Rgb([40, 90, 160])))
        .save_with_format(path, ImageFormat::Jpeg)
        .unwrap();
    path.to_path_buf()
}

/// An oversized `.jpg` whose contents are not an image at all.
pub fn write_corrupt_jpeg(path: &Path, size: usize) -> PathBuf {
    let data: Vec<u8> = b"not really a jpeg "
        .iter()
        .copied()
        .cycle()
        .take(size)
        .collect();
    fs::write(path, data).unwrap();
    path.to_path_buf()
}

pub fn file_len(path: &Path) -> u64 {
    fs::metadata(path).unwrap().len()
}
