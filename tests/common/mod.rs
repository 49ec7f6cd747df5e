#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

/// A scratch directory unique to one test, emptied on creation.
pub fn scratch_directory(test_name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_TARGET_TMPDIR"));
    path.push(test_name);
    if path.exists() {
        fs::remove_dir_all(&path).expect("Deletion of scratch directory failed");
    }
    fs::create_dir_all(&path).expect("Creation of scratch directory failed");
    path
}

pub fn colorful_rgb(width: u32, height: u32) -> DynamicImage {
    let image = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 255 / width) as u8, (y * 255 / height) as u8, 128])
    });
    DynamicImage::ImageRgb8(image)
}

pub fn translucent_rgba(width: u32, height: u32) -> DynamicImage {
    let image = RgbaImage::from_fn(width, height, |x, _| {
        Rgba([255, 64, 0, if x % 2 == 0 { 255 } else { 0 }])
    });
    DynamicImage::ImageRgba8(image)
}

pub fn write_fixture(image: &DynamicImage, path: &Path, format: ImageFormat) {
    image
        .save_with_format(path, format)
        .expect("Writing of fixture failed");
}
