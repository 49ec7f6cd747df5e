use image::{GrayImage, ImageBuffer};

use super::SourceImage;
use crate::color::luma_of;

pub struct GrayscaleTransformer<'a> {
    image: &'a SourceImage,
}

impl<'a> GrayscaleTransformer<'a> {
    pub fn new(image: &'a SourceImage) -> Self {
        GrayscaleTransformer { image }
    }

    /// Maps every pixel to its luma. Sources of any depth are widened to 16-bit RGBA first.
    pub fn transform(&self) -> GrayImage {
        let rgba = self.image.pixels().to_rgba16();
        ImageBuffer::from_fn(rgba.width(), rgba.height(), |x, y| {
            luma_of(rgba.get_pixel(x, y))
        })
    }
}
