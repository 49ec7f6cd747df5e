use std::io::Write;

use image::{codecs::png::PngEncoder, ExtendedColorType, GrayImage, ImageEncoder};

use crate::raster::ImageWriter;

pub struct PngImageWriter<'a, T: Write> {
    writer: T,
    image: &'a GrayImage,
}

impl<'a, T: Write> PngImageWriter<'a, T> {
    pub fn new(writer: T, image: &'a GrayImage) -> Self {
        Self { writer, image }
    }
}

impl<T: Write> ImageWriter for PngImageWriter<'_, T> {
    fn write_image(&mut self) -> image::ImageResult<()> {
        log::info!("Encoding PNG");
        PngEncoder::new(&mut self.writer).write_image(
            self.image.as_raw(),
            self.image.width(),
            self.image.height(),
            ExtendedColorType::L8,
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
