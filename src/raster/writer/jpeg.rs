use std::io::Write;

use image::{codecs::jpeg::JpegEncoder, ExtendedColorType, GrayImage, ImageEncoder};

use crate::raster::ImageWriter;

pub struct JpegImageWriter<'a, T: Write> {
    writer: T,
    image: &'a GrayImage,
    quality: u8,
}

impl<'a, T: Write> JpegImageWriter<'a, T> {
    pub fn new(writer: T, image: &'a GrayImage, quality: u8) -> Self {
        Self {
            writer,
            image,
            quality,
        }
    }
}

impl<T: Write> ImageWriter for JpegImageWriter<'_, T> {
    fn write_image(&mut self) -> image::ImageResult<()> {
        log::info!("Encoding JPEG with quality {}", self.quality);
        let encoder = JpegEncoder::new_with_quality(&mut self.writer, self.quality);
        encoder.write_image(
            self.image.as_raw(),
            self.image.width(),
            self.image.height(),
            ExtendedColorType::L8,
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
