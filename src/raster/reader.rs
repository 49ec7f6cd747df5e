use std::io::{BufRead, Seek};

use super::{ImageReader, SourceFormat, SourceImage};
use crate::error::Error;

/// Decodes a JPEG or PNG stream, detecting the format from its leading bytes.
pub struct EncodedImageReader<R: BufRead + Seek> {
    reader: R,
    name: String,
}

impl<R: BufRead + Seek> EncodedImageReader<R> {
    pub fn new(reader: R, name: impl Into<String>) -> Self {
        Self {
            reader,
            name: name.into(),
        }
    }
}

impl<R: BufRead + Seek> ImageReader for EncodedImageReader<R> {
    fn read_image(&mut self) -> crate::Result<SourceImage> {
        let reader = image::ImageReader::new(&mut self.reader)
            .with_guessed_format()
            .map_err(|e| Error::FailedToDecodeImage(self.name.clone(), e.into()))?;
        let format = reader
            .format()
            .and_then(SourceFormat::from_image_format)
            .ok_or_else(|| Error::UnrecognizedImageFormat(self.name.clone()))?;
        let pixels = reader
            .decode()
            .map_err(|e| Error::FailedToDecodeImage(self.name.clone(), e))?;
        log::info!(
            "Decoded {} '{}' ({}x{}, {:?})",
            format,
            self.name,
            pixels.width(),
            pixels.height(),
            pixels.color()
        );
        Ok(SourceImage::new(format, pixels))
    }
}
