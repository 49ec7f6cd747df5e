use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;

use image::GrayImage;

use super::ImageWriter;
use crate::error::Error;

pub mod jpeg;
pub mod png;

pub use jpeg::JpegImageWriter;
pub use png::PngImageWriter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
}

impl OutputFormat {
    /// Picks the encoder from the file extension, ignoring case.
    pub fn from_path(path: &Path) -> crate::Result<Self> {
        let extension = path
            .extension()
            .map(OsStr::to_string_lossy)
            .unwrap_or_default();
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            _ if extension.is_empty() => Err(Error::UnsupportedOutputFormat(String::new())),
            _ => Err(Error::UnsupportedOutputFormat(format!(".{}", extension))),
        }
    }

    pub fn writer<'a, T: Write + 'a>(
        &self,
        writer: T,
        image: &'a GrayImage,
        quality: u8,
    ) -> Box<dyn ImageWriter + 'a> {
        match self {
            Self::Jpeg => Box::new(JpegImageWriter::new(writer, image, quality)),
            Self::Png => Box::new(PngImageWriter::new(writer, image)),
        }
    }
}
