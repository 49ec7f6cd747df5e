use std::fmt::Display;

use image::{DynamicImage, ImageFormat};

pub mod grayscale;
pub mod reader;
pub mod writer;

/// Container formats accepted on input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFormat {
    Jpeg,
    Png,
}

impl SourceFormat {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
        }
    }

    fn from_image_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Jpeg => Some(Self::Jpeg),
            ImageFormat::Png => Some(Self::Png),
            _ => None,
        }
    }
}

impl Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

pub struct SourceImage {
    format: SourceFormat,
    pixels: DynamicImage,
}

impl SourceImage {
    pub fn new(format: SourceFormat, pixels: DynamicImage) -> Self {
        Self { format, pixels }
    }

    pub fn format(&self) -> SourceFormat {
        self.format
    }

    pub fn pixels(&self) -> &DynamicImage {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn info(&self) -> ImageInfo {
        ImageInfo {
            format: self.format,
            width: self.width(),
            height: self.height(),
            color_model: format!("{:?}", self.pixels.color()),
        }
    }
}

/// Metadata printed in info mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub format: SourceFormat,
    pub width: u32,
    pub height: u32,
    pub color_model: String,
}

impl Display for ImageInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Image format: {}", self.format)?;
        writeln!(f, "Dimensions: {}x{}", self.width, self.height)?;
        write!(f, "Color model: {}", self.color_model)
    }
}

pub trait ImageReader {
    fn read_image(&mut self) -> crate::Result<SourceImage>;
}

pub trait ImageWriter {
    fn write_image(&mut self) -> image::ImageResult<()>;
}
