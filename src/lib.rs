use std::{
    fs::{File, OpenOptions},
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
pub use error::{Error, ErrorKind};
use image::{GrayImage, ImageError};
pub use raster::{writer::OutputFormat, ImageInfo, SourceFormat, SourceImage};
use raster::{grayscale::GrayscaleTransformer, reader::EncodedImageReader, ImageReader};

mod cli;
mod color;
mod error;
mod logger;
pub mod raster;

pub type Result<T> = std::result::Result<T, error::Error>;

pub const DEFAULT_QUALITY: i64 = 90;
const MIN_QUALITY: i64 = 1;
const MAX_QUALITY: i64 = 100;

/// Options as given on the command line, before validation.
#[derive(Clone, Debug, PartialEq)]
pub struct Arguments {
    input_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    quality: i64,
    info: bool,
}

impl Arguments {
    pub fn new(
        input_file: Option<PathBuf>,
        output_file: Option<PathBuf>,
        quality: i64,
        info: bool,
    ) -> Self {
        Self {
            input_file,
            output_file,
            quality,
            info,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Configuration {
    input_file: PathBuf,
    output_file: PathBuf,
    quality: u8,
    info: bool,
}

impl Configuration {
    pub fn input_file(&self) -> &Path {
        &self.input_file
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    pub fn info(&self) -> bool {
        self.info
    }
}

fn non_empty(path: &Option<PathBuf>) -> Option<&PathBuf> {
    path.as_ref().filter(|path| !path.as_os_str().is_empty())
}

impl TryFrom<&Arguments> for Configuration {
    type Error = Error;

    fn try_from(value: &Arguments) -> Result<Self> {
        let input_file = non_empty(&value.input_file).ok_or(Error::MissingInputPath)?;
        let output_file = non_empty(&value.output_file).ok_or(Error::MissingOutputPath)?;
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&value.quality) {
            return Err(Error::QualityOutOfRange(value.quality));
        }
        Ok(Configuration {
            input_file: input_file.clone(),
            output_file: output_file.clone(),
            quality: value.quality as u8,
            info: value.info,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    InfoReported(ImageInfo),
    Saved(PathBuf),
}

fn display_name(file_path: &Path) -> String {
    file_path.display().to_string()
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path)
        .map_err(|e| Error::UnableToOpenInputFileForReading(display_name(file_path), e))
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| Error::UnableToOpenOutputFileForWriting(display_name(file_path), e))
}

pub fn decode(file_path: &Path) -> Result<SourceImage> {
    let input_file = open_input_file(file_path)?;
    let mut reader = EncodedImageReader::new(BufReader::new(input_file), display_name(file_path));
    reader.read_image()
}

pub fn encode(image: &GrayImage, file_path: &Path, quality: u8) -> Result<()> {
    let output_format = OutputFormat::from_path(file_path)?;
    let output_file = open_output_file(file_path)?;
    let mut writer = output_format.writer(BufWriter::new(output_file), image, quality);
    writer.write_image().map_err(|e| match e {
        ImageError::IoError(e) => Error::FailedToWriteOutputFile(display_name(file_path), e),
        e => Error::FailedToEncodeImage(display_name(file_path), e),
    })
}

pub fn run(configuration: &Configuration) -> Result<Outcome> {
    log::debug!("Running with {:?}", configuration);
    let image = decode(configuration.input_file())?;
    if configuration.info() {
        return Ok(Outcome::InfoReported(image.info()));
    }
    let grayscale = GrayscaleTransformer::new(&image).transform();
    encode(&grayscale, configuration.output_file(), configuration.quality())?;
    log::info!(
        "Wrote {}x{} grayscale image to '{}'",
        grayscale.width(),
        grayscale.height(),
        configuration.output_file().display()
    );
    Ok(Outcome::Saved(configuration.output_file().to_path_buf()))
}

pub fn convert_to_grayscale(arguments: &Arguments) -> Result<Outcome> {
    let configuration = Configuration::try_from(arguments)?;
    run(&configuration)
}
