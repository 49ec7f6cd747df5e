use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Io,
    Decode,
    Encode,
    UnsupportedFormat,
}

#[derive(Debug)]
pub enum Error {
    MissingInputPath,
    MissingOutputPath,
    QualityOutOfRange(i64),
    InvalidArguments(String),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToWriteOutputFile(String, std::io::Error),
    UnrecognizedImageFormat(String),
    FailedToDecodeImage(String, image::ImageError),
    FailedToEncodeImage(String, image::ImageError),
    UnsupportedOutputFormat(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingInputPath
            | Self::MissingOutputPath
            | Self::QualityOutOfRange(_)
            | Self::InvalidArguments(_) => ErrorKind::Validation,
            Self::UnableToOpenInputFileForReading(..)
            | Self::UnableToOpenOutputFileForWriting(..)
            | Self::FailedToWriteOutputFile(..) => ErrorKind::Io,
            Self::UnrecognizedImageFormat(_) | Self::FailedToDecodeImage(..) => ErrorKind::Decode,
            Self::FailedToEncodeImage(..) => ErrorKind::Encode,
            Self::UnsupportedOutputFormat(_) => ErrorKind::UnsupportedFormat,
        }
    }

    /// Whether the usage text should accompany this error on stderr.
    pub fn is_missing_path(&self) -> bool {
        matches!(self, Self::MissingInputPath | Self::MissingOutputPath)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingInputPath => {
                write!(f, "Both -input and -output are required, but -input is missing")
            }
            Self::MissingOutputPath => {
                write!(f, "Both -input and -output are required, but -output is missing")
            }
            Self::QualityOutOfRange(quality) => {
                write!(f, "Quality must be between 1 and 100, but was {}", quality)
            }
            Self::InvalidArguments(message) => write!(f, "{}", message.trim_end()),
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToWriteOutputFile(path, error) => {
                write!(f, "Failed to write output file '{}': {}", path, error)
            }
            Self::UnrecognizedImageFormat(path) => {
                write!(
                    f,
                    "Unable to decode '{}': not a JPEG or PNG image",
                    path
                )
            }
            Self::FailedToDecodeImage(path, error) => {
                write!(f, "Unable to decode '{}': {}", path, error)
            }
            Self::FailedToEncodeImage(path, error) => {
                write!(f, "Unable to encode output image '{}': {}", path, error)
            }
            Self::UnsupportedOutputFormat(extension) => {
                write!(
                    f,
                    "Unsupported output format: '{}'. Use .jpg, .jpeg, or .png",
                    extension
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error)
            | Self::UnableToOpenOutputFileForWriting(_, error)
            | Self::FailedToWriteOutputFile(_, error) => Some(error),
            Self::FailedToDecodeImage(_, error) | Self::FailedToEncodeImage(_, error) => {
                Some(error)
            }
            _ => None,
        }
    }
}
