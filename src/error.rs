use std::{fmt::Display, path::PathBuf};

use image::ImageError;

#[derive(Debug)]
pub enum GrayError {
    /// The algorithm name or numeric tag does not match any known algorithm
    UnsupportedAlgorithm(String),
    /// The codec failed to decode the input file
    Decode(ImageError),
    Encode(PathBuf, ImageError),
    UnknownOutputFormat(PathBuf),
    InputNotFound(PathBuf),
    InvalidArgument(String),
}

impl Display for GrayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedAlgorithm(name) => {
                write!(f, "unsupported grayscale algorithm `{}'", name)
            }
            Self::Decode(error) => write!(f, "failed to decode image: {}", error),
            Self::Encode(path, error) => {
                write!(f, "unable to write image `{}': {}", path.display(), error)
            }
            Self::UnknownOutputFormat(path) => {
                // mimics imagemagick, which reports the extension in upper case
                let extension = path.extension().unwrap_or_default();
                write!(
                    f,
                    "no encode delegate for this image format `{}'",
                    extension.to_ascii_uppercase().display()
                )
            }
            Self::InputNotFound(path) => write!(
                f,
                "unable to open image `{}': No such file or directory",
                path.display()
            ),
            Self::InvalidArgument(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for GrayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(error) | Self::Encode(_, error) => Some(error),
            _ => None,
        }
    }
}

impl From<ImageError> for GrayError {
    fn from(error: ImageError) -> Self {
        Self::Decode(error)
    }
}
