//! Public entry points of the grayscale engine.
//!
//! The by-image functions are strict: there is nothing to convert without an image.
//! The by-path functions are lenient: an empty path or a path that is not an
//! existing file produces an empty [`ResultSet`] instead of an error. Decoding errors of files
//! that do exist are always reported.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use rayon::prelude::*;

use crate::{
    algorithm::GrayscaleAlgorithm, decode::decode, error::GrayError, image::ResultSet,
    operations,
};

/// Converts `image`, or returns `None` when no image was provided.
///
/// `None` is distinct from an empty [`ResultSet`]: a successful conversion always
/// contains [`GrayscaleAlgorithm::output_count`] images.
pub fn convert(image: Option<&RgbaImage>, algorithm: GrayscaleAlgorithm) -> Option<ResultSet> {
    image.map(|image| convert_image(image, algorithm))
}

pub fn convert_image(image: &RgbaImage, algorithm: GrayscaleAlgorithm) -> ResultSet {
    operations::execute(image, algorithm)
}

/// Loads the image at `path` and converts it.
///
/// Returns an empty [`ResultSet`] if `path` is empty or is not an existing file.
pub fn convert_from_path(
    path: impl AsRef<Path>,
    algorithm: GrayscaleAlgorithm,
) -> Result<ResultSet, GrayError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        log::debug!("no input path given, nothing to convert");
        return Ok(ResultSet::default());
    }
    if !path.is_file() {
        log::debug!("{} is not a file, nothing to convert", path.display());
        return Ok(ResultSet::default());
    }

    let image = decode(path, None)?.into_rgba8();
    Ok(convert_image(&image, algorithm))
}

/// Converts every image independently on the rayon thread pool.
/// The results are in the same order as `images`.
pub fn convert_batch(images: &[RgbaImage], algorithm: GrayscaleAlgorithm) -> Vec<ResultSet> {
    log::debug!("converting a batch of {} images", images.len());
    images
        .par_iter()
        .map(|image| convert_image(image, algorithm))
        .collect()
}

/// A converter bound to a single input file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrayProcessor {
    path: PathBuf,
}

impl GrayProcessor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Same contract as [`convert_from_path`]
    pub fn to_grayscale(&self, algorithm: GrayscaleAlgorithm) -> Result<ResultSet, GrayError> {
        convert_from_path(&self.path, algorithm)
    }
}
