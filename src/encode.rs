use std::path::{Path, PathBuf};

use image::{GrayImage, ImageFormat, Luma, RgbaImage};

use crate::{error::GrayError, image::ResultSet, utils::filename::output_paths};

/// Writes every image of `result` and returns the paths written, in order.
///
/// A single image is written to `output`. Several images are written next to it
/// with `-1`, `-2`, ... inserted before the extension.
pub fn save_all(
    result: &ResultSet,
    output: &Path,
    format: Option<ImageFormat>,
) -> Result<Vec<PathBuf>, GrayError> {
    let format = choose_encoding_format(output, format)?;
    let paths = output_paths(output, result.len());
    for (image, path) in result.iter().zip(&paths) {
        encode(image, path, format)?;
        log::debug!("wrote {}", path.display());
    }
    Ok(paths)
}

fn encode(image: &RgbaImage, path: &Path, format: ImageFormat) -> Result<(), GrayError> {
    // R, G and B are equal and alpha is opaque, so the red channel alone is the
    // whole image. Single-channel luma is accepted by every encoder.
    let luma = GrayImage::from_fn(image.width(), image.height(), |x, y| {
        Luma([image.get_pixel(x, y)[0]])
    });
    luma.save_with_format(path, format)
        .map_err(|error| GrayError::Encode(path.to_path_buf(), error))
}

fn choose_encoding_format(
    output: &Path,
    explicitly_specified: Option<ImageFormat>,
) -> Result<ImageFormat, GrayError> {
    if let Some(format) = explicitly_specified {
        return Ok(format);
    }
    // if format was not explicitly specified, guess based on the output path
    ImageFormat::from_path(output)
        .map_err(|_| GrayError::UnknownOutputFormat(output.to_path_buf()))
}
