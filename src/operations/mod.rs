mod component;
mod grayscale;
mod pixelwise;

pub use pixelwise::PARALLEL_THRESHOLD;

use image::RgbaImage;

use crate::{algorithm::GrayscaleAlgorithm, image::ResultSet};

/// Converts `image` with `algorithm`. Every output has the dimensions of the input.
pub fn execute(image: &RgbaImage, algorithm: GrayscaleAlgorithm) -> ResultSet {
    let (width, height) = image.dimensions();
    log::debug!(
        "converting {width}x{height} image with {algorithm} ({})",
        if pixelwise::is_parallel(image) {
            "parallel"
        } else {
            "sequential"
        }
    );

    let images = match algorithm {
        GrayscaleAlgorithm::Component => Vec::from(component::split_planes(image)),
        GrayscaleAlgorithm::Maximum => vec![pixelwise::map_pixels(image, grayscale::maximum)],
        GrayscaleAlgorithm::Minimum => vec![pixelwise::map_pixels(image, grayscale::minimum)],
        GrayscaleAlgorithm::Average => vec![pixelwise::map_pixels(image, grayscale::average)],
        GrayscaleAlgorithm::WeightedAverage => {
            vec![pixelwise::map_pixels(image, grayscale::weighted_average)]
        }
    };
    debug_assert_eq!(images.len(), algorithm.output_count());

    ResultSet::new(images)
}
