//! Applies a per-pixel intensity function to a whole image.

use image::RgbaImage;
use rayon::prelude::*;

use crate::image::gray;

/// Images with at least this many pixels are processed on the rayon thread pool.
/// Smaller images are cheaper to convert than to schedule.
pub const PARALLEL_THRESHOLD: usize = 1 << 16;

const CHANNELS: usize = 4;

/// Builds a new opaque grayscale image where every pixel is `kernel(r, g, b)`
/// of the source pixel at the same position.
pub fn map_pixels<F>(source: &RgbaImage, kernel: F) -> RgbaImage
where
    F: Fn(u8, u8, u8) -> u8 + Sync,
{
    let (width, height) = source.dimensions();
    let mut output = RgbaImage::new(width, height);

    let apply = |(target, pixel): (&mut [u8], &[u8])| {
        target.copy_from_slice(&gray(kernel(pixel[0], pixel[1], pixel[2])).0);
    };

    if is_parallel(source) {
        output
            .par_chunks_exact_mut(CHANNELS)
            .zip(source.par_chunks_exact(CHANNELS))
            .for_each(&apply);
    } else {
        output
            .chunks_exact_mut(CHANNELS)
            .zip(source.chunks_exact(CHANNELS))
            .for_each(&apply);
    }

    output
}

pub fn is_parallel(image: &RgbaImage) -> bool {
    let (width, height) = image.dimensions();
    width as usize * height as usize >= PARALLEL_THRESHOLD
}
