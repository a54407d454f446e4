use image::RgbaImage;

use super::pixelwise::map_pixels;

/// Splits `image` into its red, green and blue planes, in that order.
/// Each plane replicates a single source channel across R, G and B.
pub fn split_planes(image: &RgbaImage) -> [RgbaImage; 3] {
    [
        map_pixels(image, |r, _, _| r),
        map_pixels(image, |_, g, _| g),
        map_pixels(image, |_, _, b| b),
    ]
}
