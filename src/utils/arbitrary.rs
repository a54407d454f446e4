//! Helpers for using `quickcheck`'s `Arbitrary` trait

use image::{Rgba, RgbaImage};
use quickcheck::Arbitrary;

/// Largest side of a generated image. Zero-sized sides are included on purpose.
const MAX_SIDE: u8 = 24;

/// An arbitrary RGBA image, kept small so that properties run quickly
#[derive(Debug, Clone)]
pub struct TestImage(pub RgbaImage);

impl Arbitrary for TestImage {
    fn arbitrary(gen: &mut quickcheck::Gen) -> Self {
        let width = side(gen);
        let height = side(gen);
        Self(RgbaImage::from_fn(width, height, |_, _| pixel(gen)))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // drop the bottom row, then the rightmost column
        let (width, height) = self.0.dimensions();
        let mut smaller = Vec::new();
        if height > 0 {
            smaller.push(crop(&self.0, width, height - 1));
        }
        if width > 0 {
            smaller.push(crop(&self.0, width - 1, height));
        }
        Box::new(smaller.into_iter())
    }
}

#[must_use]
fn side(gen: &mut quickcheck::Gen) -> u32 {
    u32::from(u8::arbitrary(gen) % (MAX_SIDE + 1))
}

/// Any RGBA value, alpha included
#[must_use]
fn pixel(gen: &mut quickcheck::Gen) -> Rgba<u8> {
    Rgba([
        u8::arbitrary(gen),
        u8::arbitrary(gen),
        u8::arbitrary(gen),
        u8::arbitrary(gen),
    ])
}

fn crop(image: &RgbaImage, width: u32, height: u32) -> TestImage {
    TestImage(RgbaImage::from_fn(width, height, |x, y| *image.get_pixel(x, y)))
}
