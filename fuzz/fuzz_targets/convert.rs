#![no_main]

use arbitrary::Unstructured;
use graymagick::{convert_image, GrayscaleAlgorithm};
use image::RgbaImage;
use libfuzzer_sys::fuzz_target;

#[derive(Debug)]
struct StructuredImage(RgbaImage);

impl<'a> arbitrary::Arbitrary<'a> for StructuredImage {
    fn arbitrary(unstructured: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        // zero-sized images are valid input
        let width: u8 = unstructured.arbitrary()?;
        let height: u8 = unstructured.arbitrary()?;
        let rgba_len = width as usize * height as usize * 4;
        let rgba_data = unstructured.bytes(rgba_len)?;

        RgbaImage::from_raw(width as u32, height as u32, rgba_data.to_vec())
            .map(Self)
            .ok_or(arbitrary::Error::IncorrectFormat)
    }
}

fuzz_target!(|input: (StructuredImage, u8)| {
    let (StructuredImage(image), tag) = input;
    // arbitrary tags exercise the rejection of unknown algorithms
    let Ok(algorithm) = GrayscaleAlgorithm::try_from(u32::from(tag)) else {
        return;
    };

    let result = convert_image(&image, algorithm);

    assert_eq!(result.len(), algorithm.output_count());
    for (index, output) in result.iter().enumerate() {
        assert_eq!(output.dimensions(), image.dimensions());
        for (source, gray) in image.pixels().zip(output.pixels()) {
            let [r, g, b, _] = source.0;
            let [v, v2, v3, a] = gray.0;
            assert!(v == v2 && v == v3 && a == u8::MAX);
            assert!(v >= r.min(g).min(b) && v <= r.max(g).max(b));
            if algorithm == GrayscaleAlgorithm::Component {
                assert_eq!(v, source.0[index]);
            }
        }
    }
});
