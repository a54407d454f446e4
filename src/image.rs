use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::GrayError;

/// Opaque gray pixel with all three color channels set to `value`
#[inline]
pub fn gray(value: u8) -> Rgba<u8> {
    Rgba([value, value, value, u8::MAX])
}

/// The ordered images produced by a single conversion.
///
/// `Component` yields the red, green and blue planes in that order;
/// every other algorithm yields exactly one image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    images: Vec<RgbaImage>,
}

impl ResultSet {
    pub fn new(images: Vec<RgbaImage>) -> Self {
        Self { images }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RgbaImage> {
        self.images.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RgbaImage> {
        self.images.iter()
    }

    pub fn into_images(self) -> Vec<RgbaImage> {
        self.images
    }

    /// Writes every image, see [`crate::encode::save_all`]
    pub fn save(
        &self,
        output: &Path,
        format: Option<ImageFormat>,
    ) -> Result<Vec<PathBuf>, GrayError> {
        crate::encode::save_all(self, output, format)
    }
}

impl From<Vec<RgbaImage>> for ResultSet {
    fn from(images: Vec<RgbaImage>) -> Self {
        Self::new(images)
    }
}

impl IntoIterator for ResultSet {
    type Item = RgbaImage;
    type IntoIter = std::vec::IntoIter<RgbaImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a RgbaImage;
    type IntoIter = std::slice::Iter<'a, RgbaImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}
