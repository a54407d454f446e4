use std::fmt::Display;

use strum::{EnumString, IntoStaticStr, VariantArray};

use crate::error::GrayError;

/// Selects how color pixels are reduced to a single intensity.
///
/// The numeric tags match the values used by older callers that stored the
/// algorithm as an integer. They are never combined.
#[derive(EnumString, IntoStaticStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrayscaleAlgorithm {
    /// One image per color channel, in R, G, B order
    Component,
    Maximum,
    Minimum,
    Average,
    /// 0.30 R + 0.59 G + 0.11 B
    WeightedAverage,
}

impl GrayscaleAlgorithm {
    /// Number of images a conversion with this algorithm produces
    pub fn output_count(&self) -> usize {
        match self {
            GrayscaleAlgorithm::Component => 3,
            GrayscaleAlgorithm::Maximum
            | GrayscaleAlgorithm::Minimum
            | GrayscaleAlgorithm::Average
            | GrayscaleAlgorithm::WeightedAverage => 1,
        }
    }

    /// Legacy numeric value, accepted back by `TryFrom<u32>`
    pub fn tag(&self) -> u32 {
        match self {
            GrayscaleAlgorithm::Component => 0,
            GrayscaleAlgorithm::Maximum => 1,
            GrayscaleAlgorithm::Minimum => 2,
            GrayscaleAlgorithm::Average => 4,
            GrayscaleAlgorithm::WeightedAverage => 8,
        }
    }

    pub fn help_text(&self) -> &'static str {
        match self {
            GrayscaleAlgorithm::Component => "one image per red, green and blue channel",
            GrayscaleAlgorithm::Maximum => "brightest channel of each pixel",
            GrayscaleAlgorithm::Minimum => "darkest channel of each pixel",
            GrayscaleAlgorithm::Average => "mean of the three channels",
            GrayscaleAlgorithm::WeightedAverage => "luma weighting 0.30/0.59/0.11",
        }
    }
}

impl Display for GrayscaleAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &'static str = self.into();
        f.write_str(name)
    }
}

impl GrayscaleAlgorithm {
    /// Parses a case-sensitive variant name such as `WeightedAverage`
    pub fn from_name(name: &str) -> Result<Self, GrayError> {
        name.parse()
            .map_err(|_| GrayError::UnsupportedAlgorithm(name.to_owned()))
    }
}

impl TryFrom<&std::ffi::OsStr> for GrayscaleAlgorithm {
    type Error = GrayError;

    fn try_from(s: &std::ffi::OsStr) -> Result<Self, Self::Error> {
        let string: &str = s
            .to_str()
            .ok_or_else(|| GrayError::UnsupportedAlgorithm(s.to_string_lossy().into_owned()))?;
        Self::from_name(string)
    }
}

impl TryFrom<u32> for GrayscaleAlgorithm {
    type Error = GrayError;

    fn try_from(tag: u32) -> Result<Self, Self::Error> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|algorithm| algorithm.tag() == tag)
            .ok_or_else(|| GrayError::UnsupportedAlgorithm(tag.to_string()))
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for GrayscaleAlgorithm {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(Self::VARIANTS).unwrap()
    }
}
