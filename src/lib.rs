//! Color to grayscale conversion with selectable algorithms.
//!
//! ```no_run
//! use graymagick::{convert_from_path, GrayscaleAlgorithm};
//!
//! let planes = convert_from_path("photo.png", GrayscaleAlgorithm::Component)?;
//! planes.save("photo-gray.png".as_ref(), None)?;
//! # Ok::<(), graymagick::error::GrayError>(())
//! ```

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod algorithm;
pub mod args;
pub mod decode;
pub mod encode;
mod engine;
pub mod error;
pub mod help;
mod image;
pub mod init;
mod operations;
pub mod plan;
mod utils;

pub use crate::algorithm::GrayscaleAlgorithm;
pub use crate::engine::{convert, convert_batch, convert_from_path, convert_image, GrayProcessor};
pub use crate::image::ResultSet;
pub use crate::operations::PARALLEL_THRESHOLD;
