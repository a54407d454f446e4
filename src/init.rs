//! Initialization that needs to be done on startup

/// Registers decoders that are not built into `image`.
/// Must be called before decoding any file, e.g. through [`crate::convert_from_path`].
pub fn init() {
    #[cfg(feature = "jxl")]
    jxl_oxide::integration::register_image_decoding_hook();
}
