//! Format-specific encoders. Formats without one here go through `DynamicImage::write_to`.

pub(crate) mod common;
#[cfg(feature = "jpeg")]
pub(crate) mod jpeg;
#[cfg(feature = "png")]
pub(crate) mod png;
