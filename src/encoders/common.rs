//! Helpers shared between all encoders

use std::borrow::Cow;

use image::{DynamicImage, ImageEncoder};

use crate::image::Image;

pub fn write_icc(encoder: &mut impl ImageEncoder, image: &Image) {
    if let Some(icc) = image.icc.clone() {
        let _ = encoder.set_icc_profile(icc); // ignore UnsupportedError
    };
}

/// Converts the image to `L8` or `Rgb8`, for formats that store neither alpha nor more than 8 bits.
///
/// Already-compatible images are borrowed as-is.
#[allow(dead_code)] // unused when the jpeg feature is off
pub(crate) fn to_8bit_opaque(pixels: &DynamicImage) -> Cow<'_, DynamicImage> {
    use image::DynamicImage::*;
    match pixels {
        ImageLuma8(_) | ImageRgb8(_) => Cow::Borrowed(pixels),
        ImageLumaA8(_) | ImageLuma16(_) | ImageLumaA16(_) => {
            Cow::Owned(ImageLuma8(pixels.to_luma8()))
        }
        _ => Cow::Owned(ImageRgb8(pixels.to_rgb8())),
    }
}
