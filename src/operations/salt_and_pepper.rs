use std::ops::DerefMut;

use image::{DynamicImage, ImageBuffer, Pixel, Primitive};

use crate::error::{ErrorKind, NoiseError};
use crate::image::Image;
use crate::mask::{classify, NoiseMask, Speck};
use crate::sp_err;
use crate::threshold::Threshold;

/// Pixel counts after applying a mask.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct NoiseStats {
    pub pepper: u64,
    pub salt: u64,
    pub total: u64,
}

impl NoiseStats {
    pub fn untouched(&self) -> u64 {
        self.total - self.pepper - self.salt
    }
}

pub fn salt_and_pepper(
    image: &mut Image,
    mask: &NoiseMask,
    threshold: Threshold,
) -> Result<NoiseStats, NoiseError> {
    salt_and_pepper_dynamic(&mut image.pixels, mask, threshold)
}

pub fn salt_and_pepper_dynamic(
    pixels: &mut DynamicImage,
    mask: &NoiseMask,
    threshold: Threshold,
) -> Result<NoiseStats, NoiseError> {
    use DynamicImage::*;
    match pixels {
        ImageLuma8(buf) => salt_and_pepper_mut(buf, mask, threshold),
        ImageLumaA8(buf) => salt_and_pepper_mut(buf, mask, threshold),
        ImageRgb8(buf) => salt_and_pepper_mut(buf, mask, threshold),
        ImageRgba8(buf) => salt_and_pepper_mut(buf, mask, threshold),
        ImageLuma16(buf) => salt_and_pepper_mut(buf, mask, threshold),
        ImageLumaA16(buf) => salt_and_pepper_mut(buf, mask, threshold),
        ImageRgb16(buf) => salt_and_pepper_mut(buf, mask, threshold),
        ImageRgba16(buf) => salt_and_pepper_mut(buf, mask, threshold),
        ImageRgb32F(buf) => salt_and_pepper_mut(buf, mask, threshold),
        ImageRgba32F(buf) => salt_and_pepper_mut(buf, mask, threshold),
        other => Err(sp_err!(
            ErrorKind::Read,
            "unsupported pixel format {:?}",
            other.color()
        )),
    }
}

/// Forces pixels to black or white in place according to `mask`.
///
/// Every channel of an affected pixel is overwritten, alpha included:
/// pepper writes the subpixel's zero and salt its maximum (255 for `u8`,
/// 65535 for `u16`, 1.0 for `f32`).
pub fn salt_and_pepper_mut<P, Container>(
    image: &mut ImageBuffer<P, Container>,
    mask: &NoiseMask,
    threshold: Threshold,
) -> Result<NoiseStats, NoiseError>
where
    P: Pixel,
    Container: DerefMut<Target = [P::Subpixel]>,
{
    if image.dimensions() != mask.dimensions() {
        let (width, height) = image.dimensions();
        return Err(sp_err!(
            ErrorKind::Read,
            "noise mask is {}x{} but the image is {width}x{height}",
            mask.width(),
            mask.height()
        ));
    }

    let black = <P::Subpixel as Primitive>::DEFAULT_MIN_VALUE;
    let white = <P::Subpixel as Primitive>::DEFAULT_MAX_VALUE;

    let mut stats = NoiseStats::default();
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        stats.total += 1;
        match classify(mask.draw(x, y), threshold) {
            Speck::Pepper => {
                pixel.channels_mut().fill(black);
                stats.pepper += 1;
            }
            Speck::Salt => {
                pixel.channels_mut().fill(white);
                stats.salt += 1;
            }
            Speck::Untouched => {}
        }
    }
    Ok(stats)
}
