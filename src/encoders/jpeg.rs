use std::io::Write;

use image::codecs::jpeg::JpegEncoder;

use crate::encode::EncodeOptions;
use crate::encoders::common::{to_8bit_opaque, write_icc};
use crate::error::{ErrorKind, NoiseError};
use crate::{image::Image, sp_try};

/// Quality the original pipeline's codec used when none was requested.
pub const DEFAULT_QUALITY: u8 = 75;

pub fn encode<W: Write>(
    image: &Image,
    writer: &mut W,
    options: &EncodeOptions,
) -> Result<(), NoiseError> {
    let quality = options.quality.unwrap_or(DEFAULT_QUALITY).clamp(1, 100);
    let mut encoder = JpegEncoder::new_with_quality(writer, quality);
    write_icc(&mut encoder, image);
    // JPEG has no alpha and no 16-bit mode
    let pixels = to_8bit_opaque(&image.pixels);
    Ok(sp_try!(ErrorKind::Write, pixels.write_with_encoder(encoder)))
}
