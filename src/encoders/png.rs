use std::io::Write;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};

use crate::encode::EncodeOptions;
use crate::encoders::common::write_icc;
use crate::error::{ErrorKind, NoiseError};
use crate::{image::Image, sp_try};

/// PNG is lossless, so `quality` only picks the zlib level: `quality / 10`, capped at 9.
pub fn encode<W: Write>(
    image: &Image,
    writer: &mut W,
    options: &EncodeOptions,
) -> Result<(), NoiseError> {
    let compression = match options.quality {
        Some(quality) => CompressionType::Level((quality / 10).min(9)),
        None => CompressionType::Default,
    };
    let mut encoder = PngEncoder::new_with_quality(writer, compression, FilterType::Adaptive);
    write_icc(&mut encoder, image);
    Ok(sp_try!(
        ErrorKind::Write,
        image.pixels.write_with_encoder(encoder)
    ))
}
