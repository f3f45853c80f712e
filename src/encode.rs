use std::{ffi::OsStr, fs, io::Cursor, path::Path};

use image::ImageFormat;
use log::debug;

use crate::error::{ErrorKind, NoiseError};
use crate::{image::Image, sp_err};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// 1..=100 for JPEG, zlib level times ten for PNG, ignored elsewhere
    pub quality: Option<u8>,
}

/// Writes `image` to `path`, returning the format it was encoded as.
pub fn encode(
    image: &Image,
    path: &Path,
    format: Option<ImageFormat>,
    options: &EncodeOptions,
) -> Result<ImageFormat, NoiseError> {
    let format = choose_encoding_format(image, path, format)?;
    debug!("encoding '{}' as {:?}", path.display(), format);

    // Encode fully in memory so that a failing encoder never touches the output path.
    let mut writer = Cursor::new(Vec::new());

    match format {
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => crate::encoders::jpeg::encode(image, &mut writer, options)?,
        #[cfg(feature = "png")]
        ImageFormat::Png => crate::encoders::png::encode(image, &mut writer, options)?,
        _ => image
            .pixels
            .write_to(&mut writer, format)
            .map_err(|error| {
                sp_err!(
                    ErrorKind::Write,
                    "unable to encode image '{}': {error}",
                    path.display()
                )
            })?,
    }

    // `fs::write` creates the file, or truncates (overwrites) it if it exists.
    fs::write(path, writer.into_inner()).map_err(|error| {
        sp_err!(
            ErrorKind::Write,
            "unable to write image '{}': {error}",
            path.display()
        )
    })?;

    Ok(format)
}

/// Explicit format first, then the output extension, then whatever the input was.
fn choose_encoding_format(
    image: &Image,
    path: &Path,
    explicitly_specified: Option<ImageFormat>,
) -> Result<ImageFormat, NoiseError> {
    if let Some(format) = explicitly_specified {
        return Ok(format);
    }
    if let Ok(format) = ImageFormat::from_path(path) {
        return Ok(format);
    }
    if let Some(format) = image.format {
        return Ok(format);
    }
    let extension = path.extension().unwrap_or(OsStr::new(""));
    Err(sp_err!(
        ErrorKind::Write,
        "no encode delegate for this image format `{}'",
        extension.to_string_lossy().to_ascii_uppercase()
    ))
}
