use std::path::Path;

use image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader};
use log::debug;

use crate::error::{ErrorKind, NoiseError};
use crate::image::Image;
use crate::sp_err;

/// If the format has not been explicitly specified, guesses the format based on file contents.
pub fn decode(path: &Path, format: Option<ImageFormat>) -> Result<Image, NoiseError> {
    let mut reader = ImageReader::open(path).map_err(|error| {
        sp_err!(
            ErrorKind::Read,
            "unable to open image '{}': {error}",
            path.display()
        )
    })?;
    match format {
        Some(format) => reader.set_format(format),
        None => {
            reader = reader.with_guessed_format().map_err(|error| {
                sp_err!(
                    ErrorKind::Read,
                    "unable to read image '{}': {error}",
                    path.display()
                )
            })?
        }
    }
    let format = reader.format();

    let mut decoder = reader.into_decoder().map_err(|error| {
        sp_err!(
            ErrorKind::Read,
            "no decode delegate for image '{}': {error}",
            path.display()
        )
    })?;
    let icc = decoder.icc_profile().unwrap_or(None); // ignore UnsupportedError
    let pixels = DynamicImage::from_decoder(decoder).map_err(|error| {
        sp_err!(
            ErrorKind::Read,
            "unable to decode image '{}': {error}",
            path.display()
        )
    })?;

    debug!(
        "decoded '{}' as {:?}, {}x{} {:?}",
        path.display(),
        format,
        pixels.width(),
        pixels.height(),
        pixels.color()
    );

    Ok(Image {
        format,
        icc,
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = decode(&dir.path().join("absent.jpg"), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Read);
        assert!(err.to_string().contains("unable to open image"));
    }

    #[test]
    fn test_undecodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.jpg");
        std::fs::write(&path, b"definitely not an image").unwrap();
        let err = decode(&path, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Read);
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_guesses_format_from_contents() {
        let dir = tempfile::tempdir().unwrap();
        // the extension lies, the contents win
        let path = dir.path().join("picture.jpg");
        RgbImage::from_pixel(3, 2, Rgb([1, 2, 3]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let image = decode(&path, None).unwrap();
        assert_eq!(image.format, Some(ImageFormat::Png));
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.pixels.to_rgb8().get_pixel(2, 1), &Rgb([1, 2, 3]));
    }

    #[cfg(all(feature = "png", feature = "jpeg"))]
    #[test]
    fn test_explicit_format_overrides_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("picture.png");
        RgbImage::new(2, 2)
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let err = decode(&path, Some(ImageFormat::Jpeg)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Read);
    }
}
