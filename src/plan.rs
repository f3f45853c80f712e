use std::path::PathBuf;

use image::ImageFormat;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use crate::decode::decode;
use crate::encode::{encode, EncodeOptions};
use crate::error::NoiseError;
use crate::mask::NoiseMask;
use crate::operations::{salt_and_pepper, NoiseStats};
use crate::threshold::Threshold;

/// One noise pass: read `input`, speckle it, write `output`.
///
/// The defaults reproduce the original one-off script.
#[derive(Debug, Clone)]
pub struct NoisePlan {
    pub input: PathBuf,
    pub output: PathBuf,
    pub threshold: Threshold,
    /// Fixed seed for bit-exact repeatable output; `None` draws a fresh mask every run
    pub seed: Option<u64>,
    /// Overrides format detection on the input
    pub input_format: Option<ImageFormat>,
    /// Overrides the output extension and the input format
    pub output_format: Option<ImageFormat>,
    pub encode_options: EncodeOptions,
}

impl Default for NoisePlan {
    fn default() -> Self {
        NoisePlan {
            input: PathBuf::from("WinterTree.jpg"),
            output: PathBuf::from("WinterTreeSalt.jpg"),
            threshold: Threshold::default(),
            seed: None,
            input_format: None,
            output_format: None,
            encode_options: EncodeOptions::default(),
        }
    }
}

impl NoisePlan {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        NoisePlan {
            input: input.into(),
            output: output.into(),
            ..Default::default()
        }
    }

    pub fn with_threshold(mut self, threshold: impl Into<Threshold>) -> Self {
        self.threshold = threshold.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Decodes, applies the mask and encodes in a single pass.
    /// Nothing is written if decoding fails.
    pub fn execute(&self) -> Result<NoiseStats, NoiseError> {
        let mut image = decode(&self.input, self.input_format)?;

        let (width, height) = image.dimensions();
        let mask = match self.seed {
            Some(seed) => NoiseMask::random(width, height, &mut StdRng::seed_from_u64(seed)),
            None => NoiseMask::random(width, height, &mut rand::rng()),
        };
        let stats = salt_and_pepper(&mut image, &mask, self.threshold)?;

        let format = encode(
            &image,
            &self.output,
            self.output_format,
            &self.encode_options,
        )?;
        info!(
            "{} -> {} ({:?}): {} pepper, {} salt of {} pixels",
            self.input.display(),
            self.output.display(),
            format,
            stats.pepper,
            stats.salt,
            stats.total
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_defaults_match_script() {
        let plan = NoisePlan::default();
        assert_eq!(plan.input, PathBuf::from("WinterTree.jpg"));
        assert_eq!(plan.output, PathBuf::from("WinterTreeSalt.jpg"));
        assert_eq!(plan.threshold, Threshold(0.05));
        assert_eq!(plan.seed, None);
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.png");
        let plan = NoisePlan::new(dir.path().join("in.png"), &output);
        let err = plan.execute().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Read);
        assert!(!output.exists());
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_unsupported_output_format_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.ico");
        RgbImage::from_pixel(8, 8, Rgb([128, 128, 128]))
            .save(&input)
            .unwrap();

        let err = NoisePlan::new(&input, &output)
            .with_seed(1)
            .execute()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Write);
        assert!(!output.exists());
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_seeded_runs_are_bit_exact() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        RgbImage::from_fn(40, 30, |x, y| Rgb([x as u8, y as u8, 100]))
            .save(&input)
            .unwrap();

        let first = dir.path().join("first.png");
        let second = dir.path().join("second.png");
        let third = dir.path().join("third.png");
        let stats_first = NoisePlan::new(&input, &first)
            .with_threshold(0.1)
            .with_seed(1234)
            .execute()
            .unwrap();
        let stats_second = NoisePlan::new(&input, &second)
            .with_threshold(0.1)
            .with_seed(1234)
            .execute()
            .unwrap();
        NoisePlan::new(&input, &third)
            .with_threshold(0.1)
            .with_seed(4321)
            .execute()
            .unwrap();

        assert_eq!(stats_first, stats_second);
        assert_eq!(stats_first.total, 1200);
        let first = image::open(&first).unwrap().to_rgb8();
        let second = image::open(&second).unwrap().to_rgb8();
        let third = image::open(&third).unwrap().to_rgb8();
        assert_eq!(first, second);
        assert_ne!(first, third);
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_lossless_output_matches_mask() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");
        let original = RgbImage::from_pixel(20, 10, Rgb([128, 128, 128]));
        original.save(&input).unwrap();

        let threshold = Threshold(0.2);
        let stats = NoisePlan::new(&input, &output)
            .with_threshold(threshold)
            .with_seed(99)
            .execute()
            .unwrap();

        let mask = NoiseMask::random(20, 10, &mut StdRng::seed_from_u64(99));
        let mut expected = original.clone();
        crate::operations::salt_and_pepper_mut(&mut expected, &mask, threshold).unwrap();
        assert_eq!(image::open(&output).unwrap().to_rgb8(), expected);

        let black = expected.pixels().filter(|p| **p == Rgb([0, 0, 0])).count() as u64;
        let white = expected.pixels().filter(|p| **p == Rgb([255, 255, 255])).count() as u64;
        assert_eq!((stats.pepper, stats.salt), (black, white));
    }
}
