//! Salt-and-pepper noise for image files.
//!
//! A [`NoisePlan`] reads one image, draws one uniform value per pixel, forces
//! the pixels whose draw falls in either tail of the [`Threshold`] to black
//! (pepper) or white (salt), and writes the result.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod decode;
pub mod encode;
mod encoders;
pub mod error;
pub mod image;
pub mod mask;
pub mod operations;
pub mod plan;
pub mod threshold;

pub use error::{ErrorKind, NoiseError};
pub use mask::NoiseMask;
pub use operations::NoiseStats;
pub use plan::NoisePlan;
pub use threshold::Threshold;
