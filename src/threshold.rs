use std::num::ParseFloatError;
use std::str::FromStr;

/// Probability of a pixel turning into pepper, and separately into salt.
///
/// Meaningful values lie in (0, 0.5). Nothing is validated: 0 leaves the image
/// untouched and 0.5 or more turns every pixel into salt or pepper.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Threshold(pub f64);

impl Threshold {
    /// Draws strictly below this become pepper.
    pub fn pepper_below(self) -> f64 {
        self.0
    }

    /// Draws strictly above this become salt.
    pub fn salt_above(self) -> f64 {
        1.0 - self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold(0.05)
    }
}

impl From<f64> for Threshold {
    fn from(value: f64) -> Self {
        Threshold(value)
    }
}

impl FromStr for Threshold {
    type Err = ParseFloatError;

    /// Leading and trailing whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<f64>().map(Threshold)
    }
}
