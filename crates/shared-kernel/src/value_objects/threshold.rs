// crates/shared-kernel/src/value_objects/threshold.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Pass/fail coverage threshold, an integer percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Threshold(u8);

impl Threshold {
    pub const DEFAULT: Self = Self(80);

    /// Validate an integer threshold.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::OutOfRange`] outside `0..=100`.
    pub fn new(value: i64) -> Result<Self, ConfigurationError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= 100)
            .map(Self)
            .ok_or(ConfigurationError::OutOfRange { value })
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Upper bound (exclusive) of the warn band: one tenth of the headroom above the threshold.
    pub fn warn_ceiling(self) -> f64 {
        let threshold = f64::from(self.0);
        threshold + (100.0 - threshold) * 0.1
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for Threshold {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| ConfigurationError::NotAnInteger { value: s.to_string() })?;
        Self::new(value)
    }
}

impl TryFrom<i64> for Threshold {
    type Error = ConfigurationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Threshold> for u8 {
    fn from(value: Threshold) -> Self {
        value.0
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
