use std::fmt;

use covsum_shared_kernel::{Percentage, Threshold};
use serde::Serialize;

/// Three-way verdict of a percentage against a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Fail,
    Warn,
    Pass,
}

impl Status {
    /// Below the threshold fails; within a tenth of the headroom above it
    /// warns; anything higher passes. A not-applicable percentage passes.
    pub fn classify(percent: Percentage, threshold: Threshold) -> Self {
        let Some(value) = percent.value() else {
            return Self::Pass;
        };
        if value < f64::from(threshold.value()) {
            Self::Fail
        } else if value < threshold.warn_ceiling() {
            Self::Warn
        } else {
            Self::Pass
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Fail => "🔴",
            Self::Warn => "🟡",
            Self::Pass => "🟢",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Fail => "FAIL",
            Self::Warn => "WARN",
            Self::Pass => "PASS",
        }
    }

    #[inline]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Fail)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(value: f64, threshold: i64) -> Status {
        Status::classify(Percentage::new(value), Threshold::new(threshold).unwrap())
    }

    #[test]
    fn bands_at_default_threshold() {
        assert_eq!(at(75.0, 80), Status::Fail);
        assert_eq!(at(79.99, 80), Status::Fail);
        assert_eq!(at(80.0, 80), Status::Warn);
        assert_eq!(at(81.0, 80), Status::Warn);
        assert_eq!(at(82.0, 80), Status::Pass);
        assert_eq!(at(100.0, 80), Status::Pass);
    }

    #[test]
    fn extreme_thresholds() {
        assert_eq!(at(0.0, 0), Status::Warn);
        assert_eq!(at(10.0, 0), Status::Pass);
        assert_eq!(at(99.99, 100), Status::Fail);
        assert_eq!(at(100.0, 100), Status::Pass);
    }

    #[test]
    fn not_applicable_passes() {
        assert_eq!(Status::classify(Percentage::not_applicable(), Threshold::DEFAULT), Status::Pass);
    }

    #[test]
    fn indicators() {
        assert_eq!(Status::Fail.emoji(), "🔴");
        assert_eq!(Status::Warn.emoji(), "🟡");
        assert_eq!(Status::Pass.emoji(), "🟢");
        assert_eq!(Status::Warn.to_string(), "WARN");
    }
}
