//! Parameter specs for parametric distribution generators.

use crate::error::{Error, Result};

/// Describes one scalar knob of a parametric generator.
///
/// A spec carries the valid range, the slider granularity, and the default
/// value for one parameter. Specs are used to drive UI controls and to clamp
/// caller-supplied parameter vectors; generators themselves keep their own
/// domain fallbacks, so passing an unclamped vector never breaks generation.
///
/// # Examples
///
/// ```
/// use convolver::ParamSpec;
///
/// let spec = ParamSpec::new("lambda", 0.5, 10.0, 0.5, 2.0);
/// assert_eq!(spec.clamp(25.0), 10.0);
/// assert_eq!(spec.clamp(-1.0), 0.5);
/// assert_eq!(spec.clamp(3.5), 3.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamSpec {
    /// The parameter name shown to callers.
    pub name: String,
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
    /// Granularity for UI controls.
    pub step: f64,
    /// The value used when the caller supplies none.
    pub default_value: f64,
}

impl ParamSpec {
    /// Creates a new parameter spec.
    ///
    /// Validity is checked by [`ParamSpec::validate`], which the catalog runs
    /// before registering a descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, min: f64, max: f64, step: f64, default_value: f64) -> Self {
        Self {
            name: name.into(),
            min,
            max,
            step,
            default_value,
        }
    }

    /// Clamps `value` into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Validates the spec configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] when `min > max`,
    /// [`Error::InvalidStep`] when `step <= 0`, and
    /// [`Error::InvalidDefault`] when the default lies outside the bounds.
    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(Error::InvalidBounds {
                name: self.name.clone(),
                min: self.min,
                max: self.max,
            });
        }
        if self.step <= 0.0 {
            return Err(Error::InvalidStep {
                name: self.name.clone(),
                step: self.step,
            });
        }
        if self.default_value < self.min || self.default_value > self.max {
            return Err(Error::InvalidDefault {
                name: self.name.clone(),
                default_value: self.default_value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_respects_bounds() {
        let spec = ParamSpec::new("p", 0.05, 0.95, 0.05, 0.5);
        assert_eq!(spec.clamp(0.0), 0.05);
        assert_eq!(spec.clamp(1.0), 0.95);
        assert_eq!(spec.clamp(0.3), 0.3);
    }

    #[test]
    fn validate_rejects_inverted_bounds() {
        let spec = ParamSpec::new("p", 1.0, 0.0, 0.1, 0.5);
        assert!(matches!(spec.validate(), Err(Error::InvalidBounds { .. })));
    }

    #[test]
    fn validate_rejects_non_positive_step() {
        let spec = ParamSpec::new("p", 0.0, 1.0, 0.0, 0.5);
        assert!(matches!(spec.validate(), Err(Error::InvalidStep { .. })));
    }

    #[test]
    fn validate_rejects_out_of_range_default() {
        let spec = ParamSpec::new("p", 0.0, 1.0, 0.1, 2.0);
        assert!(matches!(spec.validate(), Err(Error::InvalidDefault { .. })));
    }
}
