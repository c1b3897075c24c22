//! The offset-indexed discrete distribution model.
//!
//! A [`DiscreteDistribution`] is a dense array of real values together with an
//! integer `offset`: `values[i]` is the mass (or cumulative probability) at
//! support position `offset + i`. The offset makes negative and shifted
//! supports cheap to represent — no reallocation from position 0 is needed.
//!
//! Value arrays are immutable snapshots: every operation that transforms a
//! distribution produces a new instance.

/// A discrete distribution (probability mass function or cumulative
/// distribution function) over integer support positions.
///
/// Any index outside the stored array is treated as mass `0`. The mass need
/// not sum exactly to 1; generators normalize when finalizing and small
/// floating-point residue is tolerated.
///
/// # Examples
///
/// ```
/// use convolver::DiscreteDistribution;
///
/// // A fair coin: mass 0.5 at positions 0 and 1.
/// let coin = DiscreteDistribution::from_values(vec![0.5, 0.5]);
/// assert_eq!(coin.mass_at(0), 0.5);
/// assert_eq!(coin.mass_at(2), 0.0);
///
/// // A shifted support starting at -1.
/// let centered = DiscreteDistribution::new(-1, vec![0.25, 0.5, 0.25]);
/// assert_eq!(centered.support_min(), Some(-1));
/// assert_eq!(centered.support_max(), Some(1));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscreteDistribution {
    /// The support position represented by index 0 of `values`.
    offset: i64,
    /// The dense mass array.
    values: Vec<f64>,
}

impl DiscreteDistribution {
    /// Creates a distribution from a dense value array and an explicit offset.
    #[must_use]
    pub fn new(offset: i64, values: Vec<f64>) -> Self {
        Self { offset, values }
    }

    /// Creates a distribution with offset 0.
    #[must_use]
    pub fn from_values(values: Vec<f64>) -> Self {
        Self::new(0, values)
    }

    /// The unit impulse: all mass at position 0.
    ///
    /// This is the universal safe fallback returned by generators when a
    /// parameter vector is malformed or numerically degenerate.
    #[must_use]
    pub fn unit_impulse() -> Self {
        Self::new(0, vec![1.0])
    }

    /// Creates an empty distribution with the given offset.
    #[must_use]
    pub fn empty(offset: i64) -> Self {
        Self::new(offset, Vec::new())
    }

    /// Returns the support position represented by index 0 of the value array.
    #[must_use]
    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Returns the dense value array.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consumes the distribution, returning its value array.
    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Returns the number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the distribution stores no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the smallest stored support position, or `None` when empty.
    #[must_use]
    pub fn support_min(&self) -> Option<i64> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.offset)
        }
    }

    /// Returns the largest stored support position, or `None` when empty.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn support_max(&self) -> Option<i64> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.offset + self.values.len() as i64 - 1)
        }
    }

    /// Returns the mass at support position `position`.
    ///
    /// Positions outside the stored array carry mass `0`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn mass_at(&self, position: i64) -> f64 {
        let index = position - self.offset;
        if index < 0 {
            return 0.0;
        }
        self.values.get(index as usize).copied().unwrap_or(0.0)
    }

    /// Returns the sum of all stored values.
    #[must_use]
    pub fn total_mass(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Returns a copy scaled so the total mass is 1.
    ///
    /// Degenerates to the unit impulse when the total mass is too close to
    /// zero to divide by.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let sum = self.total_mass();
        if sum.abs() < f64::EPSILON {
            return Self::unit_impulse();
        }
        Self::new(self.offset, self.values.iter().map(|v| v / sum).collect())
    }

    /// Trims the distribution to support positions within `[min, max]`.
    ///
    /// Values whose support position falls outside the range are dropped and
    /// the offset is adjusted accordingly; the array is never expanded. When
    /// the range excludes the entire support the result is an empty
    /// distribution with offset `min` — not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use convolver::DiscreteDistribution;
    ///
    /// let d = DiscreteDistribution::new(-5, (1..=10).map(f64::from).collect());
    /// let trimmed = d.limit_range(-2, 2);
    /// assert_eq!(trimmed.offset(), -2);
    /// assert_eq!(trimmed.values(), &[3.0, 4.0, 5.0, 6.0, 7.0]);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn limit_range(&self, min: i64, max: i64) -> Self {
        let (Some(lo), Some(hi)) = (self.support_min(), self.support_max()) else {
            return Self::empty(min);
        };
        let keep_lo = lo.max(min);
        let keep_hi = hi.min(max);
        if keep_lo > keep_hi {
            return Self::empty(min);
        }
        if keep_lo == lo && keep_hi == hi {
            return self.clone();
        }
        let start = (keep_lo - self.offset) as usize;
        let end = (keep_hi - self.offset) as usize + 1;
        Self::new(keep_lo, self.values[start..end].to_vec())
    }
}
