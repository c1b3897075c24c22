//! Discrete convolution and CDF derivation.
//!
//! [`convolve`] implements the standard discrete convolution of two value
//! arrays while adding their offsets — the support of a sum of two independent
//! integer-valued variables is the sum of supports, and that identity holds
//! exactly here. [`ConvolutionSeries`] produces the repeated-self-convolution
//! sequence incrementally so a display series across `n = 1..N` shares work
//! instead of recomputing each level from scratch.

use crate::distribution::DiscreteDistribution;

/// Convolves two distributions.
///
/// The result has `len(a) + len(b) - 1` values
/// (`result[i] = Σ_j a[j] · b[i-j]`) and its offset is the sum of the input
/// offsets. If either input is empty the result is empty, with the offsets
/// still summed.
///
/// # Examples
///
/// ```
/// use convolver::{convolve, DiscreteDistribution};
///
/// let coin = DiscreteDistribution::from_values(vec![0.5, 0.5]);
/// let two_coins = convolve(&coin, &coin);
/// assert_eq!(two_coins.values(), &[0.25, 0.5, 0.25]);
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn convolve(a: &DiscreteDistribution, b: &DiscreteDistribution) -> DiscreteDistribution {
    let offset = a.offset() + b.offset();
    let (xs, ys) = (a.values(), b.values());
    if xs.is_empty() || ys.is_empty() {
        return DiscreteDistribution::empty(offset);
    }

    let out_len = xs.len() + ys.len() - 1;
    let mut out = vec![0.0; out_len];
    for (j, &x) in xs.iter().enumerate() {
        if x == 0.0 {
            continue;
        }
        for (k, &y) in ys.iter().enumerate() {
            out[j + k] += x * y;
        }
    }
    DiscreteDistribution::new(offset, out)
}

/// Convolves a distribution with itself `count` times.
///
/// `count == 1` returns a copy of the input; `count == 0` returns the empty
/// distribution at offset 0 (not the convolution identity). For a whole
/// series of levels prefer [`ConvolutionSeries`], which shares work across
/// levels instead of refolding from scratch per level.
#[must_use]
pub fn convolve_multiple(d: &DiscreteDistribution, count: usize) -> DiscreteDistribution {
    if count == 0 {
        return DiscreteDistribution::empty(0);
    }
    let mut result = d.clone();
    for _ in 1..count {
        result = convolve(&result, d);
    }
    result
}

/// Computes the cumulative distribution function of `d`.
///
/// The result is the running prefix sum over the value array with the offset
/// preserved; for a pmf it is non-decreasing (within floating-point
/// tolerance) and converges toward 1.
#[must_use]
pub fn cdf(d: &DiscreteDistribution) -> DiscreteDistribution {
    let mut running = 0.0;
    let values = d
        .values()
        .iter()
        .map(|v| {
            running += v;
            running
        })
        .collect();
    DiscreteDistribution::new(d.offset(), values)
}

/// An iterator over the repeated-self-convolution sequence of a base
/// distribution: `d`, `d * d`, `d * d * d`, ...
///
/// Each step convolves the previous result with the base once, so producing
/// the first `N` levels costs `N - 1` convolutions total rather than the
/// quadratic cost of calling [`convolve_multiple`] per level. The iterator is
/// unbounded; use [`Iterator::take`] for a display series.
///
/// # Examples
///
/// ```
/// use convolver::{convolve_multiple, ConvolutionSeries, DiscreteDistribution};
///
/// let die = DiscreteDistribution::from_values(vec![1.0 / 6.0; 6]);
/// let levels: Vec<_> = ConvolutionSeries::new(&die).take(3).collect();
/// assert_eq!(levels[0], die);
/// assert_eq!(levels[2], convolve_multiple(&die, 3));
/// ```
#[derive(Clone, Debug)]
pub struct ConvolutionSeries<'a> {
    base: &'a DiscreteDistribution,
    current: Option<DiscreteDistribution>,
}

impl<'a> ConvolutionSeries<'a> {
    /// Creates a series over repeated self-convolutions of `base`.
    #[must_use]
    pub fn new(base: &'a DiscreteDistribution) -> Self {
        Self {
            base,
            current: None,
        }
    }
}

impl Iterator for ConvolutionSeries<'_> {
    type Item = DiscreteDistribution;

    fn next(&mut self) -> Option<Self::Item> {
        let next = match self.current.take() {
            None => self.base.clone(),
            Some(prev) => convolve(&prev, self.base),
        };
        self.current = Some(next.clone());
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convolve_adds_offsets() {
        let a = DiscreteDistribution::new(-2, vec![0.5, 0.5]);
        let b = DiscreteDistribution::new(3, vec![0.25, 0.75]);
        let c = convolve(&a, &b);
        assert_eq!(c.offset(), 1);
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn convolve_preserves_total_mass_product() {
        let a = DiscreteDistribution::from_values(vec![0.1, 0.2, 0.7]);
        let b = DiscreteDistribution::from_values(vec![0.5, 0.5]);
        let c = convolve(&a, &b);
        assert!((c.total_mass() - a.total_mass() * b.total_mass()).abs() < 1e-9);
    }

    #[test]
    fn convolve_with_empty_operand_is_empty() {
        let a = DiscreteDistribution::new(2, vec![1.0]);
        let b = DiscreteDistribution::empty(-1);
        let c = convolve(&a, &b);
        assert!(c.is_empty());
        assert_eq!(c.offset(), 1);
    }

    #[test]
    fn convolve_multiple_once_is_identity() {
        let d = DiscreteDistribution::new(1, vec![0.3, 0.7]);
        assert_eq!(convolve_multiple(&d, 1), d);
    }

    #[test]
    fn convolve_multiple_zero_is_empty() {
        let d = DiscreteDistribution::from_values(vec![1.0]);
        assert!(convolve_multiple(&d, 0).is_empty());
    }

    #[test]
    fn series_matches_convolve_multiple() {
        let d = DiscreteDistribution::new(-1, vec![0.2, 0.5, 0.3]);
        for (i, level) in ConvolutionSeries::new(&d).take(5).enumerate() {
            assert_eq!(level, convolve_multiple(&d, i + 1));
        }
    }

    #[test]
    fn cdf_is_prefix_sum_with_offset_kept() {
        let d = DiscreteDistribution::new(2, vec![0.25, 0.25, 0.5]);
        let c = cdf(&d);
        assert_eq!(c.offset(), 2);
        assert_eq!(c.values(), &[0.25, 0.5, 1.0]);
    }
}
