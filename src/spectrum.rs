//! The z-transform amplitude engine.
//!
//! [`z_transform`] samples the discrete-time amplitude response
//! `|Σ_n p[n] · e^(-jnω)|` of a value array on an inclusive frequency grid
//! over `[0, π]`. Only the dense values participate: the magnitude of the
//! z-transform is invariant under a pure index shift (the linear phase factor
//! vanishes under `|·|`), so a distribution's offset is deliberately ignored
//! here even though convolution and range-limiting track it.
//!
//! Two algebraic shortcuts keep repeated analysis cheap:
//!
//! - **Convolution power law** — `|Z[f^{*n}]| = |Z[f]|^n`, so every
//!   convolution level's response derives from one base transform by
//!   point-wise power-raising ([`amplitude_power`]) instead of convolving and
//!   re-transforming per level.
//! - **CDF spectrum** — the CDF sequence itself diverges under the transform,
//!   but its amplitude response equals the pmf's response times the unit step
//!   function's closed-form amplitude `1/√(2 − 2cos ω)`
//!   ([`cdf_amplitude_from_pmf`]).
//!
//! [`SpectrumAnalyzer`] bundles one base transform and one step-amplitude
//! grid per base distribution and derives every level from those.

use core::f64::consts::PI;

use num_complex::Complex64;

use crate::distribution::DiscreteDistribution;
use crate::error::{Error, Result};

/// Default number of frequency samples.
pub const DEFAULT_NUM_POINTS: usize = 512;

/// Default upper end of the frequency grid (radians/sample).
pub const DEFAULT_MAX_ANGULAR_FREQUENCY: f64 = PI;

/// Below this threshold the step-response denominator is treated as a
/// removable singularity.
const STEP_SINGULARITY_EPS: f64 = 1e-10;

/// One sample of a frequency response.
///
/// Samples are produced in ascending frequency order over `[0, π]` (both ends
/// inclusive); the amplitude is a non-negative magnitude, phase is discarded
/// by design.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmplitudePoint {
    /// Angular frequency in radians/sample, in `[0, π]`.
    pub angular_frequency: f64,
    /// Magnitude of the response at this frequency.
    pub amplitude: f64,
}

/// Computes the z-transform amplitude response of a value array on the
/// default grid: 512 points over `[0, π]`, both ends inclusive.
///
/// Zero-mass terms are skipped. Pass `DiscreteDistribution::values()` here —
/// the offset does not participate (see the module docs).
///
/// # Examples
///
/// ```
/// use convolver::z_transform;
///
/// let points = z_transform(&[0.5, 0.5]);
/// assert_eq!(points.len(), 512);
/// // At ω = 0 the response is the total mass.
/// assert!((points[0].amplitude - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn z_transform(values: &[f64]) -> Vec<AmplitudePoint> {
    transform_grid(values, DEFAULT_NUM_POINTS, DEFAULT_MAX_ANGULAR_FREQUENCY)
}

/// Computes the z-transform amplitude response on a custom grid.
///
/// The grid has `num_points` equally spaced frequencies
/// `ω_i = i / (num_points - 1) · max_angular_frequency`, inclusive of both
/// ends.
///
/// # Errors
///
/// Returns [`Error::InvalidPointCount`] when `num_points < 2` and
/// [`Error::InvalidFrequencyRange`] when `max_angular_frequency` is not a
/// positive finite number.
pub fn z_transform_with(
    values: &[f64],
    num_points: usize,
    max_angular_frequency: f64,
) -> Result<Vec<AmplitudePoint>> {
    if num_points < 2 {
        return Err(Error::InvalidPointCount(num_points));
    }
    if !max_angular_frequency.is_finite() || max_angular_frequency <= 0.0 {
        return Err(Error::InvalidFrequencyRange(max_angular_frequency));
    }
    Ok(transform_grid(values, num_points, max_angular_frequency))
}

#[allow(clippy::cast_precision_loss, clippy::float_cmp)]
fn transform_grid(values: &[f64], num_points: usize, max_omega: f64) -> Vec<AmplitudePoint> {
    let denom = (num_points - 1) as f64;
    (0..num_points)
        .map(|i| {
            let omega = i as f64 / denom * max_omega;
            let mut acc = Complex64::new(0.0, 0.0);
            for (n, &pn) in values.iter().enumerate() {
                if pn == 0.0 {
                    continue;
                }
                acc += pn * Complex64::from_polar(1.0, -(n as f64) * omega);
            }
            AmplitudePoint {
                angular_frequency: omega,
                amplitude: acc.norm(),
            }
        })
        .collect()
}

/// Closed-form amplitude of the unit step function's frequency response,
/// `1/√(2 − 2cos ω)`.
///
/// At `ω = 0` (or wherever the denominator drops below `1e-10`) the naive
/// formula has a removable singularity; the defined limiting value `1.0` is
/// returned instead, since CDF spectra are finite at zero frequency.
#[must_use]
pub fn step_function_amplitude(omega: f64) -> f64 {
    if omega.abs() < STEP_SINGULARITY_EPS {
        return 1.0;
    }
    let denominator = 2.0 - 2.0 * omega.cos();
    if denominator < STEP_SINGULARITY_EPS {
        return 1.0;
    }
    1.0 / denominator.sqrt()
}

/// Raises each amplitude sample to the integer power `n`, point-wise.
///
/// This is the convolution power law: `|Z[f^{*n}]| = |Z[f]|^n`, so the
/// amplitude response of the `n`-fold self-convolution derives from the base
/// transform without convolving or re-transforming anything.
#[must_use]
pub fn amplitude_power(base: &[AmplitudePoint], n: u32) -> Vec<AmplitudePoint> {
    base.iter()
        .map(|point| AmplitudePoint {
            angular_frequency: point.angular_frequency,
            amplitude: point.amplitude.powf(f64::from(n)),
        })
        .collect()
}

/// Derives the CDF's amplitude response from its pmf's amplitude response.
///
/// Transforming a CDF sequence directly diverges; multiplying the pmf's
/// amplitude samples by the step function's amplitude at the same frequencies
/// gives the CDF response in closed form. When `precomputed_step` is supplied
/// it must cover the same frequency grid and is reused instead of
/// recomputing the step response per point (one grid per resolution serves
/// every convolution level).
#[must_use]
pub fn cdf_amplitude_from_pmf(
    pmf: &[AmplitudePoint],
    precomputed_step: Option<&[f64]>,
) -> Vec<AmplitudePoint> {
    match precomputed_step {
        Some(step) => pmf
            .iter()
            .zip(step)
            .map(|(point, &s)| AmplitudePoint {
                angular_frequency: point.angular_frequency,
                amplitude: point.amplitude * s,
            })
            .collect(),
        None => pmf
            .iter()
            .map(|point| AmplitudePoint {
                angular_frequency: point.angular_frequency,
                amplitude: point.amplitude * step_function_amplitude(point.angular_frequency),
            })
            .collect(),
    }
}

/// Precomputed spectral state for one base distribution.
///
/// The analyzer computes the base transform once and one step-amplitude grid
/// once; [`pmf_amplitude`](SpectrumAnalyzer::pmf_amplitude) and
/// [`cdf_amplitude`](SpectrumAnalyzer::cdf_amplitude) then derive any
/// convolution level by point-wise power-raising and products. For a series
/// of `n` levels at `p` grid points this costs `O(len · p)` for the transform
/// plus `O(n · p)` for the derivations, replacing the `O(N · n · p)` cost of
/// convolving and re-transforming per level.
///
/// # Examples
///
/// ```
/// use convolver::{DiscreteDistribution, SpectrumAnalyzer};
///
/// let coin = DiscreteDistribution::from_values(vec![0.5, 0.5]);
/// let analyzer = SpectrumAnalyzer::new(&coin);
/// let three_flips = analyzer.pmf_amplitude(3);
/// assert!((three_flips[0].amplitude - 1.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct SpectrumAnalyzer {
    base: Vec<AmplitudePoint>,
    step: Vec<f64>,
}

impl SpectrumAnalyzer {
    /// Creates an analyzer on the default grid (512 points over `[0, π]`).
    #[must_use]
    pub fn new(d: &DiscreteDistribution) -> Self {
        let base = z_transform(d.values());
        let step = base
            .iter()
            .map(|p| step_function_amplitude(p.angular_frequency))
            .collect();
        Self { base, step }
    }

    /// Creates an analyzer on a custom grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPointCount`] when `num_points < 2` and
    /// [`Error::InvalidFrequencyRange`] when `max_angular_frequency` is not a
    /// positive finite number.
    pub fn with_resolution(
        d: &DiscreteDistribution,
        num_points: usize,
        max_angular_frequency: f64,
    ) -> Result<Self> {
        let base = z_transform_with(d.values(), num_points, max_angular_frequency)?;
        let step = base
            .iter()
            .map(|p| step_function_amplitude(p.angular_frequency))
            .collect();
        Ok(Self { base, step })
    }

    /// The base distribution's amplitude response (convolution level 1).
    #[must_use]
    pub fn base(&self) -> &[AmplitudePoint] {
        &self.base
    }

    /// Amplitude response of the `n`-fold self-convolution of the base pmf.
    #[must_use]
    pub fn pmf_amplitude(&self, n: u32) -> Vec<AmplitudePoint> {
        amplitude_power(&self.base, n)
    }

    /// Amplitude response of the CDF of the `n`-fold self-convolution.
    #[must_use]
    pub fn cdf_amplitude(&self, n: u32) -> Vec<AmplitudePoint> {
        cdf_amplitude_from_pmf(&self.pmf_amplitude(n), Some(&self.step))
    }
}
