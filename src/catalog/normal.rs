//! Discretized normal distribution over integer support positions.

use crate::catalog::{AxisLabel, Descriptor};
use crate::distribution::DiscreteDistribution;
use crate::param::ParamSpec;

pub(crate) fn descriptor() -> Descriptor {
    Descriptor::parametric("normal", pmf)
        .with_params(vec![
            ParamSpec::new("mean", -50.0, 50.0, 1.0, 10.0),
            ParamSpec::new("std", 0.1, 5.0, 0.1, 3.0),
        ])
        .with_axis(AxisLabel::Value)
}

/// Gaussian kernel `exp(-(x - mean)² / (2·std²))` sampled at integer `x`
/// within a half-width of `ceil(5·std)` around `round(mean)`, then
/// normalized. The window is offset-encoded, so supports centered away from
/// zero (including negative means) cost no padding. `std <= 0` or a
/// wrong-arity vector degrades to the unit impulse.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn pmf(params: &[f64]) -> DiscreteDistribution {
    let [mean, std] = params else {
        return DiscreteDistribution::unit_impulse();
    };
    let (mean, std) = (*mean, *std);
    if std <= 0.0 {
        return DiscreteDistribution::unit_impulse();
    }

    let half_width = (std * 5.0).ceil() as i64;
    let center = mean.round() as i64;
    let offset = center - half_width;
    let length = 2 * half_width + 1;

    let values: Vec<f64> = (0..length)
        .map(|i| {
            let x = (offset + i) as f64;
            (-(x - mean) * (x - mean) / (2.0 * std * std)).exp()
        })
        .collect();

    DiscreteDistribution::new(offset, values).normalized()
}
