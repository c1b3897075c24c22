//! Custom FIR impulse response: eight caller-supplied signed taps.

use crate::catalog::{AxisLabel, Descriptor};
use crate::distribution::DiscreteDistribution;
use crate::param::ParamSpec;

/// Number of taps exposed to the caller.
const TAP_COUNT: usize = 8;

pub(crate) fn descriptor() -> Descriptor {
    let specs = (0..TAP_COUNT)
        .map(|i| ParamSpec::new(format!("sample{i}"), -1.0, 1.0, 0.01, 0.0))
        .collect();
    Descriptor::parametric("custom_fir", pmf)
        .with_params(specs)
        .with_axis(AxisLabel::Time)
}

/// The tap vector normalized by the sum of absolute values, so signed taps
/// keep a unit L1 norm. All-zero taps or a wrong-arity vector degrade to a
/// unit impulse over the eight taps, avoiding a division by zero.
#[allow(clippy::float_cmp)]
fn pmf(params: &[f64]) -> DiscreteDistribution {
    let fallback = || {
        let mut values = vec![0.0; TAP_COUNT];
        values[0] = 1.0;
        DiscreteDistribution::from_values(values)
    };

    if params.len() != TAP_COUNT {
        return fallback();
    }
    let sum_abs: f64 = params.iter().map(|v| v.abs()).sum();
    if sum_abs == 0.0 {
        return fallback();
    }
    DiscreteDistribution::from_values(params.iter().map(|v| v / sum_abs).collect())
}
