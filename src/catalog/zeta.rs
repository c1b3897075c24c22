//! Zeta (Zipf) distribution: `P(X = k) ∝ k^(-s)` over `k >= 1`.

use crate::catalog::{AxisLabel, Descriptor};
use crate::distribution::DiscreteDistribution;
use crate::param::ParamSpec;

/// Truncation stops once a term contributes less than this fraction of the
/// running sum.
const MARGINAL_THRESHOLD: f64 = 2e-4;

/// Hard cap on the number of accumulated terms.
const MAX_TERMS: usize = 1000;

pub(crate) fn descriptor() -> Descriptor {
    Descriptor::parametric("zeta", pmf)
        .with_params(vec![ParamSpec::new("s", 1.5, 5.0, 0.1, 3.0)])
        .with_axis(AxisLabel::Value)
}

/// `P(X = k) = k^(-s) / ζ(s)` for `k = 1..N`, offset-encoded at 1.
///
/// `N` is found adaptively: terms `k^(-s)` accumulate until the marginal
/// contribution relative to the running sum drops below `2e-4`, capped at
/// 1000 terms. Normalizing by the running sum approximates `ζ(s)`, so the
/// clipped tail mass is folded into the kept terms. `s <= 1` (the series
/// diverges) or a wrong-arity vector degrades to the unit impulse.
#[allow(clippy::cast_precision_loss)]
fn pmf(params: &[f64]) -> DiscreteDistribution {
    let [s] = params else {
        return DiscreteDistribution::unit_impulse();
    };
    let s = *s;
    if s <= 1.0 {
        return DiscreteDistribution::unit_impulse();
    }

    let mut values = Vec::new();
    let mut sum = 0.0;
    for k in 1..=MAX_TERMS {
        let term = (k as f64).powf(-s);
        values.push(term);
        sum += term;
        if term / sum <= MARGINAL_THRESHOLD {
            break;
        }
    }

    for value in &mut values {
        *value /= sum;
    }
    DiscreteDistribution::new(1, values)
}
