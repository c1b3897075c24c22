//! Binomial distribution: `n` independent trials with success probability `p`.

use crate::catalog::{AxisLabel, Descriptor};
use crate::distribution::DiscreteDistribution;
use crate::param::ParamSpec;

pub(crate) fn descriptor() -> Descriptor {
    Descriptor::parametric("binomial", pmf)
        .with_params(vec![
            ParamSpec::new("n", 1.0, 20.0, 1.0, 10.0),
            ParamSpec::new("p", 0.05, 0.95, 0.05, 0.5),
        ])
        .with_axis(AxisLabel::SuccessCount)
}

/// Number of combinations `C(n, k)`.
///
/// Computed with the iterative multiplicative formula over the smaller of
/// `k` and `n - k`, which stays well within `f64` range for the supported
/// `n <= 20` — unlike naive factorial products.
#[allow(clippy::cast_precision_loss)]
fn combination(n: u64, k: u64) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut result = 1.0;
    for i in 0..k {
        result = result * (n - i) as f64 / (i + 1) as f64;
    }
    result
}

/// `P(X = k) = C(n, k) · p^k · (1-p)^(n-k)` for `k = 0..n`.
///
/// `n < 1` or a wrong-arity vector degrades to the unit impulse; `p` outside
/// `[0, 1]` degenerates to all mass at `k = 0` or `k = n`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn pmf(params: &[f64]) -> DiscreteDistribution {
    let [n_raw, p] = params else {
        return DiscreteDistribution::unit_impulse();
    };
    let n = n_raw.floor();
    if n < 1.0 {
        return DiscreteDistribution::unit_impulse();
    }
    let n = n as u64;
    let count = n as usize + 1;
    if *p < 0.0 {
        let mut values = vec![0.0; count];
        values[0] = 1.0;
        return DiscreteDistribution::from_values(values);
    }
    if *p > 1.0 {
        let mut values = vec![0.0; count];
        values[count - 1] = 1.0;
        return DiscreteDistribution::from_values(values);
    }

    let values = (0..=n)
        .map(|k| combination(n, k) * p.powi(k as i32) * (1.0 - p).powi((n - k) as i32))
        .collect();
    DiscreteDistribution::from_values(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combination_matches_pascal_triangle() {
        assert_eq!(combination(4, 0), 1.0);
        assert_eq!(combination(4, 2), 6.0);
        assert_eq!(combination(20, 10), 184_756.0);
        assert_eq!(combination(3, 5), 0.0);
    }

    #[test]
    fn four_fair_trials() {
        let d = pmf(&[4.0, 0.5]);
        let expected = [0.0625, 0.25, 0.375, 0.25, 0.0625];
        for (got, want) in d.values().iter().zip(expected) {
            assert!((got - want).abs() < 1e-12);
        }
        assert!((d.total_mass() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn large_n_stays_finite_and_normalized() {
        let d = pmf(&[20.0, 0.3]);
        assert_eq!(d.len(), 21);
        assert!(d.values().iter().all(|v| v.is_finite()));
        assert!((d.total_mass() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_domain_probability_degenerates() {
        let low = pmf(&[5.0, -0.1]);
        assert_eq!(low.mass_at(0), 1.0);
        assert_eq!(low.total_mass(), 1.0);

        let high = pmf(&[5.0, 1.1]);
        assert_eq!(high.mass_at(5), 1.0);
        assert_eq!(high.total_mass(), 1.0);
    }

    #[test]
    fn invalid_n_or_arity_falls_back() {
        assert_eq!(pmf(&[0.0, 0.5]), DiscreteDistribution::unit_impulse());
        assert_eq!(pmf(&[4.0]), DiscreteDistribution::unit_impulse());
    }
}
