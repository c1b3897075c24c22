//! Poisson distribution: occurrence counts at rate `lambda`.

use crate::catalog::{AxisLabel, Descriptor};
use crate::distribution::DiscreteDistribution;
use crate::param::ParamSpec;

/// Terms smaller than this past the mean end the truncation loop early.
const TAIL_CUTOFF: f64 = 1e-5;

pub(crate) fn descriptor() -> Descriptor {
    Descriptor::parametric("poisson", pmf)
        .with_params(vec![ParamSpec::new("lambda", 0.5, 10.0, 0.5, 2.0)])
        .with_axis(AxisLabel::OccurrenceCount)
}

/// `P(X = k) = λ^k · e^(-λ) / k!`, computed term-wise in log space as
/// `k·ln λ − λ − ln k!` with `ln k!` accumulated as a running `Σ ln j` — no
/// factorials, so neither overflow nor underflow for the supported range.
///
/// The infinite support is truncated at `min(50, ceil(3λ + 10))` terms, or
/// earlier once a term drops below `1e-5` past the mean; renormalizing then
/// folds the clipped tail (at most the cutoff times the remaining tail
/// ratio) back into the kept terms. `λ <= 0` or a wrong-arity vector
/// degrades to the unit impulse.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn pmf(params: &[f64]) -> DiscreteDistribution {
    let [lambda] = params else {
        return DiscreteDistribution::unit_impulse();
    };
    let lambda = *lambda;
    if lambda <= 0.0 {
        return DiscreteDistribution::unit_impulse();
    }

    let max_k = 50.0_f64.min((3.0 * lambda + 10.0).ceil()) as usize;
    let ln_lambda = lambda.ln();
    let mut ln_k_factorial = 0.0;
    let mut values = Vec::with_capacity(max_k + 1);
    for k in 0..=max_k {
        if k > 0 {
            ln_k_factorial += (k as f64).ln();
        }
        let prob = (k as f64 * ln_lambda - lambda - ln_k_factorial).exp();
        values.push(prob);
        if prob < TAIL_CUTOFF && k as f64 > lambda {
            break;
        }
    }

    DiscreteDistribution::from_values(values).normalized()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_two_head_matches_closed_form() {
        let d = pmf(&[2.0]);
        // P(X = 0) = e^-2; renormalization shifts it by less than the cutoff.
        assert!((d.values()[0] - (-2.0_f64).exp()).abs() < 1e-4);
        assert!((d.total_mass() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn truncation_respects_term_budget() {
        let d = pmf(&[10.0]);
        assert!(d.len() <= 41); // ceil(3·10 + 10) + 1
        assert!((d.total_mass() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn small_rate_truncates_early() {
        let d = pmf(&[0.5]);
        assert!(d.len() < 12);
        assert!((d.total_mass() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn invalid_rate_or_arity_falls_back() {
        assert_eq!(pmf(&[0.0]), DiscreteDistribution::unit_impulse());
        assert_eq!(pmf(&[-1.0]), DiscreteDistribution::unit_impulse());
        assert_eq!(pmf(&[]), DiscreteDistribution::unit_impulse());
        assert_eq!(pmf(&[2.0, 3.0]), DiscreteDistribution::unit_impulse());
    }
}
