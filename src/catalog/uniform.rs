//! Discrete uniform distribution over `0..length`.

use crate::catalog::Descriptor;
use crate::distribution::DiscreteDistribution;
use crate::param::ParamSpec;

pub(crate) fn descriptor() -> Descriptor {
    Descriptor::parametric("uniform", pmf)
        .with_params(vec![ParamSpec::new("length", 1.0, 10.0, 1.0, 5.0)])
}

/// `length` positions of mass `1/length`. `length < 1` or a wrong-arity
/// vector degrades to the unit impulse.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn pmf(params: &[f64]) -> DiscreteDistribution {
    let [length] = params else {
        return DiscreteDistribution::unit_impulse();
    };
    let length = length.floor();
    if length < 1.0 {
        return DiscreteDistribution::unit_impulse();
    }
    let length = length as usize;
    DiscreteDistribution::from_values(vec![1.0 / length as f64; length])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_positions_get_equal_mass() {
        let d = pmf(&[5.0]);
        assert_eq!(d.values(), &[0.2; 5]);
        assert!((d.total_mass() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn invalid_length_or_arity_falls_back() {
        assert_eq!(pmf(&[0.0]), DiscreteDistribution::unit_impulse());
        assert_eq!(pmf(&[-1.0]), DiscreteDistribution::unit_impulse());
        assert_eq!(pmf(&[]), DiscreteDistribution::unit_impulse());
        assert_eq!(pmf(&[2.0, 3.0]), DiscreteDistribution::unit_impulse());
    }
}
