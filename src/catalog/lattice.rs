//! Lattice distribution: equally probable atoms on a regular grid.

use crate::catalog::{AxisLabel, Descriptor};
use crate::distribution::DiscreteDistribution;
use crate::param::ParamSpec;

pub(crate) fn descriptor() -> Descriptor {
    Descriptor::parametric("lattice", pmf)
        .with_params(vec![
            ParamSpec::new("x_min", -10.0, 10.0, 1.0, 0.0),
            ParamSpec::new("step", 1.0, 10.0, 1.0, 5.0),
            ParamSpec::new("count", 1.0, 10.0, 1.0, 3.0),
        ])
        .with_axis(AxisLabel::Value)
}

/// `count` atoms of mass `1/count` at `x_min, x_min + step, ...`. Negative
/// `x_min` is carried by the offset, so no leading zeros are stored.
/// `count < 1`, `step <= 0`, or a wrong-arity vector degrades to the unit
/// impulse.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn pmf(params: &[f64]) -> DiscreteDistribution {
    let [x_min, step, count] = params else {
        return DiscreteDistribution::unit_impulse();
    };
    let x_min = x_min.round() as i64;
    let step = step.round() as i64;
    let count = count.round() as i64;
    if count < 1 || step <= 0 {
        return DiscreteDistribution::unit_impulse();
    }

    let length = ((count - 1) * step + 1) as usize;
    let mut values = vec![0.0; length];
    let mass = 1.0 / count as f64;
    for i in 0..count {
        values[(i * step) as usize] = mass;
    }
    DiscreteDistribution::new(x_min, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atoms_land_on_the_grid() {
        let d = pmf(&[0.0, 5.0, 3.0]);
        assert_eq!(d.offset(), 0);
        assert_eq!(d.len(), 11);
        for x in [0, 5, 10] {
            assert!((d.mass_at(x) - 1.0 / 3.0).abs() < 1e-12);
        }
        assert_eq!(d.mass_at(3), 0.0);
        assert!((d.total_mass() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn negative_origin_uses_the_offset() {
        let d = pmf(&[-6.0, 3.0, 4.0]);
        assert_eq!(d.offset(), -6);
        assert_eq!(d.support_max(), Some(3));
        for x in [-6, -3, 0, 3] {
            assert!((d.mass_at(x) - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn single_atom_is_a_shifted_impulse() {
        let d = pmf(&[7.0, 2.0, 1.0]);
        assert_eq!(d.offset(), 7);
        assert_eq!(d.values(), &[1.0]);
    }

    #[test]
    fn invalid_parameters_fall_back() {
        assert_eq!(pmf(&[0.0, 5.0, 0.0]), DiscreteDistribution::unit_impulse());
        assert_eq!(pmf(&[0.0, 0.0, 3.0]), DiscreteDistribution::unit_impulse());
        assert_eq!(pmf(&[0.0, -1.0, 3.0]), DiscreteDistribution::unit_impulse());
        assert_eq!(pmf(&[0.0, 5.0]), DiscreteDistribution::unit_impulse());
    }
}
