//! Bernoulli distribution: success probability `p` over `{0, 1}`.

use crate::catalog::{AxisLabel, Descriptor};
use crate::distribution::DiscreteDistribution;
use crate::param::ParamSpec;

pub(crate) fn descriptor() -> Descriptor {
    Descriptor::parametric("bernoulli", pmf)
        .with_params(vec![ParamSpec::new("p", 0.05, 0.95, 0.05, 0.75)])
        .with_axis(AxisLabel::SuccessCount)
}

/// `[1-p, p]`. A probability outside `[0, 1]` clamps to a degenerate mass at
/// the nearest endpoint; a wrong-arity vector degrades to certain failure.
fn pmf(params: &[f64]) -> DiscreteDistribution {
    let [p] = params else {
        return DiscreteDistribution::from_values(vec![1.0, 0.0]);
    };
    if *p < 0.0 {
        return DiscreteDistribution::from_values(vec![1.0, 0.0]);
    }
    if *p > 1.0 {
        return DiscreteDistribution::from_values(vec![0.0, 1.0]);
    }
    DiscreteDistribution::from_values(vec![1.0 - p, *p])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fair_coin() {
        assert_eq!(pmf(&[0.5]).values(), &[0.5, 0.5]);
    }

    #[test]
    fn out_of_domain_clamps_to_endpoints() {
        assert_eq!(pmf(&[-0.5]).values(), &[1.0, 0.0]);
        assert_eq!(pmf(&[1.5]).values(), &[0.0, 1.0]);
    }

    #[test]
    fn wrong_arity_falls_back() {
        assert_eq!(pmf(&[]).values(), &[1.0, 0.0]);
        assert_eq!(pmf(&[0.5, 0.5]).values(), &[1.0, 0.0]);
    }
}
