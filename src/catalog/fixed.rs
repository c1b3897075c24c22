//! Fixed-table distributions: constant arrays with no parameters.

use crate::catalog::{AxisLabel, Descriptor};
use crate::distribution::DiscreteDistribution;

/// A fair coin: heads or tails.
pub(crate) fn coin() -> Descriptor {
    Descriptor::fixed("coin", DiscreteDistribution::from_values(vec![0.5, 0.5]))
        .with_axis(AxisLabel::Sum)
}

/// A fair six-sided die, padded with zero mass at positions 0 and 7 so the
/// convolution series renders with one cell of margin on each side.
pub(crate) fn dice() -> Descriptor {
    let sixth = 1.0 / 6.0;
    Descriptor::fixed(
        "dice",
        DiscreteDistribution::from_values(vec![0.0, sixth, sixth, sixth, sixth, sixth, sixth, 0.0]),
    )
    .with_axis(AxisLabel::Sum)
}

/// A loaded six-sided die biased toward 1, 5, and 6.
pub(crate) fn dice_loaded() -> Descriptor {
    Descriptor::fixed(
        "dice_loaded",
        DiscreteDistribution::from_values(vec![
            0.0,
            8.0 / 24.0,
            2.0 / 24.0,
            2.0 / 24.0,
            2.0 / 24.0,
            5.0 / 24.0,
            5.0 / 24.0,
            0.0,
        ]),
    )
    .with_axis(AxisLabel::Sum)
}

/// The degenerate distribution: all mass at 0, with one cell of zero margin
/// on each side.
pub(crate) fn degenerate() -> Descriptor {
    Descriptor::fixed(
        "degenerate",
        DiscreteDistribution::new(-1, vec![0.0, 1.0, 0.0]),
    )
    .with_axis(AxisLabel::Value)
}

/// First-order forward difference, as a signed impulse response.
pub(crate) fn differential() -> Descriptor {
    Descriptor::fixed(
        "differential",
        DiscreteDistribution::from_values(vec![0.5, -0.5]),
    )
    .with_axis(AxisLabel::Time)
}

/// Second-order central difference. The support starts at index 0 rather
/// than -1, so strictly speaking the stencil is shifted by one sample.
pub(crate) fn differential_central() -> Descriptor {
    Descriptor::fixed(
        "differential_central",
        DiscreteDistribution::from_values(vec![0.5, 0.0, -0.5]),
    )
    .with_axis(AxisLabel::Time)
}
