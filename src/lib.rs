#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Discrete distribution algebra and spectral analysis: offset-indexed pmfs,
//! a convolution/CDF engine, a parametric distribution catalog, and a
//! z-transform amplitude engine with the convolution-power shortcut. The
//! library is pure, synchronous, and single-threaded — every function is a
//! transform from immutable inputs to a freshly allocated output.
//!
//! # Getting Started
//!
//! Generate a distribution, convolve it, and inspect its spectrum:
//!
//! ```
//! use convolver::{cdf, convolve_multiple, Catalog, SpectrumAnalyzer};
//!
//! let binomial = Catalog::global().generate("binomial", &[4.0, 0.5]).unwrap();
//! assert!((binomial.mass_at(2) - 0.375).abs() < 1e-12);
//!
//! // The sum of three such variables, by repeated convolution.
//! let sum = convolve_multiple(&binomial, 3);
//! assert_eq!(sum.len(), 13);
//!
//! // Its CDF converges to 1.
//! let cumulative = cdf(&sum);
//! assert!((cumulative.values().last().unwrap() - 1.0).abs() < 1e-9);
//!
//! // Frequency-domain view of every convolution level from one transform.
//! let analyzer = SpectrumAnalyzer::new(&binomial);
//! let level3 = analyzer.pmf_amplitude(3);
//! assert!((level3[0].amplitude - 1.0).abs() < 1e-9);
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`DiscreteDistribution`] | Offset-indexed value array: `values[i]` is the mass at position `offset + i`. |
//! | [`Catalog`] / [`Descriptor`] | Named pmf sources — fixed tables or pure parametric generators — with [`ParamSpec`] knobs. |
//! | [`ConvolutionSeries`] | Incremental repeated-self-convolution sequence for display series. |
//! | [`SpectrumAnalyzer`] | One base transform + one step grid per distribution; derives every convolution level's amplitude response. |
//! | [`AmplitudePoint`] | One sample of a frequency response over `[0, π]`. |
//!
//! # Built-in Distributions
//!
//! | Id | Kind | Parameters |
//! |----|------|------------|
//! | `bernoulli` | parametric | `p` |
//! | `binomial` | parametric | `n`, `p` |
//! | `poisson` | parametric | `lambda` |
//! | `zeta` | parametric | `s` |
//! | `normal` | parametric | `mean`, `std` |
//! | `lattice` | parametric | `x_min`, `step`, `count` |
//! | `uniform` | parametric | `length` |
//! | `custom_fir` | parametric | `sample0` … `sample7` |
//! | `coin`, `dice`, `dice_loaded`, `degenerate`, `differential`, `differential_central` | fixed | — |
//!
//! Generators never fail: malformed or out-of-domain parameter vectors
//! degrade to a documented safe fallback, so callers driving generators from
//! live controls never see a broken frame.
//!
//! # Offsets and the Spectral Engine
//!
//! Offsets participate in convolution (they add), in CDF derivation (kept),
//! and in range-limiting (adjusted) — but never in the spectral engine: a
//! pure index shift only contributes a linear phase factor, which vanishes
//! under the magnitude. This duality is intentional domain behavior.
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on public value types | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at generation and registration points | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod catalog;
mod convolution;
mod distribution;
mod error;
mod param;
mod spectrum;

pub use catalog::{AxisLabel, Catalog, Descriptor, Source};
pub use convolution::{cdf, convolve, convolve_multiple, ConvolutionSeries};
pub use distribution::DiscreteDistribution;
pub use error::{Error, Result};
pub use param::ParamSpec;
pub use spectrum::{
    amplitude_power, cdf_amplitude_from_pmf, step_function_amplitude, z_transform,
    z_transform_with, AmplitudePoint, SpectrumAnalyzer, DEFAULT_MAX_ANGULAR_FREQUENCY,
    DEFAULT_NUM_POINTS,
};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use convolver::prelude::*;
/// ```
pub mod prelude {
    pub use crate::catalog::{AxisLabel, Catalog, Descriptor, Source};
    pub use crate::convolution::{cdf, convolve, convolve_multiple, ConvolutionSeries};
    pub use crate::distribution::DiscreteDistribution;
    pub use crate::error::{Error, Result};
    pub use crate::param::ParamSpec;
    pub use crate::spectrum::{
        amplitude_power, cdf_amplitude_from_pmf, step_function_amplitude, z_transform,
        z_transform_with, AmplitudePoint, SpectrumAnalyzer,
    };
}
