//! The distribution catalog: named pmf sources and their parameter specs.
//!
//! A [`Descriptor`] pairs an id with a [`Source`] — either a fixed
//! distribution or a pure generator function of a parameter vector — plus the
//! [`ParamSpec`]s describing the generator's knobs and an [`AxisLabel`] hint
//! for presentation layers. Descriptors are constructed once and never
//! mutated; generation is a pure, repeatable computation.
//!
//! Generation never fails: wrong-arity or out-of-domain parameter vectors
//! degrade to a safe fallback distribution inside each generator. Generators
//! are called reactively from live controls and must never produce a broken
//! frame, so this fallback is policy, not an error path.

mod bernoulli;
mod binomial;
mod custom_fir;
mod fixed;
mod lattice;
mod normal;
mod poisson;
mod uniform;
mod zeta;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::distribution::DiscreteDistribution;
use crate::error::{Error, Result};
use crate::param::ParamSpec;

/// The x-axis interpretation of a distribution's support positions.
///
/// A symbolic hint for presentation layers (replacing per-locale label
/// strings); the engine itself never interprets it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisLabel {
    /// Plain array index.
    #[default]
    Index,
    /// Sum of outcomes (dice totals, repeated trials).
    Sum,
    /// Number of successes (bernoulli, binomial).
    SuccessCount,
    /// Number of occurrences (poisson).
    OccurrenceCount,
    /// A value on the support axis (normal, zeta, lattice).
    Value,
    /// A sample time index (filter impulse responses).
    Time,
}

/// Where a descriptor's values come from.
///
/// The original dynamic dispatch between "fixed array" and "parameter
/// function" sources becomes a tagged variant resolved once at generation
/// time into a uniform [`DiscreteDistribution`] value.
#[derive(Clone, Debug)]
pub enum Source {
    /// A constant distribution; parameters are ignored.
    Fixed(DiscreteDistribution),
    /// A pure function of a parameter vector.
    Parametric(fn(&[f64]) -> DiscreteDistribution),
}

/// A catalog entry: an id, a value source, parameter specs, and an axis hint.
///
/// # Examples
///
/// ```
/// use convolver::{AxisLabel, Descriptor, DiscreteDistribution, ParamSpec};
///
/// let coin = Descriptor::fixed(
///     "my_coin",
///     DiscreteDistribution::from_values(vec![0.5, 0.5]),
/// )
/// .with_axis(AxisLabel::Sum);
/// assert_eq!(coin.generate(&[]).values(), &[0.5, 0.5]);
/// ```
#[derive(Clone, Debug)]
pub struct Descriptor {
    id: String,
    source: Source,
    param_specs: Vec<ParamSpec>,
    axis_label: AxisLabel,
}

impl Descriptor {
    /// Creates a descriptor backed by a constant distribution.
    #[must_use]
    pub fn fixed(id: impl Into<String>, distribution: DiscreteDistribution) -> Self {
        Self {
            id: id.into(),
            source: Source::Fixed(distribution),
            param_specs: Vec::new(),
            axis_label: AxisLabel::default(),
        }
    }

    /// Creates a descriptor backed by a pure generator function.
    #[must_use]
    pub fn parametric(id: impl Into<String>, generator: fn(&[f64]) -> DiscreteDistribution) -> Self {
        Self {
            id: id.into(),
            source: Source::Parametric(generator),
            param_specs: Vec::new(),
            axis_label: AxisLabel::default(),
        }
    }

    /// Sets the parameter specs for this descriptor.
    #[must_use]
    pub fn with_params(mut self, specs: Vec<ParamSpec>) -> Self {
        self.param_specs = specs;
        self
    }

    /// Sets the axis-label hint for this descriptor.
    #[must_use]
    pub fn with_axis(mut self, label: AxisLabel) -> Self {
        self.axis_label = label;
        self
    }

    /// Returns the descriptor id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the descriptor's value source.
    #[must_use]
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Returns the parameter specs (empty for fixed sources).
    #[must_use]
    pub fn param_specs(&self) -> &[ParamSpec] {
        &self.param_specs
    }

    /// Returns the axis-label hint.
    #[must_use]
    pub fn axis_label(&self) -> AxisLabel {
        self.axis_label
    }

    /// Returns the default parameter vector, one entry per spec.
    #[must_use]
    pub fn default_params(&self) -> Vec<f64> {
        self.param_specs.iter().map(|s| s.default_value).collect()
    }

    /// Clamps each entry of `params` into its spec's range.
    ///
    /// Entries beyond the spec list are passed through unchanged; missing
    /// entries are not filled in. This is a convenience for presentation
    /// layers — generators handle unclamped vectors on their own.
    #[must_use]
    pub fn clamp_params(&self, params: &[f64]) -> Vec<f64> {
        params
            .iter()
            .enumerate()
            .map(|(i, &v)| match self.param_specs.get(i) {
                Some(spec) => spec.clamp(v),
                None => v,
            })
            .collect()
    }

    /// Generates a distribution from `params`.
    ///
    /// Fixed sources ignore the parameter vector. Parametric sources degrade
    /// to their documented fallback on wrong arity or out-of-domain values —
    /// this never fails or panics.
    #[must_use]
    pub fn generate(&self, params: &[f64]) -> DiscreteDistribution {
        trace_debug!(id = %self.id, params = ?params, "generating distribution");
        match &self.source {
            Source::Fixed(distribution) => distribution.clone(),
            Source::Parametric(generator) => generator(params),
        }
    }

    /// Validates all parameter specs.
    fn validate(&self) -> Result<()> {
        for spec in &self.param_specs {
            spec.validate()?;
        }
        Ok(())
    }
}

/// A read-only registry of distribution descriptors, keyed by id.
///
/// # Examples
///
/// ```
/// use convolver::Catalog;
///
/// let catalog = Catalog::global();
/// let binomial = catalog.generate("binomial", &[4.0, 0.5]).unwrap();
/// assert_eq!(binomial.len(), 5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: BTreeMap<String, Descriptor>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog populated with every built-in distribution.
    ///
    /// Built-in ids: `bernoulli`, `binomial`, `coin`, `custom_fir`,
    /// `degenerate`, `dice`, `dice_loaded`, `differential`,
    /// `differential_central`, `lattice`, `normal`, `poisson`, `uniform`,
    /// `zeta`.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();
        let builtins = [
            bernoulli::descriptor(),
            binomial::descriptor(),
            custom_fir::descriptor(),
            fixed::coin(),
            fixed::degenerate(),
            fixed::dice(),
            fixed::dice_loaded(),
            fixed::differential(),
            fixed::differential_central(),
            lattice::descriptor(),
            normal::descriptor(),
            poisson::descriptor(),
            uniform::descriptor(),
            zeta::descriptor(),
        ];
        for descriptor in builtins {
            // Built-in ids are distinct and their specs statically valid.
            catalog.entries.insert(descriptor.id().to_owned(), descriptor);
        }
        catalog
    }

    /// Returns the process-wide catalog of built-in distributions,
    /// initialized on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<Catalog> = OnceLock::new();
        GLOBAL.get_or_init(Self::with_builtins)
    }

    /// Registers a descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateDistribution`] when the id is already taken,
    /// or a parameter-spec validation error when a spec is malformed.
    pub fn register(&mut self, descriptor: Descriptor) -> Result<()> {
        descriptor.validate()?;
        if self.entries.contains_key(descriptor.id()) {
            return Err(Error::DuplicateDistribution(descriptor.id().to_owned()));
        }
        trace_info!(id = %descriptor.id(), "registered distribution");
        self.entries.insert(descriptor.id().to_owned(), descriptor);
        Ok(())
    }

    /// Looks up a descriptor by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Descriptor> {
        self.entries.get(id)
    }

    /// Looks up a descriptor by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDistribution`] when the id is not registered.
    pub fn descriptor(&self, id: &str) -> Result<&Descriptor> {
        self.entries
            .get(id)
            .ok_or_else(|| Error::UnknownDistribution(id.to_owned()))
    }

    /// Generates a distribution from the descriptor registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDistribution`] when the id is not registered.
    /// Generation itself never fails (see [`Descriptor::generate`]).
    pub fn generate(&self, id: &str, params: &[f64]) -> Result<DiscreteDistribution> {
        Ok(self.descriptor(id)?.generate(params))
    }

    /// Returns the registered ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the number of registered descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no descriptors are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
