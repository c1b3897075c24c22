#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when looking up a distribution id that is not in the catalog.
    #[error("unknown distribution id '{0}'")]
    UnknownDistribution(String),

    /// Returned when registering a descriptor under an id that is already taken.
    #[error("distribution id '{0}' is already registered")]
    DuplicateDistribution(String),

    /// Returned when a parameter spec has a lower bound above its upper bound.
    #[error("invalid bounds for '{name}': min ({min}) must be less than or equal to max ({max})")]
    InvalidBounds {
        /// The name of the offending parameter.
        name: String,
        /// The lower bound value.
        min: f64,
        /// The upper bound value.
        max: f64,
    },

    /// Returned when a parameter spec has a non-positive step size.
    #[error("invalid step for '{name}': step must be positive, got {step}")]
    InvalidStep {
        /// The name of the offending parameter.
        name: String,
        /// The step value.
        step: f64,
    },

    /// Returned when a parameter spec's default value lies outside its bounds.
    #[error("invalid default for '{name}': {default_value} is outside [{min}, {max}]")]
    InvalidDefault {
        /// The name of the offending parameter.
        name: String,
        /// The default value.
        default_value: f64,
        /// The lower bound value.
        min: f64,
        /// The upper bound value.
        max: f64,
    },

    /// Returned when a transform grid is requested with fewer than two points.
    #[error("invalid point count: a transform grid needs at least 2 points, got {0}")]
    InvalidPointCount(usize),

    /// Returned when a transform grid is requested with a non-finite or
    /// non-positive maximum angular frequency.
    #[error("invalid frequency range: maximum angular frequency must be positive and finite, got {0}")]
    InvalidFrequencyRange(f64),
}

pub type Result<T> = core::result::Result<T, Error>;
