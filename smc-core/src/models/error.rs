use thiserror::Error;

/// The ways catalog data can fail validation.
///
/// Every variant is raised before any variable is created, so a failed
/// validation never leaves a partially-built model behind.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A per-period sequence does not match the horizon length
    #[error("{unit}: profile has {actual} entries, expected {expected}")]
    HorizonMismatch {
        /// The unit whose profile is malformed
        unit: String,
        /// The horizon length the scenario was built for
        expected: usize,
        /// The length of the offending sequence
        actual: usize,
    },

    /// A capacity or power cap is negative
    #[error("{unit}: capacity must be non-negative, got {value}")]
    NegativeCapacity {
        /// The unit carrying the negative capacity
        unit: String,
        /// The offending value
        value: f64,
    },

    /// A charge or discharge efficiency lies outside (0, 1]
    #[error("{unit}: efficiency must lie in (0, 1], got {value}")]
    BadEfficiency {
        /// The storage unit with the bad efficiency
        unit: String,
        /// The offending value
        value: f64,
    },

    /// The initial state-of-charge fraction lies outside [0, 1]
    #[error("{unit}: initial state of charge fraction must lie in [0, 1], got {value}")]
    BadInitialSoc {
        /// The storage unit with the bad fraction
        unit: String,
        /// The offending value
        value: f64,
    },

    /// The horizon has no periods
    #[error("horizon must span at least one period")]
    EmptyHorizon,

    /// More than one storage unit was supplied
    #[error("at most one storage unit is supported, got {count}")]
    MultipleStorageUnits {
        /// How many units the catalog supplied
        count: usize,
    },
}
