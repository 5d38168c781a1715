use super::{GeneratorId, NodeId, Profile, ValidationError};

/// The technology category of a generation unit.
///
/// Informational only: it does not alter the constraints in a copper-plate
/// model, but reporting tools use it to distinguish conventional units from
/// renewables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum UnitCategory {
    /// Dispatchable thermal generation
    Conventional,
    /// Wind generation (zero marginal cost, capacity follows the forecast)
    Wind,
    /// Solar generation (zero marginal cost, capacity follows the forecast)
    Solar,
}

/// A generation unit offering energy into the market.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationUnit {
    /// The technology category
    pub category: UnitCategory,
    /// The network node the unit sits at (informational in a single-node model)
    pub node: NodeId,
    /// The maximum dispatch, per period
    pub capacity: Profile,
    /// The marginal cost of production, per period
    pub cost: Profile,
}

impl GenerationUnit {
    /// Check the unit's data against the horizon and the capacity invariant.
    pub fn validate(&self, id: &GeneratorId, horizon: usize) -> Result<(), ValidationError> {
        for profile in [&self.capacity, &self.cost] {
            profile
                .check_horizon(horizon)
                .map_err(|actual| ValidationError::HorizonMismatch {
                    unit: id.to_string(),
                    expected: horizon,
                    actual,
                })?;
        }

        let floor = self.capacity.min_value();
        if floor < 0.0 {
            return Err(ValidationError::NegativeCapacity {
                unit: id.to_string(),
                value: floor,
            });
        }

        Ok(())
    }
}
