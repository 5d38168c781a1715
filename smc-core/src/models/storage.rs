use super::{NodeId, StorageId, ValidationError};

/// An energy storage unit coupling the market across periods.
///
/// Storage is the only source of intertemporal coupling in the model: its
/// state of charge carries energy from one period to the next, subject to
/// the charge/discharge power caps and the round-trip efficiency losses.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StorageUnit {
    /// The network node, where known. The source data leaves this
    /// unresolved; it has no effect in a single-node model.
    #[cfg_attr(feature = "serde", serde(default))]
    pub node: Option<NodeId>,
    /// The maximum energy the unit can hold
    pub energy_capacity: f64,
    /// The maximum charging power
    pub charge_cap: f64,
    /// The maximum discharging power
    pub discharge_cap: f64,
    /// The charging efficiency, in (0, 1]
    pub charge_eff: f64,
    /// The discharging efficiency, in (0, 1]
    pub discharge_eff: f64,
    /// The initial state of charge, as a fraction of the energy capacity
    pub initial_soc: f64,
}

impl StorageUnit {
    /// Check the unit's caps, efficiencies, and initial state of charge.
    pub fn validate(&self, id: &StorageId) -> Result<(), ValidationError> {
        for cap in [self.energy_capacity, self.charge_cap, self.discharge_cap] {
            if cap < 0.0 {
                return Err(ValidationError::NegativeCapacity {
                    unit: id.to_string(),
                    value: cap,
                });
            }
        }

        for eff in [self.charge_eff, self.discharge_eff] {
            if !(eff > 0.0 && eff <= 1.0) {
                return Err(ValidationError::BadEfficiency {
                    unit: id.to_string(),
                    value: eff,
                });
            }
        }

        if !(0.0..=1.0).contains(&self.initial_soc) {
            return Err(ValidationError::BadInitialSoc {
                unit: id.to_string(),
                value: self.initial_soc,
            });
        }

        Ok(())
    }
}
