use serde::{Deserialize, Serialize};
use smc_core::models::{
    DemandBlock, DemandId, GenerationUnit, GeneratorId, Map, Scenario, StorageId, StorageUnit,
    ValidationError,
};

/// A wrapper for raw scenario input, intended for use with serde.
///
/// This is the unvalidated shape of a scenario file: catalogs keyed by id,
/// per-period values given either as a number or as a sequence with one
/// entry per period, and an optional storage section. `prepare` is the only
/// way out, so code downstream of it only ever sees validated scenarios.
#[derive(Debug, Serialize, Deserialize)]
pub struct RawScenario {
    /// The number of periods to clear
    pub horizon: usize,
    /// The generation catalog
    pub generators: Map<GeneratorId, GenerationUnit>,
    /// The demand catalog
    pub demands: Map<DemandId, DemandBlock>,
    /// The storage catalog; omitted means no storage
    #[serde(default)]
    pub storage: Map<StorageId, StorageUnit>,
}

impl RawScenario {
    /// Validate the raw input and promote it to a scenario.
    pub fn prepare(self) -> Result<Scenario, ValidationError> {
        let scenario = Scenario {
            generators: self.generators,
            demands: self.demands,
            storage: self.storage,
            horizon: self.horizon,
        };
        scenario.validate()?;
        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_and_sequence_profiles_parse() {
        let raw: RawScenario = serde_json::from_str(
            r#"{
                "horizon": 2,
                "generators": {
                    "G1": {
                        "category": "wind",
                        "node": "3",
                        "capacity": [120.5, 115.2],
                        "cost": 0.0
                    }
                },
                "demands": {
                    "D1": {
                        "node": "1",
                        "capacity": 100.0,
                        "bid": [100.0, 90.0]
                    }
                }
            }"#,
        )
        .unwrap();

        let scenario = raw.prepare().unwrap();
        assert_eq!(scenario.horizon, 2);
        assert!(scenario.storage_unit().is_none());
        assert_eq!(scenario.generators[0].capacity.at(1), 115.2);
        assert_eq!(scenario.demands[0].bid.at(0), 100.0);
    }

    #[test]
    fn bad_profile_length_is_caught_in_prepare() {
        let raw: RawScenario = serde_json::from_str(
            r#"{
                "horizon": 3,
                "generators": {
                    "G1": {
                        "category": "conventional",
                        "node": "1",
                        "capacity": [10.0, 10.0],
                        "cost": 5.0
                    }
                },
                "demands": {}
            }"#,
        )
        .unwrap();

        assert!(matches!(
            raw.prepare(),
            Err(ValidationError::HorizonMismatch { .. })
        ));
    }
}
