use super::{
    DemandBlock, DemandId, GenerationUnit, GeneratorId, Map, StorageId, StorageUnit,
    ValidationError,
};

/// The validated input bundle for one market clearing run.
///
/// Catalogs are loaded once before model construction; a scenario is the
/// point where they meet the horizon length. `validate` enforces every data
/// invariant, so downstream code can assume well-formed profiles.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    /// The generation catalog
    pub generators: Map<GeneratorId, GenerationUnit>,
    /// The demand catalog
    pub demands: Map<DemandId, DemandBlock>,
    /// The storage catalog (at most one unit)
    pub storage: Map<StorageId, StorageUnit>,
    /// The number of periods in the horizon
    pub horizon: usize,
}

impl Scenario {
    /// Check every data invariant: the horizon is non-empty, every
    /// per-period sequence matches it, capacities are non-negative,
    /// efficiencies lie in (0, 1], and at most one storage unit is present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.horizon == 0 {
            return Err(ValidationError::EmptyHorizon);
        }

        if self.storage.len() > 1 {
            return Err(ValidationError::MultipleStorageUnits {
                count: self.storage.len(),
            });
        }

        for (id, unit) in &self.generators {
            unit.validate(id, self.horizon)?;
        }
        for (id, block) in &self.demands {
            block.validate(id, self.horizon)?;
        }
        for (id, storage) in &self.storage {
            storage.validate(id)?;
        }

        Ok(())
    }

    /// The storage unit, if the scenario has one.
    pub fn storage_unit(&self) -> Option<(&StorageId, &StorageUnit)> {
        self.storage.first()
    }
}
