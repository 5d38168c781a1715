use clap::ValueEnum;
use smc_core::models::{Map, Scenario};
use smc_core::ports::CatalogProvider;

// The built-in scenarios, mirroring the two classic exercises: one hour
// without storage, and a full day with the storage unit participating.
#[derive(Clone, Copy, ValueEnum)]
pub enum BuiltinScenario {
    /// One period, no storage
    Single,
    /// 24 hourly periods with the storage unit
    Multi,
}

impl BuiltinScenario {
    pub fn horizon(&self) -> usize {
        match self {
            Self::Single => 1,
            Self::Multi => 24,
        }
    }

    /// Pull the catalogs for this scenario from the provider.
    pub fn assemble(&self, provider: &impl CatalogProvider) -> Scenario {
        let horizon = self.horizon();
        Scenario {
            generators: provider.generation_catalog(horizon),
            demands: provider.demand_catalog(horizon),
            storage: match self {
                Self::Single => Map::default(),
                Self::Multi => provider.storage_catalog(),
            },
            horizon,
        }
    }
}
