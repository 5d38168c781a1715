use crate::models::{
    DemandBlock, DemandId, GenerationUnit, GeneratorId, Map, StorageId, StorageUnit,
};

/// Contract for the external data provider that supplies unit parameters.
///
/// The provider hands out catalogs shaped for a requested horizon length: a
/// single-period request typically yields scalar profiles, a multi-period
/// request yields per-period sequences. The core never hardcodes parameters
/// itself; any conforming provider may be substituted.
pub trait CatalogProvider {
    /// The generation units available for the given horizon.
    fn generation_catalog(&self, horizon: usize) -> Map<GeneratorId, GenerationUnit>;

    /// The demand blocks bidding over the given horizon.
    fn demand_catalog(&self, horizon: usize) -> Map<DemandId, DemandBlock>;

    /// The storage units. The model accepts at most one; supplying more is a
    /// validation error downstream.
    fn storage_catalog(&self) -> Map<StorageId, StorageUnit>;
}
