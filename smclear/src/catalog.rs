use smc_core::models::{
    DemandBlock, DemandId, GenerationUnit, GeneratorId, Map, Profile, StorageId, StorageUnit,
    UnitCategory,
};
use smc_core::ports::CatalogProvider;

/// The built-in demo catalog: twelve conventional units and four wind farms
/// on the 24-node test system, three inelastic-ish demand blocks, and one
/// storage unit.
///
/// A single-period request yields the static wind snapshot; a multi-period
/// request yields hourly wind traces (from Renewables.ninja, 2019-01-01) cut
/// to the requested horizon. Horizons beyond 24 hours are not available and
/// fail scenario validation downstream.
pub struct DemoCatalog;

const HOURS: usize = 24;

/// (id, node, capacity MW, marginal cost €/MWh)
const CONVENTIONAL: [(&str, &str, f64, f64); 12] = [
    ("G1", "1", 106.4, 13.32),
    ("G2", "2", 106.4, 13.32),
    ("G3", "7", 245.0, 20.7),
    ("G4", "13", 413.7, 20.93),
    ("G5", "15", 42.0, 26.11),
    ("G6", "15", 108.5, 10.52),
    ("G7", "16", 108.5, 10.52),
    ("G8", "18", 280.0, 6.02),
    ("G9", "21", 280.0, 5.47),
    ("G10", "22", 210.0, 7.0),
    ("G11", "23", 72.0, 10.52),
    ("G12", "23", 245.0, 10.89),
];

/// (id, node, capacity MW) for the one-hour snapshot
const WIND_SNAPSHOT: [(&str, &str, f64); 4] = [
    ("G13", "3", 120.54),
    ("G14", "5", 115.52),
    ("G15", "16", 53.34),
    ("G16", "21", 38.16),
];

// Hourly wind capacity, Ringkøbing (DK)
const WIND_G13: [f64; HOURS] = [
    493.889, 494.944, 495.592, 494.255, 487.672, 471.115, 461.533, 450.362, 442.578, 434.578,
    420.067, 411.262, 408.750, 396.238, 380.322, 359.388, 384.210, 432.453, 465.333, 482.747,
    487.239, 489.023, 492.153, 494.535,
];

// Hourly wind capacity, København (DK)
const WIND_G14: [f64; HOURS] = [
    480.869, 487.427, 492.159, 495.046, 495.499, 495.655, 495.415, 494.244, 490.584, 484.157,
    472.434, 456.822, 457.264, 469.746, 484.197, 492.592, 495.512, 495.313, 494.575, 495.495,
    495.510, 494.879, 494.249, 493.486,
];

// Hourly wind capacity, Berlin (DE)
const WIND_G15: [f64; HOURS] = [
    134.532, 174.108, 197.026, 210.252, 228.114, 237.570, 243.530, 249.353, 254.906, 247.705,
    242.458, 251.672, 255.555, 257.117, 255.880, 258.542, 262.337, 266.566, 269.523, 270.718,
    270.139, 268.821, 266.440, 266.848,
];

// Hourly wind capacity, Paris (FR)
const WIND_G16: [f64; HOURS] = [
    31.099, 27.833, 27.644, 31.590, 35.887, 40.126, 41.208, 44.025, 45.845, 41.002, 42.247,
    52.750, 56.039, 53.706, 49.371, 55.737, 67.571, 75.297, 80.724, 86.684, 94.832, 106.509,
    115.965, 110.077,
];

/// (id, node, hourly trace) for the multi-period runs
const WIND_HOURLY: [(&str, &str, &[f64; HOURS]); 4] = [
    ("G13", "3", &WIND_G13),
    ("G14", "5", &WIND_G14),
    ("G15", "16", &WIND_G15),
    ("G16", "21", &WIND_G16),
];

impl CatalogProvider for DemoCatalog {
    fn generation_catalog(&self, horizon: usize) -> Map<GeneratorId, GenerationUnit> {
        let mut catalog = Map::default();

        for (id, node, capacity, cost) in CONVENTIONAL {
            catalog.insert(
                id.into(),
                GenerationUnit {
                    category: UnitCategory::Conventional,
                    node: node.into(),
                    capacity: Profile::from(capacity),
                    cost: Profile::from(cost),
                },
            );
        }

        if horizon == 1 {
            for (id, node, capacity) in WIND_SNAPSHOT {
                catalog.insert(
                    id.into(),
                    GenerationUnit {
                        category: UnitCategory::Wind,
                        node: node.into(),
                        capacity: Profile::from(capacity),
                        cost: Profile::from(0.0),
                    },
                );
            }
        } else {
            for (id, node, trace) in WIND_HOURLY {
                catalog.insert(
                    id.into(),
                    GenerationUnit {
                        category: UnitCategory::Wind,
                        node: node.into(),
                        capacity: Profile::from(trace[..horizon.min(HOURS)].to_vec()),
                        cost: Profile::from(0.0),
                    },
                );
            }
        }

        catalog
    }

    fn demand_catalog(&self, _horizon: usize) -> Map<DemandId, DemandBlock> {
        let mut catalog = Map::default();
        for (id, node) in [("D1", "1"), ("D2", "2"), ("D3", "3")] {
            catalog.insert(
                id.into(),
                DemandBlock {
                    node: node.into(),
                    capacity: Profile::from(100.0),
                    bid: Profile::from(100.0),
                },
            );
        }
        catalog
    }

    fn storage_catalog(&self) -> Map<StorageId, StorageUnit> {
        let mut catalog = Map::default();
        catalog.insert(
            "S1".into(),
            StorageUnit {
                node: None,
                energy_capacity: 200.0,
                charge_cap: 100.0,
                discharge_cap: 100.0,
                charge_eff: 0.9,
                discharge_eff: 0.9,
                initial_soc: 1.0,
            },
        );
        catalog
    }
}
