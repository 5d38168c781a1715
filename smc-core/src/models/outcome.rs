use super::{DemandId, GeneratorId, Map};

/// Solution data for an entire clearing run.
///
/// This is a pure read of already-computed primal and dual values: producing
/// it never re-solves anything, and it is immutable once produced.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DispatchOutcome {
    /// The market-clearing price of each period: the dual value of that
    /// period's power balance constraint
    pub clearing_prices: Vec<f64>,
    /// The objective value at the optimum (consumer utility minus
    /// generation cost)
    pub social_welfare: f64,
    /// Total cost of all dispatched generation across the horizon
    pub total_generation_cost: f64,
    /// Outcomes for each generation unit
    pub generators: Map<GeneratorId, GeneratorOutcome>,
    /// Outcomes for each demand block
    pub demands: Map<DemandId, DemandOutcome>,
    /// The storage trajectory, when the scenario had a storage unit
    pub storage: Option<StorageOutcome>,
    /// Periods where tied marginal costs or bids make the optimal dual
    /// non-unique. The reported price for such a period is one of possibly
    /// many valid clearing prices. This is an advisory, not an error.
    pub degenerate_periods: Vec<usize>,
}

/// Solution data for an individual generation unit.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeneratorOutcome {
    /// The dispatched quantity per period
    pub dispatch: Vec<f64>,
    /// Total profit across the horizon, `Σ_t (price_t − cost_t) · dispatch_t`
    pub profit: f64,
}

/// Solution data for an individual demand block.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DemandOutcome {
    /// The served quantity per period
    pub served: Vec<f64>,
    /// Total utility across the horizon, `Σ_t (bid_t − price_t) · served_t`
    pub utility: f64,
}

/// The storage unit's trajectory over the horizon.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StorageOutcome {
    /// Charging power drawn from the market, per period
    pub charge: Vec<f64>,
    /// Discharging power released to the market, per period
    pub discharge: Vec<f64>,
    /// State of charge at the end of each period
    pub soc: Vec<f64>,
}
