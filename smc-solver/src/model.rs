mod layout;
pub use layout::VariableLayout;

use smc_core::models::{
    Bound, DemandOutcome, DispatchOutcome, EqualityConstraint, GeneratorOutcome, LinearProgram,
    LpSolution, Scenario, StorageOutcome, ValidationError,
};
use smc_core::ports::{LpSolver, SolverError};
use tracing::{Level, event};

/// A market clearing model: the assembled linear program together with the
/// variable layout needed to read results back out of it.
///
/// One formulation covers every horizon length: a single-period scenario is
/// simply `horizon == 1`, and the storage variables and state-of-charge
/// recursion are omitted entirely when the scenario carries no storage unit.
/// The program maximizes social welfare,
///
/// ```text
/// Σ_t [ Σ_j bid_{j,t}·served_{j,t} − Σ_i cost_{i,t}·dispatch_{i,t} ]
/// ```
///
/// subject to a per-period power balance (charging counts as demand,
/// discharging as supply) and the storage recursion. All variables are
/// individually bounded by the posted capacities, so the program is feasible
/// (the all-zero point) and bounded for any valid catalog, and by LP duality
/// the optimal dual of the period-t balance constraint is that period's
/// market-clearing price.
#[derive(Debug)]
pub struct MarketModel {
    scenario: Scenario,
    layout: VariableLayout,
    program: LinearProgram,
    degenerate_periods: Vec<usize>,
}

impl MarketModel {
    /// Validate the scenario and assemble the program.
    ///
    /// Validation runs first: a malformed catalog fails here before any
    /// variable is created, so no partial model is ever observable.
    pub fn new(scenario: Scenario) -> Result<Self, ValidationError> {
        scenario.validate()?;

        let horizon = scenario.horizon;
        let layout = VariableLayout::new(
            scenario.demands.len(),
            scenario.generators.len(),
            horizon,
            scenario.storage_unit().is_some(),
        );

        let mut bounds = vec![
            Bound {
                lower: 0.0,
                upper: 0.0
            };
            layout.len()
        ];
        let mut objective = vec![0.0; layout.len()];

        for (j, (_, block)) in scenario.demands.iter().enumerate() {
            for t in 0..horizon {
                let index = layout.served(j, t);
                bounds[index].upper = block.capacity.at(t);
                objective[index] = block.bid.at(t);
            }
        }

        for (i, (_, unit)) in scenario.generators.iter().enumerate() {
            for t in 0..horizon {
                let index = layout.dispatch(i, t);
                bounds[index].upper = unit.capacity.at(t);
                objective[index] = -unit.cost.at(t);
            }
        }

        if let Some((_, storage)) = scenario.storage_unit() {
            for t in 0..horizon {
                bounds[layout.charge(t)].upper = storage.charge_cap;
                bounds[layout.discharge(t)].upper = storage.discharge_cap;
                bounds[layout.soc(t)].upper = storage.energy_capacity;
            }
        }

        let rows = if layout.has_storage() {
            2 * horizon
        } else {
            horizon
        };
        let mut constraints = Vec::with_capacity(rows);

        // Power balance, one row per period:
        //   Σ_j served + charge = Σ_i dispatch + discharge
        // Terms are emitted in ascending variable order, which the
        // block-ordered layout gives us for free.
        for t in 0..horizon {
            let mut terms = Vec::with_capacity(layout.len() / horizon);
            for j in 0..scenario.demands.len() {
                terms.push((layout.served(j, t), 1.0));
            }
            for i in 0..scenario.generators.len() {
                terms.push((layout.dispatch(i, t), -1.0));
            }
            if layout.has_storage() {
                terms.push((layout.charge(t), 1.0));
                terms.push((layout.discharge(t), -1.0));
            }
            constraints.push(EqualityConstraint { terms, rhs: 0.0 });
        }

        // State-of-charge recursion:
        //   soc[0] = initial·capacity + η_c·charge[0] − discharge[0]/η_d
        //   soc[t] = soc[t−1]         + η_c·charge[t] − discharge[t]/η_d
        // The final period is unconstrained: the unit may end the horizon at
        // any charge level.
        if let Some((_, storage)) = scenario.storage_unit() {
            for t in 0..horizon {
                let mut terms = vec![
                    (layout.charge(t), -storage.charge_eff),
                    (layout.discharge(t), 1.0 / storage.discharge_eff),
                ];
                if t > 0 {
                    terms.push((layout.soc(t - 1), -1.0));
                }
                terms.push((layout.soc(t), 1.0));

                let rhs = if t == 0 {
                    storage.initial_soc * storage.energy_capacity
                } else {
                    0.0
                };
                constraints.push(EqualityConstraint { terms, rhs });
            }
        }

        let program = LinearProgram {
            bounds,
            objective,
            constraints,
        };

        event!(
            Level::DEBUG,
            variables = program.num_variables(),
            constraints = program.num_constraints(),
            horizon,
            "assembled market clearing program"
        );

        let degenerate_periods = scan_for_ties(&scenario);
        if !degenerate_periods.is_empty() {
            event!(
                Level::WARN,
                periods = ?degenerate_periods,
                "tied marginal costs or bids: clearing prices for these periods are not unique"
            );
        }

        Ok(Self {
            scenario,
            layout,
            program,
            degenerate_periods,
        })
    }

    /// The validated scenario the model was built from.
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// The variable layout of the program.
    pub fn layout(&self) -> &VariableLayout {
        &self.layout
    }

    /// The assembled program, ready to hand to an `LpSolver`.
    pub fn program(&self) -> &LinearProgram {
        &self.program
    }

    /// Periods whose clearing price is not unique due to tied marginals.
    pub fn degenerate_periods(&self) -> &[usize] {
        &self.degenerate_periods
    }

    /// Solve the program with the given backend and extract the outcome.
    pub fn clear<S: LpSolver>(&self, solver: &S) -> Result<DispatchOutcome, SolverError> {
        let solution = solver.solve(&self.program)?;
        Ok(self.extract(&solution))
    }

    /// Turn solved primal/dual values into the dispatch outcome.
    ///
    /// This is purely a read of already-computed values: the clearing price
    /// of period t is the dual of its balance row, welfare is the objective
    /// evaluated at the primal point, and profits/utilities follow from the
    /// prices. Nothing here re-solves or mutates the model.
    pub fn extract(&self, solution: &LpSolution) -> DispatchOutcome {
        let horizon = self.scenario.horizon;
        let prices = &solution.dual[..horizon];

        let mut total_generation_cost = 0.0;
        let generators = self
            .scenario
            .generators
            .iter()
            .enumerate()
            .map(|(i, (id, unit))| {
                let dispatch: Vec<f64> = (0..horizon)
                    .map(|t| solution.primal[self.layout.dispatch(i, t)])
                    .collect();

                let mut profit = 0.0;
                for (t, &quantity) in dispatch.iter().enumerate() {
                    let cost = unit.cost.at(t);
                    total_generation_cost += cost * quantity;
                    profit += (prices[t] - cost) * quantity;
                }

                (id.clone(), GeneratorOutcome { dispatch, profit })
            })
            .collect();

        let demands = self
            .scenario
            .demands
            .iter()
            .enumerate()
            .map(|(j, (id, block))| {
                let served: Vec<f64> = (0..horizon)
                    .map(|t| solution.primal[self.layout.served(j, t)])
                    .collect();

                let utility = served
                    .iter()
                    .enumerate()
                    .map(|(t, &quantity)| (block.bid.at(t) - prices[t]) * quantity)
                    .sum();

                (id.clone(), DemandOutcome { served, utility })
            })
            .collect();

        let storage = self.layout.has_storage().then(|| StorageOutcome {
            charge: (0..horizon)
                .map(|t| solution.primal[self.layout.charge(t)])
                .collect(),
            discharge: (0..horizon)
                .map(|t| solution.primal[self.layout.discharge(t)])
                .collect(),
            soc: (0..horizon)
                .map(|t| solution.primal[self.layout.soc(t)])
                .collect(),
        });

        DispatchOutcome {
            clearing_prices: prices.to_vec(),
            social_welfare: self.program.objective_value(&solution.primal),
            total_generation_cost,
            generators,
            demands,
            storage,
            degenerate_periods: self.degenerate_periods.clone(),
        }
    }
}

/// Find the periods where two active units post the same marginal cost/bid.
///
/// A tie means the optimal basis is degenerate there, so the dual of the
/// balance row (the clearing price) is one of possibly many optimal duals.
/// This is advisory only; the solve itself is unaffected.
fn scan_for_ties(scenario: &Scenario) -> Vec<usize> {
    let mut periods = Vec::new();

    for t in 0..scenario.horizon {
        let mut marginals = Vec::new();
        for (_, unit) in &scenario.generators {
            if unit.capacity.at(t) > 0.0 {
                marginals.push(unit.cost.at(t));
            }
        }
        for (_, block) in &scenario.demands {
            if block.capacity.at(t) > 0.0 {
                marginals.push(block.bid.at(t));
            }
        }

        marginals.sort_by(f64::total_cmp);
        if marginals.windows(2).any(|pair| pair[0] == pair[1]) {
            periods.push(t);
        }
    }

    periods
}

#[cfg(test)]
mod tests {
    use super::*;
    use smc_core::models::{
        DemandBlock, GenerationUnit, Map, Profile, StorageUnit, UnitCategory,
    };

    fn storage_unit() -> StorageUnit {
        StorageUnit {
            node: None,
            energy_capacity: 200.0,
            charge_cap: 100.0,
            discharge_cap: 80.0,
            charge_eff: 0.9,
            discharge_eff: 0.8,
            initial_soc: 0.5,
        }
    }

    fn scenario(horizon: usize, with_storage: bool) -> Scenario {
        let mut generators = Map::default();
        generators.insert(
            "G1".into(),
            GenerationUnit {
                category: UnitCategory::Conventional,
                node: "1".into(),
                capacity: Profile::from(100.0),
                cost: Profile::from(10.0),
            },
        );
        generators.insert(
            "G2".into(),
            GenerationUnit {
                category: UnitCategory::Wind,
                node: "2".into(),
                capacity: Profile::from(50.0),
                cost: Profile::from(0.0),
            },
        );

        let mut demands = Map::default();
        demands.insert(
            "D1".into(),
            DemandBlock {
                node: "3".into(),
                capacity: Profile::from(120.0),
                bid: Profile::from(40.0),
            },
        );

        let mut storage = Map::default();
        if with_storage {
            storage.insert("S1".into(), storage_unit());
        }

        Scenario {
            generators,
            demands,
            storage,
            horizon,
        }
    }

    #[test]
    fn single_period_dimensions() {
        let model = MarketModel::new(scenario(1, false)).unwrap();
        assert_eq!(model.program().num_variables(), 3);
        assert_eq!(model.program().num_constraints(), 1);
    }

    #[test]
    fn storage_adds_flows_and_recursion() {
        let model = MarketModel::new(scenario(4, true)).unwrap();
        // (1 demand + 2 generators + 3 storage blocks) × 4 periods
        assert_eq!(model.program().num_variables(), 24);
        // 4 balance rows + 4 recursion rows
        assert_eq!(model.program().num_constraints(), 8);
    }

    #[test]
    fn bounds_and_objective_follow_the_catalog() {
        let model = MarketModel::new(scenario(2, false)).unwrap();
        let layout = model.layout();
        let program = model.program();

        let served = layout.served(0, 1);
        assert_eq!(program.bounds[served].upper, 120.0);
        assert_eq!(program.objective[served], 40.0);

        let dispatch = layout.dispatch(0, 0);
        assert_eq!(program.bounds[dispatch].upper, 100.0);
        assert_eq!(program.objective[dispatch], -10.0);
    }

    #[test]
    fn balance_rows_mix_sides_correctly() {
        let model = MarketModel::new(scenario(3, true)).unwrap();
        let layout = model.layout();

        let balance = &model.program().constraints[1];
        assert_eq!(balance.rhs, 0.0);
        assert_eq!(
            balance.terms,
            vec![
                (layout.served(0, 1), 1.0),
                (layout.dispatch(0, 1), -1.0),
                (layout.dispatch(1, 1), -1.0),
                (layout.charge(1), 1.0),
                (layout.discharge(1), -1.0),
            ]
        );
    }

    #[test]
    fn soc_recursion_seeds_the_initial_charge() {
        let model = MarketModel::new(scenario(3, true)).unwrap();
        let layout = model.layout();
        let storage = storage_unit();

        // Recursion rows follow the balance rows.
        let first = &model.program().constraints[3];
        assert_eq!(first.rhs, storage.initial_soc * storage.energy_capacity);
        assert_eq!(
            first.terms,
            vec![
                (layout.charge(0), -storage.charge_eff),
                (layout.discharge(0), 1.0 / storage.discharge_eff),
                (layout.soc(0), 1.0),
            ]
        );

        let second = &model.program().constraints[4];
        assert_eq!(second.rhs, 0.0);
        assert_eq!(
            second.terms,
            vec![
                (layout.charge(1), -storage.charge_eff),
                (layout.discharge(1), 1.0 / storage.discharge_eff),
                (layout.soc(0), -1.0),
                (layout.soc(1), 1.0),
            ]
        );
    }

    #[test]
    fn malformed_catalog_fails_before_assembly() {
        let mut bad = scenario(2, false);
        bad.generators[0].capacity = Profile::from(vec![100.0; 5]);
        assert!(matches!(
            MarketModel::new(bad),
            Err(ValidationError::HorizonMismatch { .. })
        ));
    }

    #[test]
    fn tied_marginals_are_flagged() {
        // G1 and the demand block tie at 10 only in the second period.
        let mut tied = scenario(2, false);
        tied.demands[0].bid = Profile::from(vec![40.0, 10.0]);
        let model = MarketModel::new(tied).unwrap();
        assert_eq!(model.degenerate_periods(), &[1]);

        let clean = MarketModel::new(scenario(2, false)).unwrap();
        assert!(clean.degenerate_periods().is_empty());
    }

    #[test]
    fn extraction_is_a_pure_read() {
        let model = MarketModel::new(scenario(1, false)).unwrap();
        let layout = *model.layout();

        let mut primal = vec![0.0; 3];
        primal[layout.served(0, 0)] = 120.0;
        primal[layout.dispatch(0, 0)] = 70.0;
        primal[layout.dispatch(1, 0)] = 50.0;
        let solution = LpSolution {
            primal,
            dual: vec![10.0],
        };

        let outcome = model.extract(&solution);
        assert_eq!(outcome.clearing_prices, vec![10.0]);
        // 40·120 − (10·70 + 0·50)
        assert_eq!(outcome.social_welfare, 4100.0);
        assert_eq!(outcome.total_generation_cost, 700.0);
        assert_eq!(outcome.generators[0].profit, 0.0);
        assert_eq!(outcome.generators[1].profit, 500.0);
        assert_eq!(outcome.demands[0].utility, 3600.0);
        assert!(outcome.storage.is_none());
    }
}
