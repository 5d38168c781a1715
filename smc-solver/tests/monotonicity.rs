use approx::assert_abs_diff_eq;
use rstest::*;
use rstest_reuse::{self, *};
use smc_core::models::{
    DemandBlock, GenerationUnit, Map, Profile, Scenario, UnitCategory,
};
use smc_core::ports::LpSolver;
use smc_solver::MarketModel;

use all_solvers::all_solvers;

/// Two generators, two blocks; block B's bid is below the marginal cost, so
/// it is priced out until it raises its bid.
fn market(bid_b: f64) -> MarketModel {
    let mut generators = Map::default();
    generators.insert(
        "G1".into(),
        GenerationUnit {
            category: UnitCategory::Conventional,
            node: "1".into(),
            capacity: Profile::from(100.0),
            cost: Profile::from(5.0),
        },
    );
    generators.insert(
        "G2".into(),
        GenerationUnit {
            category: UnitCategory::Conventional,
            node: "2".into(),
            capacity: Profile::from(120.0),
            cost: Profile::from(10.0),
        },
    );

    let mut demands = Map::default();
    demands.insert(
        "A".into(),
        DemandBlock {
            node: "3".into(),
            capacity: Profile::from(150.0),
            bid: Profile::from(15.0),
        },
    );
    demands.insert(
        "B".into(),
        DemandBlock {
            node: "4".into(),
            capacity: Profile::from(50.0),
            bid: Profile::from(bid_b),
        },
    );

    MarketModel::new(Scenario {
        generators,
        demands,
        storage: Map::default(),
        horizon: 1,
    })
    .unwrap()
}

#[apply(all_solvers)]
#[rstest]
fn raising_a_bid_never_shrinks_that_blocks_outcome(solver: impl LpSolver) {
    let before = market(8.0).clear(&solver).unwrap();
    let after = market(12.0).clear(&solver).unwrap();

    // At a bid of 8, B sits below G2's marginal cost and is not served; at
    // 12 it clears in full. Its own price and quantity must not decrease.
    assert_abs_diff_eq!(before.demands[1].served[0], 0.0, epsilon = 1e-3);
    assert_abs_diff_eq!(after.demands[1].served[0], 50.0, epsilon = 1e-3);
    assert!(after.demands[1].served[0] >= before.demands[1].served[0] - 1e-3);
    assert!(after.clearing_prices[0] >= before.clearing_prices[0] - 1e-3);

    // G2 stays marginal in both runs, so the price itself is unchanged.
    assert_abs_diff_eq!(before.clearing_prices[0], 10.0, epsilon = 1e-3);
    assert_abs_diff_eq!(after.clearing_prices[0], 10.0, epsilon = 1e-3);
}
