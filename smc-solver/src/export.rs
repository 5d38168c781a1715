use crate::MarketModel;
use std::io::Write;

/// Export the assembled market clearing program to `.mps` format.
///
/// MPS is a somewhat archaic format, but is easy enough to generate, and
/// every general-purpose LP tool reads it, which is handy for cross-checking
/// the formulation against a reference solver.
/// https://www.ibm.com/docs/en/icos/22.1.2?topic=standard-records-in-mps-format
/// is a good reference.
pub fn export_mps(model: &MarketModel, buffer: &mut impl Write) -> Result<(), std::io::Error> {
    let scenario = model.scenario();
    let layout = model.layout();
    let horizon = scenario.horizon;

    // Column names follow the variable layout; row names follow the
    // constraint ordering (balance rows first, then the SoC recursion).
    let mut columns = vec![String::new(); layout.len()];
    for (j, (id, _)) in scenario.demands.iter().enumerate() {
        for t in 0..horizon {
            columns[layout.served(j, t)] = format!("d_{id}_{t}");
        }
    }
    for (i, (id, _)) in scenario.generators.iter().enumerate() {
        for t in 0..horizon {
            columns[layout.dispatch(i, t)] = format!("g_{id}_{t}");
        }
    }
    if layout.has_storage() {
        for t in 0..horizon {
            columns[layout.charge(t)] = format!("charge_{t}");
            columns[layout.discharge(t)] = format!("discharge_{t}");
            columns[layout.soc(t)] = format!("soc_{t}");
        }
    }

    let mut rows: Vec<String> = (0..horizon).map(|t| format!("balance_{t}")).collect();
    if layout.has_storage() {
        rows.extend((0..horizon).map(|t| format!("soc_balance_{t}")));
    }

    writeln!(buffer, "NAME market_clearing_lp")?;

    // The objective row carries social welfare; every constraint is an
    // equality, which is what yields the shadow prices.
    writeln!(buffer, "ROWS")?;
    writeln!(buffer, " N    welfare")?;
    for row in rows.iter() {
        writeln!(buffer, " E    {row}")?;
    }

    // MPS defaults to minimization, so the objective coefficients are
    // negated here.
    writeln!(buffer, "COLUMNS")?;
    let program = model.program();
    for (j, entries) in crate::columnize(program).into_iter().enumerate() {
        let column = &columns[j];
        let objective = program.objective[j];
        if objective != 0.0 {
            writeln!(buffer, "    {column}    welfare    {}", -objective)?;
        }
        for (row, coefficient) in entries {
            writeln!(buffer, "    {column}    {row}    {coefficient}", row = rows[row])?;
        }
    }

    // Only the initial-SoC row has a non-zero right-hand side.
    writeln!(buffer, "RHS")?;
    for (row, constraint) in program.constraints.iter().enumerate() {
        if constraint.rhs != 0.0 {
            writeln!(
                buffer,
                "    RHS    {row}    {rhs}",
                row = rows[row],
                rhs = constraint.rhs
            )?;
        }
    }

    // Every variable is bounded in [0, capacity]; zero is the MPS default
    // lower bound, so only the upper bounds need spelling out.
    writeln!(buffer, "BOUNDS")?;
    for (j, bound) in program.bounds.iter().enumerate() {
        writeln!(
            buffer,
            " UP BND    {column}    {upper}",
            column = columns[j],
            upper = bound.upper
        )?;
    }

    writeln!(buffer, "ENDATA")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smc_core::models::{
        DemandBlock, GenerationUnit, Map, Profile, Scenario, StorageUnit, UnitCategory,
    };

    fn model() -> MarketModel {
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

        let mut demands = Map::default();
        demands.insert(
            "D1".into(),
            DemandBlock {
                node: "1".into(),
                capacity: Profile::from(50.0),
                bid: Profile::from(40.0),
            },
        );

        let mut storage = Map::default();
        storage.insert(
            "S1".into(),
            StorageUnit {
                node: None,
                energy_capacity: 200.0,
                charge_cap: 100.0,
                discharge_cap: 100.0,
                charge_eff: 0.9,
                discharge_eff: 0.9,
                initial_soc: 0.5,
            },
        );

        MarketModel::new(Scenario {
            generators,
            demands,
            storage,
            horizon: 2,
        })
        .unwrap()
    }

    #[test]
    fn sections_and_names() {
        let mut buffer = Vec::new();
        export_mps(&model(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("NAME market_clearing_lp\n"));
        assert!(text.ends_with("ENDATA\n"));
        assert!(text.contains(" E    balance_0\n"));
        assert!(text.contains(" E    soc_balance_1\n"));

        // Objective terms are negated for the minimization sense.
        assert!(text.contains("    d_D1_0    welfare    -40\n"));
        assert!(text.contains("    g_G1_1    welfare    10\n"));

        // The initial charge seeds the only non-zero RHS.
        assert!(text.contains("    RHS    soc_balance_0    100\n"));

        assert!(text.contains(" UP BND    soc_1    200\n"));
    }
}
