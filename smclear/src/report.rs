use smc_core::models::{DispatchOutcome, Scenario};
use std::io::Write;

/// Render a human-readable clearing report.
///
/// Single-period runs get the compact price/welfare/unit listing; longer
/// horizons additionally get the hourly price ladder and, when storage
/// participated, its trajectory.
pub fn print(
    scenario: &Scenario,
    outcome: &DispatchOutcome,
    out: &mut impl Write,
) -> std::io::Result<()> {
    writeln!(out, "RESULTS:")?;

    if scenario.horizon == 1 {
        writeln!(
            out,
            "Market clearing price: {:.2} €/MWh",
            outcome.clearing_prices[0]
        )?;
    }

    writeln!(
        out,
        "Optimal social welfare: {:.2} €",
        outcome.social_welfare
    )?;
    writeln!(
        out,
        "Total generation cost: {:.2} €",
        outcome.total_generation_cost
    )?;

    if scenario.horizon > 1 {
        writeln!(out, "Hourly clearing prices:")?;
        for (t, price) in outcome.clearing_prices.iter().enumerate() {
            write!(out, "  hour {t:>2}: {price:>7.2} €/MWh")?;
            if let Some(trajectory) = &outcome.storage {
                write!(
                    out,
                    "   charge {:>6.2} MW   discharge {:>6.2} MW   soc {:>7.2} MWh",
                    trajectory.charge[t], trajectory.discharge[t], trajectory.soc[t]
                )?;
            }
            writeln!(out)?;
        }
    }

    writeln!(out, "Generation:")?;
    for (id, result) in &outcome.generators {
        let energy: f64 = result.dispatch.iter().sum();
        writeln!(
            out,
            "  {id}: {energy:.2} MWh --- total profit: {profit:.2} €",
            profit = result.profit
        )?;
    }

    writeln!(out, "Demand:")?;
    for (id, result) in &outcome.demands {
        let energy: f64 = result.served.iter().sum();
        writeln!(
            out,
            "  {id}: {energy:.2} MWh --- total utility: {utility:.2} €",
            utility = result.utility
        )?;
    }

    if !outcome.degenerate_periods.is_empty() {
        writeln!(
            out,
            "Note: tied bids/costs in periods {:?}; the reported prices there \
             are one of several valid clearings.",
            outcome.degenerate_periods
        )?;
    }

    Ok(())
}
