use clap::Parser;
use smc_solver::{MarketModel, export::export_mps, io::RawScenario};

mod io;
pub use io::*;

mod commands;
pub use commands::*;

mod catalog;
pub use catalog::DemoCatalog;

mod report;

// The top-level arguments -- presently just which subcommand to execute
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Run { scenario, lib } => {
                let model = MarketModel::new(scenario.assemble(&DemoCatalog))?;
                let outcome = lib.clear(&model)?;
                let mut output = std::io::stdout().lock();
                report::print(model.scenario(), &outcome, &mut output)?;
            }
            Commands::Solve { io, lib } => {
                let input = io.read()?;
                let raw = serde_json::from_reader::<_, RawScenario>(input)?;
                let model = MarketModel::new(raw.prepare()?)?;
                let outcome = lib.clear(&model)?;
                let output = io.write()?;
                serde_json::to_writer_pretty(output, &outcome)?;
            }
            Commands::Export { io } => {
                let input = io.read()?;
                let raw = serde_json::from_reader::<_, RawScenario>(input)?;
                let model = MarketModel::new(raw.prepare()?)?;
                let mut output = io.write()?;
                export_mps(&model, &mut output)?;
            }
        }

        Ok(())
    }
}
