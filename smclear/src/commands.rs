use super::IOArgs;
use clap::Subcommand;

mod run;
mod solve;

pub use run::BuiltinScenario;
pub use solve::SolverLib;

#[derive(Subcommand)]
pub enum Commands {
    /// Clear one of the built-in scenarios and print a report
    Run {
        /// The scenario to clear
        #[arg(value_enum)]
        scenario: BuiltinScenario,

        /// Request a specific LP solver
        #[arg(short, long, default_value = "clarabel")]
        lib: SolverLib,
    },

    /// Clear a scenario file and report the solution
    Solve {
        #[command(flatten)]
        io: IOArgs,

        /// Request a specific LP solver
        #[arg(short, long, default_value = "clarabel")]
        lib: SolverLib,
    },

    /// Construct the market clearing program and export it to MPS format
    Export {
        #[command(flatten)]
        io: IOArgs,
    },
}
