use clap::ValueEnum;
use smc_core::models::DispatchOutcome;
use smc_core::ports::SolverError;
use smc_solver::{MarketModel, clarabel::ClarabelSolver, osqp::OsqpSolver};

// This explicitly articulates the available solvers for the CLI
#[derive(Clone, Copy, ValueEnum)]
pub enum SolverLib {
    Clarabel,
    Osqp,
}

// Conveniently, we can use the same enum to handle the particulars of
// calling into the various solver implementations
impl SolverLib {
    pub fn clear(&self, model: &MarketModel) -> Result<DispatchOutcome, SolverError> {
        match self {
            SolverLib::Clarabel => model.clear(&ClarabelSolver::default()),
            SolverLib::Osqp => model.clear(&OsqpSolver::default()),
        }
    }
}
