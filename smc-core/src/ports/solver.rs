use crate::models::{LinearProgram, LpSolution};
use thiserror::Error;

/// The LP solving capability the core delegates to.
///
/// The capability set is deliberately small: accept an immutable program
/// with bounded continuous variables, linear equality constraints, and a
/// maximize-sense objective; report primal and dual values on an optimal
/// solve, and a typed error otherwise. The core never implements the
/// solving algorithm; any conforming backend may be substituted without
/// changing the model builder or the result extractor.
pub trait LpSolver {
    /// The configuration type for this backend
    type Settings;

    /// Create a new instance with the provided settings
    fn new(settings: Self::Settings) -> Self;

    /// Solve the program to optimality, or report why that failed.
    fn solve(&self, program: &LinearProgram) -> Result<LpSolution, SolverError>;
}

/// A non-optimal termination of the LP backend.
///
/// Given that every variable in a well-formed market program is bounded and
/// the all-zero point is feasible, infeasible or unbounded terminations
/// indicate a configuration error, not a transient condition: callers should
/// surface them, never retry.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The backend reported primal infeasibility
    #[error("solver reported the program infeasible")]
    Infeasible,

    /// The backend reported dual infeasibility (an unbounded program)
    #[error("solver reported the program unbounded")]
    Unbounded,

    /// The backend failed numerically or terminated abnormally
    #[error("solver failed: {0}")]
    Numerical(String),
}
