use clarabel::algebra::*;
use clarabel::solver::*;
use smc_core::models::{LinearProgram, LpSolution};
use smc_core::ports::{LpSolver, SolverError};
use tracing::{Level, event};

/// A backend using the Clarabel interior-point solver.
///
/// Clarabel is a conic solver; a linear program with equality constraints
/// and box bounds maps onto a zero cone plus a nonnegative cone, and the
/// dual values of the zero-cone rows are exactly the constraint duals the
/// result extractor needs for pricing.
pub struct ClarabelSolver(DefaultSettings<f64>);

impl Default for ClarabelSolver {
    fn default() -> Self {
        let mut settings = DefaultSettings::default();
        settings.verbose = false;
        Self(settings)
    }
}

impl LpSolver for ClarabelSolver {
    type Settings = DefaultSettings<f64>;

    fn new(settings: Self::Settings) -> Self {
        Self(settings)
    }

    fn solve(&self, program: &LinearProgram) -> Result<LpSolution, SolverError> {
        let n = program.num_variables();
        let neq = program.num_constraints();

        // Nothing to dispatch: the zero program is trivially optimal, with a
        // zero dual on every (empty) constraint.
        if n == 0 {
            return Ok(LpSolution {
                primal: Vec::new(),
                dual: vec![0.0; neq],
            });
        }

        // Clarabel minimizes, so the maximize-sense objective is negated.
        let q: Vec<f64> = program.objective.iter().map(|c| -c).collect();

        // Clarabel handles constraints via a cone specification, Ax + s = b
        // with s constrained to a cone. The first `neq` rows are the equality
        // constraints (s = 0); every variable then contributes two
        // nonnegative-cone rows for its box bounds, at neq + 2j and
        // neq + 2j + 1:
        //   lower ≤ x  ⇒  −x + s = −lower, s ≥ 0
        //   x ≤ upper  ⇒   x + s =  upper, s ≥ 0
        let mut b = Vec::with_capacity(neq + 2 * n);
        b.extend(program.constraints.iter().map(|constraint| constraint.rhs));
        for bound in &program.bounds {
            b.push(-bound.lower);
            b.push(bound.upper);
        }

        // Clarabel's matrix input is in the form of CSC, so we handle the
        // memory representation carefully. The fixed row positions of the
        // bound rows keep every column sorted without bookkeeping.
        let mut a_colptr = Vec::with_capacity(n + 1);
        let mut a_rowval = Vec::new();
        let mut a_nzval = Vec::new();

        for (j, column) in super::columnize(program).into_iter().enumerate() {
            a_colptr.push(a_nzval.len());
            for (row, coefficient) in column {
                a_rowval.push(row);
                a_nzval.push(coefficient);
            }
            a_rowval.push(neq + 2 * j);
            a_nzval.push(-1.0);
            a_rowval.push(neq + 2 * j + 1);
            a_nzval.push(1.0);
        }
        a_colptr.push(a_nzval.len());

        let a_matrix = CscMatrix {
            m: b.len(),
            n,
            colptr: a_colptr,
            rowval: a_rowval,
            nzval: a_nzval,
        };

        // A pure LP: the quadratic term is empty.
        let p_matrix = CscMatrix {
            m: n,
            n,
            colptr: vec![0; n + 1],
            rowval: Vec::new(),
            nzval: Vec::new(),
        };

        let cones = [ZeroConeT(neq), NonnegativeConeT(2 * n)];

        let mut solver = DefaultSolver::new(&p_matrix, &q, &a_matrix, &b, &cones, self.0.clone());
        solver.solve();

        event!(
            Level::DEBUG,
            status = ?solver.solution.status,
            "clarabel terminated"
        );

        match solver.solution.status {
            SolverStatus::Solved => Ok(LpSolution {
                primal: solver.solution.x.clone(),
                dual: solver.solution.z[..neq].to_vec(),
            }),
            SolverStatus::PrimalInfeasible | SolverStatus::AlmostPrimalInfeasible => {
                Err(SolverError::Infeasible)
            }
            SolverStatus::DualInfeasible | SolverStatus::AlmostDualInfeasible => {
                Err(SolverError::Unbounded)
            }
            status => Err(SolverError::Numerical(format!("{status:?}"))),
        }
    }
}
