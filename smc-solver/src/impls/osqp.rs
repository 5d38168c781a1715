use osqp::{CscMatrix, Problem, Settings, Status};
use smc_core::models::{LinearProgram, LpSolution};
use smc_core::ports::{LpSolver, SolverError};

/// A backend using the OSQP (Operator Splitting Quadratic Program) solver.
///
/// OSQP uses the Alternating Direction Method of Multipliers (ADMM)
/// approach, which can be faster than interior point methods for large-scale
/// problems, though sometimes with lower precision. Polishing is enabled and
/// the tolerances tightened so the reported balance duals are accurate
/// enough to serve as clearing prices.
pub struct OsqpSolver(Settings);

impl Default for OsqpSolver {
    fn default() -> Self {
        Self(
            Settings::default()
                .verbose(false)
                .polish(true)
                .max_iter(20_000)
                .eps_abs(1e-6)
                .eps_rel(1e-6),
        )
    }
}

impl LpSolver for OsqpSolver {
    type Settings = Settings;

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

        // OSQP minimizes, so the maximize-sense objective is negated.
        let q: Vec<f64> = program.objective.iter().map(|c| -c).collect();

        // OSQP handles constraints via a box specification, lb ≤ Ax ≤ ub,
        // where equality is handled by setting lb[i] = ub[i]. The first
        // `neq` rows are the equality constraints; an identity block at rows
        // neq + j then carries the variable bounds.
        let mut lb = Vec::with_capacity(neq + n);
        let mut ub = Vec::with_capacity(neq + n);
        for constraint in &program.constraints {
            lb.push(constraint.rhs);
            ub.push(constraint.rhs);
        }
        for bound in &program.bounds {
            lb.push(bound.lower);
            ub.push(bound.upper);
        }

        let mut a_colptr = Vec::with_capacity(n + 1);
        let mut a_rowval = Vec::new();
        let mut a_nzval = Vec::new();

        for (j, column) in super::columnize(program).into_iter().enumerate() {
            a_colptr.push(a_nzval.len());
            for (row, coefficient) in column {
                a_rowval.push(row);
                a_nzval.push(coefficient);
            }
            a_rowval.push(neq + j);
            a_nzval.push(1.0);
        }
        a_colptr.push(a_nzval.len());

        let a_matrix = CscMatrix {
            nrows: neq + n,
            ncols: n,
            indptr: a_colptr.into(),
            indices: a_rowval.into(),
            data: a_nzval.into(),
        };

        // A pure LP: the quadratic term is empty.
        let p_matrix = CscMatrix {
            nrows: n,
            ncols: n,
            indptr: vec![0; n + 1].into(),
            indices: Vec::new().into(),
            data: Vec::new().into(),
        };

        let mut problem = Problem::new(&p_matrix, &q, &a_matrix, &lb, &ub, &self.0)
            .map_err(|error| SolverError::Numerical(format!("{error:?}")))?;

        // The all-zero point is always feasible for a market program.
        problem.warm_start_x(&vec![0.0; n]);

        match problem.solve() {
            Status::Solved(solution) => Ok(LpSolution {
                primal: solution.x().to_vec(),
                dual: solution.y()[..neq].to_vec(),
            }),
            Status::PrimalInfeasible(..) | Status::PrimalInfeasibleInaccurate(..) => {
                Err(SolverError::Infeasible)
            }
            Status::DualInfeasible(..) | Status::DualInfeasibleInaccurate(..) => {
                Err(SolverError::Unbounded)
            }
            _ => Err(SolverError::Numerical(
                "osqp terminated without an optimal solution".to_owned(),
            )),
        }
    }
}
