/// Implementation using the Clarabel interior point solver
#[cfg(feature = "clarabel")]
pub mod clarabel;

/// Implementation using the OSQP operator splitting solver
#[cfg(feature = "osqp")]
pub mod osqp;

/// Collect the equality-constraint coefficients column-by-column.
///
/// The backends and the MPS exporter all consume the constraint matrix in
/// column order; iterating the rows in order leaves every column's entries
/// already sorted by row index.
pub(crate) fn columnize(program: &smc_core::models::LinearProgram) -> Vec<Vec<(usize, f64)>> {
    let mut columns = vec![Vec::new(); program.num_variables()];
    for (row, constraint) in program.constraints.iter().enumerate() {
        for &(variable, coefficient) in &constraint.terms {
            columns[variable].push((row, coefficient));
        }
    }
    columns
}
