/// Inclusive bounds for one decision variable.
///
/// Every variable in the market program is individually bounded: dispatch
/// and served quantities by the posted capacities, storage flows by their
/// power caps, state of charge by the energy capacity. Both bounds are
/// always finite, which is what makes the program feasible (the all-zero
/// point) and bounded for any valid catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bound {
    /// The smallest admissible value
    pub lower: f64,
    /// The largest admissible value
    pub upper: f64,
}

/// A linear equality constraint, `Σ coefficient · x[variable] = rhs`.
///
/// Terms are stored in ascending variable order so backends can assemble
/// sparse matrices without re-sorting.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EqualityConstraint {
    /// The (variable index, coefficient) pairs with non-zero coefficients
    pub terms: Vec<(usize, f64)>,
    /// The constant right-hand side
    pub rhs: f64,
}

/// An immutable description of a linear program with a maximize sense.
///
/// The model builder returns this value object whole; backends consume it
/// without mutating it. There is no accumulate-then-update staging: the
/// program either exists in full or not at all.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearProgram {
    /// Per-variable bounds; the length of this vector defines the variable count
    pub bounds: Vec<Bound>,
    /// Per-variable objective coefficients, to be maximized
    pub objective: Vec<f64>,
    /// The equality constraints
    pub constraints: Vec<EqualityConstraint>,
}

impl LinearProgram {
    /// The number of decision variables.
    pub fn num_variables(&self) -> usize {
        self.bounds.len()
    }

    /// The number of equality constraints.
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Evaluate the objective at the given point.
    pub fn objective_value(&self, primal: &[f64]) -> f64 {
        self.objective
            .iter()
            .zip(primal)
            .map(|(coefficient, value)| coefficient * value)
            .sum()
    }
}

/// The values an LP backend reports for an optimal solve.
///
/// `dual` carries one entry per equality constraint, in constraint order;
/// for the power balance rows these duals are the market-clearing prices.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LpSolution {
    /// The optimal value of each variable, in variable order
    pub primal: Vec<f64>,
    /// The dual value of each equality constraint, in constraint order
    pub dual: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn objective_evaluation() {
        let program = LinearProgram {
            bounds: vec![
                Bound {
                    lower: 0.0,
                    upper: 1.0,
                },
                Bound {
                    lower: 0.0,
                    upper: 2.0,
                },
            ],
            objective: vec![3.0, -2.0],
            constraints: vec![],
        };

        assert_eq!(program.num_variables(), 2);
        assert_eq!(program.objective_value(&[1.0, 2.0]), -1.0);
    }
}
