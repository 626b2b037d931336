//! Problem schema fixtures.

use resultforge_core::{ProblemSchema, VariableSpec};

/// Two real variables in `[0, 10]` and one objective.
pub fn two_reals_one_objective() -> ProblemSchema {
    ProblemSchema::new(1).with_variables([
        VariableSpec::real(0.0, 10.0),
        VariableSpec::real(0.0, 10.0),
    ])
}

/// One variable of each kind and two objectives.
///
/// Data lines with variables look like `0.5 1010 2,0,1 - 1.0 2.0`.
pub fn mixed() -> ProblemSchema {
    ProblemSchema::new(2).with_variables([
        VariableSpec::real(0.0, 1.0),
        VariableSpec::binary(4),
        VariableSpec::permutation(3),
        VariableSpec::opaque(),
    ])
}

/// A DTLZ-style schema: `variables` reals in `[0, 1]` and `objectives` objectives.
///
/// # Example
///
/// ```
/// use resultforge_test::schemas::dtlz;
///
/// let schema = dtlz(11, 2);
/// assert_eq!(schema.number_of_variables(), 11);
/// assert_eq!(schema.number_of_objectives(), 2);
/// ```
pub fn dtlz(variables: usize, objectives: usize) -> ProblemSchema {
    ProblemSchema::new(objectives)
        .with_variables(std::iter::repeat(VariableSpec::real(0.0, 1.0)).take(variables))
}
