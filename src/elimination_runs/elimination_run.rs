use crate::row_reduction::matrix::AugmentedMatrix;
use crate::row_reduction::snapshot::StepSnapshot;

/// One elimination pass over an owned augmented matrix.
///
/// `eliminate` drives the matrix to the method's terminal form, recording a
/// snapshot per action. `resolve_unique_solution` is asked only once the
/// terminal matrix has classified as unique; how the vector is extracted
/// differs per method (backwards substitution vs reading the constants
/// column off the reduced form).
pub trait EliminationRun {
    fn eliminate(&mut self);
    fn matrix(&self) -> &AugmentedMatrix;
    fn resolve_unique_solution(&mut self) -> Option<Vec<f64>>;
    fn into_steps(self) -> Vec<StepSnapshot>;
}
