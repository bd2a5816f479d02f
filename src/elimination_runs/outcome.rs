use crate::row_reduction::classification::SolutionType;
use crate::row_reduction::matrix::AugmentedMatrix;
use crate::row_reduction::snapshot::StepSnapshot;

/// Everything one elimination run hands back to its caller: the terminal
/// matrix (before any backwards substitution reworks the constants column),
/// the ordered snapshot stream, the classification, and the solution vector
/// when the system is unique.
pub struct SolveOutcome {
    pub matrix: AugmentedMatrix,
    pub steps: Vec<StepSnapshot>,
    pub classification: SolutionType,
    pub solution: Option<Vec<f64>>,
}
