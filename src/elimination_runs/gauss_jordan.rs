use super::elimination_run::EliminationRun;
use crate::row_reduction::matrix::AugmentedMatrix;
use crate::row_reduction::row_ops::{
    eliminate_entry, normalize_pivot_row, swap_in_nonzero_pivot,
};
use crate::row_reduction::snapshot::{StepRecorder, StepSnapshot};

/// Full reduction: eliminates above and below each pivot, terminating in
/// reduced row-echelon form, so a unique solution can be read straight off
/// the constants column.
///
/// Normalization here is unconditional: a dead pivot column turns its row
/// non-finite instead of being skipped, and the classifier reads the
/// degenerate result downstream.
pub struct GaussJordan {
    matrix: AugmentedMatrix,
    steps: StepRecorder,
}

impl GaussJordan {
    pub fn new(matrix: AugmentedMatrix) -> Self {
        Self {
            matrix,
            steps: StepRecorder::new(),
        }
    }
}

impl EliminationRun for GaussJordan {
    fn eliminate(&mut self) {
        let n = self.matrix.unknowns();
        for column in 0..n {
            if let Some(swapped_in) = swap_in_nonzero_pivot(&mut self.matrix, column) {
                log::debug!("column {column}: swapped in pivot row {swapped_in}");
            }
            normalize_pivot_row(&mut self.matrix, column, &mut self.steps);
            for target in 0..n {
                if target != column {
                    eliminate_entry(&mut self.matrix, column, target, &mut self.steps);
                }
            }
        }
    }

    fn matrix(&self) -> &AugmentedMatrix {
        &self.matrix
    }

    fn resolve_unique_solution(&mut self) -> Option<Vec<f64>> {
        // the reduced form leaves each variable's value in the constants
        // column of its own row
        let n = self.matrix.unknowns();
        Some((0..n).map(|i| self.matrix.rows[i][n]).collect())
    }

    fn into_steps(self) -> Vec<StepSnapshot> {
        self.steps.into_snapshots()
    }
}
