use super::matrix::AugmentedMatrix;
use super::snapshot::{StepAction, StepRecorder};
use super::EPSILON;

/// Partial pivoting for `column`: when the diagonal entry is too small to
/// divide by, swap in the first row below it with a workable entry in that
/// column. Returns the index of the row that was swapped in, if any.
///
/// A column with no workable pivot is left untouched; the classifier reads
/// the resulting dead row later.
pub fn swap_in_nonzero_pivot(matrix: &mut AugmentedMatrix, column: usize) -> Option<usize> {
    if matrix.rows[column][column].abs() >= EPSILON {
        return None;
    }
    let n = matrix.unknowns();
    for candidate in column + 1..n {
        if matrix.rows[candidate][column].abs() > EPSILON {
            matrix.swap_rows(column, candidate);
            return Some(candidate);
        }
    }
    None
}

/// Divide row `row` through by its diagonal entry, skipping the division
/// when the pivot is below the tolerance. The step is recorded either way,
/// so every run emits the same stream of labeled snapshots.
pub fn normalize_pivot_row_guarded(
    matrix: &mut AugmentedMatrix,
    row: usize,
    steps: &mut StepRecorder,
) {
    let pivot = matrix.rows[row][row];
    if pivot.abs() > EPSILON {
        divide_row_by_pivot(matrix, row, pivot);
    }
    steps.record(StepAction::NormalizePivotRow { row }, matrix);
}

/// Unguarded variant: divides even by a (near-)zero pivot. A dead pivot
/// turns the row non-finite; such entries never pass the classifier's
/// magnitude checks, so the row drops out of the rank count.
pub fn normalize_pivot_row(matrix: &mut AugmentedMatrix, row: usize, steps: &mut StepRecorder) {
    let pivot = matrix.rows[row][row];
    divide_row_by_pivot(matrix, row, pivot);
    steps.record(StepAction::NormalizePivotRow { row }, matrix);
}

fn divide_row_by_pivot(matrix: &mut AugmentedMatrix, row: usize, pivot: f64) {
    let constants = matrix.unknowns();
    for j in row..=constants {
        matrix.rows[row][j] /= pivot;
    }
}

/// Subtract `factor` times the pivot row from the target row, where
/// `factor` is the target's entry in the pivot column. Zeroes that entry;
/// columns left of the pivot are already eliminated and stay untouched.
pub fn eliminate_entry(
    matrix: &mut AugmentedMatrix,
    pivot_row: usize,
    target_row: usize,
    steps: &mut StepRecorder,
) {
    let factor = matrix.rows[target_row][pivot_row];
    let constants = matrix.unknowns();
    for j in pivot_row..=constants {
        let pivot_val = matrix.rows[pivot_row][j];
        matrix.rows[target_row][j] -= factor * pivot_val;
    }
    steps.record(StepAction::EliminateRow { row: target_row }, matrix);
}
