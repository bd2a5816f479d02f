use super::elimination_run::EliminationRun;
use crate::row_reduction::backwards_substitution::BackwardsSubstitution;
use crate::row_reduction::matrix::AugmentedMatrix;
use crate::row_reduction::row_ops::{
    eliminate_entry, normalize_pivot_row_guarded, swap_in_nonzero_pivot,
};
use crate::row_reduction::snapshot::{StepRecorder, StepSnapshot};

/// Forward elimination: drives the matrix to row-echelon form, eliminating
/// only below each pivot. The solution is recovered afterwards by
/// backwards substitution.
pub struct GaussElimination {
    matrix: AugmentedMatrix,
    steps: StepRecorder,
}

impl GaussElimination {
    pub fn new(matrix: AugmentedMatrix) -> Self {
        Self {
            matrix,
            steps: StepRecorder::new(),
        }
    }
}

impl EliminationRun for GaussElimination {
    fn eliminate(&mut self) {
        let n = self.matrix.unknowns();
        for column in 0..n {
            if let Some(swapped_in) = swap_in_nonzero_pivot(&mut self.matrix, column) {
                log::debug!("column {column}: swapped in pivot row {swapped_in}");
            }
            normalize_pivot_row_guarded(&mut self.matrix, column, &mut self.steps);
            for target in column + 1..n {
                eliminate_entry(&mut self.matrix, column, target, &mut self.steps);
            }
        }
    }

    fn matrix(&self) -> &AugmentedMatrix {
        &self.matrix
    }

    fn resolve_unique_solution(&mut self) -> Option<Vec<f64>> {
        let mut solver = BackwardsSubstitution::zero(self.matrix.unknowns());
        solver.solve(&mut self.matrix)?;
        Some(solver.solution)
    }

    fn into_steps(self) -> Vec<StepSnapshot> {
        self.steps.into_snapshots()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row_reduction::classification::{classify, SolutionType};
    use crate::row_reduction::snapshot::StepAction;

    fn eliminated(rows: Vec<Vec<f64>>) -> GaussElimination {
        let matrix = AugmentedMatrix::from_rows(rows).unwrap();
        let mut run = GaussElimination::new(matrix);
        run.eliminate();
        run
    }

    #[test]
    fn solves_two_by_two_system() {
        // 2x + y = 5, x - y = -1
        let mut run = eliminated(vec![vec![2.0, 1.0, 5.0], vec![1.0, -1.0, -1.0]]);
        assert_eq!(classify(run.matrix()), SolutionType::Unique);
        let x = run.resolve_unique_solution().unwrap();
        assert!((x[0] - 4.0 / 3.0).abs() < 1e-6);
        assert!((x[1] - 7.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn solves_single_equation() {
        let mut run = eliminated(vec![vec![5.0, 10.0]]);
        assert_eq!(classify(run.matrix()), SolutionType::Unique);
        assert_eq!(run.resolve_unique_solution().unwrap(), vec![2.0]);
    }

    #[test]
    fn swaps_rows_to_find_a_pivot() {
        // x2 = 3, 2*x1 = 4
        let mut run = eliminated(vec![vec![0.0, 1.0, 3.0], vec![2.0, 0.0, 4.0]]);
        let x = run.resolve_unique_solution().unwrap();
        assert!((x[0] - 2.0).abs() < 1e-6);
        assert!((x[1] - 3.0).abs() < 1e-6);
    }

    #[test]
    fn dependent_rows_classify_infinite() {
        let run = eliminated(vec![vec![1.0, 1.0, 2.0], vec![2.0, 2.0, 4.0]]);
        assert_eq!(classify(run.matrix()), SolutionType::Infinite);
    }

    #[test]
    fn inconsistent_row_classifies_no_solution() {
        let run = eliminated(vec![vec![0.0, 0.0, 5.0], vec![1.0, 1.0, 2.0]]);
        assert_eq!(classify(run.matrix()), SolutionType::NoSolution);
    }

    #[test]
    fn records_every_step_including_skipped_normalizations() {
        // second column has no workable pivot, its normalization is a no-op
        // but still shows up in the stream
        let run = eliminated(vec![vec![0.0, 0.0, 5.0], vec![1.0, 1.0, 2.0]]);
        let steps = run.into_steps();
        let actions: Vec<StepAction> = steps.iter().map(|s| s.action).collect();
        assert_eq!(
            actions,
            vec![
                StepAction::NormalizePivotRow { row: 0 },
                StepAction::EliminateRow { row: 1 },
                StepAction::NormalizePivotRow { row: 1 },
            ]
        );
        for (idx, snapshot) in steps.iter().enumerate() {
            assert_eq!(snapshot.step, idx + 1);
        }
    }
}
