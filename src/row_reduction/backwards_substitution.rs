use super::matrix::AugmentedMatrix;
use super::EPSILON;

pub struct BackwardsSubstitution {
    pub solution: Vec<f64>,
}

impl BackwardsSubstitution {
    pub fn zero(n: usize) -> Self {
        Self {
            solution: vec![0.0; n],
        }
    }

    /// Resolve variables bottom-up from a row-echelon matrix.
    ///
    /// Returns `None` when a diagonal entry is too small to divide by.
    /// Callers classify the system first and only ask for a solution when
    /// it is unique; the check here is a backstop.
    pub fn solve(&mut self, matrix: &mut AugmentedMatrix) -> Option<()> {
        let n = self.solution.len();
        let mut i = n;
        while i > 0 {
            i -= 1;
            if matrix.rows[i][i].abs() < EPSILON {
                return None;
            }
            self.solution[i] = matrix.rows[i][n] / matrix.rows[i][i];
            // fold the solved value into the constants above, so each
            // earlier row resolves against its own diagonal alone
            for j in 0..i {
                matrix.rows[j][n] -= matrix.rows[j][i] * self.solution[i];
            }
        }
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_a_row_echelon_system() {
        // echelon form of 2x + y = 5, x - y = -1
        let mut matrix = AugmentedMatrix::from_rows(vec![
            vec![1.0, 0.5, 2.5],
            vec![0.0, 1.0, 7.0 / 3.0],
        ])
        .unwrap();
        let mut solver = BackwardsSubstitution::zero(2);
        assert!(solver.solve(&mut matrix).is_some());
        assert!((solver.solution[0] - 4.0 / 3.0).abs() < 1e-9);
        assert!((solver.solution[1] - 7.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn signals_no_unique_solution_on_dead_diagonal() {
        let mut matrix =
            AugmentedMatrix::from_rows(vec![vec![1.0, 1.0, 2.0], vec![0.0, 0.0, 5.0]]).unwrap();
        let mut solver = BackwardsSubstitution::zero(2);
        assert!(solver.solve(&mut matrix).is_none());
    }
}
