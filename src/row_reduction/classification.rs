use super::matrix::AugmentedMatrix;
use super::EPSILON;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionType {
    Unique,
    Infinite,
    NoSolution,
}

/// Classify the terminal matrix of an elimination run.
///
/// An inconsistent row (dead coefficients, live constant) wins over rank
/// deficiency, so the checks run in that order.
pub fn classify(matrix: &AugmentedMatrix) -> SolutionType {
    let n = matrix.unknowns();
    for row in &matrix.rows {
        let coefficients_dead = row[..n].iter().all(|c| c.abs() < EPSILON);
        if coefficients_dead && row[n].abs() > EPSILON {
            return SolutionType::NoSolution;
        }
    }
    let rank = matrix
        .rows
        .iter()
        .filter(|row| row[..n].iter().any(|c| c.abs() > EPSILON))
        .count();
    if rank < n {
        SolutionType::Infinite
    } else {
        SolutionType::Unique
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_rows(rows: Vec<Vec<f64>>) -> SolutionType {
        classify(&AugmentedMatrix::from_rows(rows).unwrap())
    }

    #[test]
    fn inconsistent_zero_row_means_no_solution() {
        let class = classify_rows(vec![vec![0.0, 0.0, 5.0], vec![1.0, 1.0, 2.0]]);
        assert_eq!(class, SolutionType::NoSolution);
    }

    #[test]
    fn rank_deficiency_with_consistent_rows_means_infinite() {
        let class = classify_rows(vec![vec![1.0, 1.0, 2.0], vec![0.0, 0.0, 0.0]]);
        assert_eq!(class, SolutionType::Infinite);
    }

    #[test]
    fn full_rank_means_unique() {
        let class = classify_rows(vec![vec![1.0, 0.0, 1.0], vec![0.0, 1.0, 2.0]]);
        assert_eq!(class, SolutionType::Unique);
    }

    #[test]
    fn inconsistency_wins_over_rank_deficiency() {
        let class = classify_rows(vec![vec![0.0, 0.0, 5.0], vec![0.0, 0.0, 0.0]]);
        assert_eq!(class, SolutionType::NoSolution);
    }
}
