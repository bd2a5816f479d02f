use std::time::Instant;

use super::elimination_run::EliminationRun;
use super::gauss::GaussElimination;
use super::gauss_jordan::GaussJordan;
use super::method::Method;
use super::outcome::SolveOutcome;
use crate::row_reduction::classification::{classify, SolutionType};
use crate::row_reduction::matrix::AugmentedMatrix;

/// Picks the eliminator matching the requested method and runs it to a
/// classified outcome.
pub struct EliminationRunBuilder {
    method: Method,
}

impl EliminationRunBuilder {
    pub fn new(method: Method) -> Self {
        Self { method }
    }

    pub fn run(self, matrix: AugmentedMatrix) -> SolveOutcome {
        log::debug!(
            "running {:?} on {} equations",
            self.method,
            matrix.unknowns()
        );
        match self.method {
            Method::GaussElimination => finish(GaussElimination::new(matrix)),
            Method::GaussJordan => finish(GaussJordan::new(matrix)),
        }
    }
}

fn finish<R: EliminationRun>(mut run: R) -> SolveOutcome {
    let start = Instant::now();
    run.eliminate();
    // capture the terminal form before backwards substitution reworks the
    // constants column
    let matrix = run.matrix().clone();
    let classification = classify(&matrix);
    let solution = match classification {
        SolutionType::Unique => run.resolve_unique_solution(),
        _ => None,
    };
    log::debug!("elimination finished in {:#?}", start.elapsed());
    SolveOutcome {
        matrix,
        steps: run.into_steps(),
        classification,
        solution,
    }
}
