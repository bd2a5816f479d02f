use super::matrix::AugmentedMatrix;
use std::fmt;

/// What a single elimination step did to the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    NormalizePivotRow { row: usize },
    EliminateRow { row: usize },
}

impl fmt::Display for StepAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // rows are 1-based in user-facing labels
        match self {
            Self::NormalizePivotRow { row } => write!(f, "normalizing pivot row {}", row + 1),
            Self::EliminateRow { row } => write!(f, "eliminating row {}", row + 1),
        }
    }
}

/// Labeled copy of the matrix taken right after one normalization or
/// elimination action.
#[derive(Debug, Clone)]
pub struct StepSnapshot {
    pub step: usize,
    pub action: StepAction,
    pub matrix: AugmentedMatrix,
}

impl StepSnapshot {
    pub fn title(&self) -> String {
        format!("After {} (Step {})", self.action, self.step)
    }
}

/// Accumulates the ordered snapshot stream of one elimination run.
/// Step numbers start at 1 and increase by one per recorded action.
pub struct StepRecorder {
    next_step: usize,
    snapshots: Vec<StepSnapshot>,
}

impl StepRecorder {
    pub fn new() -> Self {
        Self {
            next_step: 1,
            snapshots: Vec::new(),
        }
    }

    pub fn record(&mut self, action: StepAction, matrix: &AugmentedMatrix) {
        self.snapshots.push(StepSnapshot {
            step: self.next_step,
            action,
            matrix: matrix.clone(),
        });
        self.next_step += 1;
    }

    pub fn into_snapshots(self) -> Vec<StepSnapshot> {
        self.snapshots
    }
}

impl Default for StepRecorder {
    fn default() -> Self {
        Self::new()
    }
}
