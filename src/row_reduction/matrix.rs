use anyhow::{ensure, Result};
use itertools::Itertools;
use std::fmt;

/// Dense augmented matrix: n equation rows, each holding n coefficients
/// followed by the constant term.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix {
    pub number_of_columns: usize,
    pub rows: Vec<Vec<f64>>,
}

impl AugmentedMatrix {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        ensure!(
            !rows.is_empty(),
            "an augmented matrix needs at least one equation"
        );
        let number_of_columns = rows.len() + 1;
        for (idx, row) in rows.iter().enumerate() {
            ensure!(
                row.len() == number_of_columns,
                "row {} has {} entries, expected {} (coefficients + constant)",
                idx + 1,
                row.len(),
                number_of_columns
            );
        }
        Ok(Self {
            number_of_columns,
            rows,
        })
    }

    // number of unknowns; doubles as the index of the constants column
    pub fn unknowns(&self) -> usize {
        self.number_of_columns - 1
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }
}

impl fmt::Display for AugmentedMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .rows
            .iter()
            .map(|row| row.iter().map(|entry| format!("{entry:8.4}")).join("  "))
            .join("\n");
        write!(f, "{rendered}")
    }
}
