use std::fmt;
use strum_macros::EnumIter;

/// Elimination method selectable by the caller. Variant order is the menu
/// order: choice 1 is Gauss, choice 2 is Gauss-Jordan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Method {
    GaussElimination,
    GaussJordan,
}

impl Method {
    pub fn final_form_title(&self) -> &'static str {
        match self {
            Self::GaussElimination => "Final Reduced Matrix (Row-Echelon Form)",
            Self::GaussJordan => "Final Reduced Matrix (RREF)",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GaussElimination => write!(f, "Gauss Elimination"),
            Self::GaussJordan => write!(f, "Gauss-Jordan"),
        }
    }
}
