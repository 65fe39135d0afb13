//! Error taxonomy for the diagnostic core
//!
//! The taxonomy is narrow because the core is pure computation: errors can
//! only arise at the recording/lookup boundary. All aggregate computations
//! are total functions and raise nothing.

use thiserror::Error;

/// Errors raised at the boundary between the UI collaborator and the core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An answer outside the 1..=4 Likert scale was submitted.
    /// Collaborators surface this as a form-validation failure.
    #[error("invalid answer value {0}: must be one of 1, 2, 3, 4")]
    InvalidAnswerValue(u8),

    /// Catalog lookup with an axis name the catalog does not contain.
    /// A programming error when keys come from the catalog itself.
    #[error("unknown axis: {0}")]
    UnknownAxis(String),

    /// Question position outside the axis's 1-based question range.
    #[error("unknown question {position} in axis {axis}")]
    UnknownQuestion { axis: String, position: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::InvalidAnswerValue(7).to_string(),
            "invalid answer value 7: must be one of 1, 2, 3, 4"
        );
        assert_eq!(
            Error::UnknownAxis("存在しない軸".to_string()).to_string(),
            "unknown axis: 存在しない軸"
        );
        assert_eq!(
            Error::UnknownQuestion {
                axis: "経営ビジョンの明確さ".to_string(),
                position: 9,
            }
            .to_string(),
            "unknown question 9 in axis 経営ビジョンの明確さ"
        );
    }
}
