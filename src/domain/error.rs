// ============================================================
// Layer 3 — Domain Errors
// ============================================================
// The conditions a user is told about. None of them is fatal:
// the CLI prints the message and is ready for the next document.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CgpaError {
    /// The extractor found no course rows in the document
    #[error(
        "Could not automatically detect subjects. \
         Please ensure the PDF is a valid 'Student Registration Record' text PDF."
    )]
    NoCoursesDetected,

    /// Scoring refused because the credits do not add up to anything
    #[error("Total credits cannot be zero.")]
    ZeroCredits { total: Decimal },

    /// A grade symbol outside the scale
    #[error("Unknown grade '{0}'. Expected one of: A, A-, B, B-, C, C-, D, D-, E, F")]
    UnknownGrade(String),
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_credits_message() {
        let err = CgpaError::ZeroCredits { total: Decimal::ZERO };
        assert_eq!(err.to_string(), "Total credits cannot be zero.");
    }
}
