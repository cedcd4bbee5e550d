// ============================================================
// Layer 3 — ScoreResult Domain Type
// ============================================================
// The advisory band shown to the user: [lower_bound, average].
// The upper edge is the exact weighted average, the lower edge
// sits a fixed half point below it and never goes below zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Credit-weighted average, rounded to two decimals
    pub average_points: Decimal,

    /// `average_points - 0.5`, clamped at zero
    pub lower_bound: Decimal,
}

impl ScoreResult {
    /// The line shown after a calculation
    pub fn message(&self) -> String {
        format!(
            "Your expected CGPA is in between {:.2} to {:.2}",
            self.lower_bound, self.average_points
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_uses_two_decimals() {
        let r = ScoreResult {
            average_points: Decimal::new(886, 2),
            lower_bound: Decimal::new(836, 2),
        };
        assert_eq!(r.message(), "Your expected CGPA is in between 8.36 to 8.86");
    }

    #[test]
    fn test_message_pads_zero() {
        let r = ScoreResult {
            average_points: Decimal::ZERO,
            lower_bound: Decimal::ZERO,
        };
        assert_eq!(r.message(), "Your expected CGPA is in between 0.00 to 0.00");
    }
}
