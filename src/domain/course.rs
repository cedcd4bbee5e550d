// ============================================================
// Layer 3 — CourseRecord Domain Type
// ============================================================
// One course row detected in a registration document:
//
//   MEM601   Advanced Thermodynamics   4.00
//   ──┬───   ──────────┬────────────   ──┬─
//    code            name             credit
//
// Records are created by the extractor in the order the rows
// appear in the document and are never modified afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single enrolled course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Three uppercase letters followed by three digits, e.g. "MEM601"
    pub code: String,

    /// Course title as printed, trimmed
    pub name: String,

    /// Credit value, keeps the two fractional digits from the source ("3.00")
    pub credit: Decimal,
}

impl CourseRecord {
    pub fn new(code: impl Into<String>, name: impl Into<String>, credit: Decimal) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            credit,
        }
    }
}

/// Sum of the credit values of every course.
pub fn total_credits(courses: &[CourseRecord]) -> Decimal {
    courses.iter().map(|c| c.credit).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_credits() {
        let courses = vec![
            CourseRecord::new("MEM601", "Thermo", Decimal::new(400, 2)),
            CourseRecord::new("MEM602", "Fluids", Decimal::new(300, 2)),
        ];
        assert_eq!(total_credits(&courses), Decimal::new(700, 2));
    }

    #[test]
    fn test_total_credits_empty() {
        assert_eq!(total_credits(&[]), Decimal::ZERO);
    }
}
