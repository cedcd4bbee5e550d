// ============================================================
// Layer 3 — Grade Scale
// ============================================================
// The ten letter grades and their fixed point values:
//
//   A  A-  B  B-  C  C-  D  D-  E  F
//   10  9  8  7   6  5   4  3   2  0
//
// The table is closed: a match on the enum is the whole mapping.
// A is the first value and the default for a course the user
// has not picked a grade for yet.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::error::CgpaError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeSymbol {
    #[default]
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D-")]
    DMinus,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "F")]
    F,
}

impl GradeSymbol {
    /// Every grade, best first
    pub const ALL: [GradeSymbol; 10] = [
        GradeSymbol::A,
        GradeSymbol::AMinus,
        GradeSymbol::B,
        GradeSymbol::BMinus,
        GradeSymbol::C,
        GradeSymbol::CMinus,
        GradeSymbol::D,
        GradeSymbol::DMinus,
        GradeSymbol::E,
        GradeSymbol::F,
    ];

    /// Grade points for this symbol
    pub fn points(self) -> u8 {
        match self {
            GradeSymbol::A => 10,
            GradeSymbol::AMinus => 9,
            GradeSymbol::B => 8,
            GradeSymbol::BMinus => 7,
            GradeSymbol::C => 6,
            GradeSymbol::CMinus => 5,
            GradeSymbol::D => 4,
            GradeSymbol::DMinus => 3,
            GradeSymbol::E => 2,
            GradeSymbol::F => 0,
        }
    }

    /// The symbol as printed on a transcript
    pub fn symbol(self) -> &'static str {
        match self {
            GradeSymbol::A => "A",
            GradeSymbol::AMinus => "A-",
            GradeSymbol::B => "B",
            GradeSymbol::BMinus => "B-",
            GradeSymbol::C => "C",
            GradeSymbol::CMinus => "C-",
            GradeSymbol::D => "D",
            GradeSymbol::DMinus => "D-",
            GradeSymbol::E => "E",
            GradeSymbol::F => "F",
        }
    }
}

impl fmt::Display for GradeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Accepts the printed symbol, ignoring case and surrounding spaces.
impl FromStr for GradeSymbol {
    type Err = CgpaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        GradeSymbol::ALL
            .into_iter()
            .find(|g| g.symbol() == wanted)
            .ok_or_else(|| CgpaError::UnknownGrade(s.trim().to_string()))
    }
}

/// The grade the user expects for one course, paired with that course's credit.
/// Lives only for one scoring pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeSelection {
    pub credit: Decimal,
    pub grade: GradeSymbol,
}

impl GradeSelection {
    pub fn new(credit: Decimal, grade: GradeSymbol) -> Self {
        Self { credit, grade }
    }

    /// points × credit
    pub fn weighted_points(&self) -> Decimal {
        Decimal::from(self.grade.points()) * self.credit
    }
}
