// ============================================================
// Layer 5 — Scorer
// ============================================================
// Computes the credit-weighted grade-point average and the range
// shown to the user:
//
//   weighted_sum = Σ points(grade) × credit
//   average      = round(weighted_sum / total_credits, 2)
//   lower_bound  = max(0, round(average - 0.5, 2))
//
// The 0.5 offset is a fixed product heuristic for the uncertainty
// in how letter grades turn into final marks; it is not derived
// from the data.
//
// Rounding is half-up (midpoint away from zero) on exact decimals,
// so an exact x.xx5 always rounds up and binary float noise never
// decides the second decimal.
//
// Reference: rust_decimal crate documentation

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::error::CgpaError;
use crate::domain::grade::GradeSelection;
use crate::domain::score::ScoreResult;

/// Distance between the average and the bottom of the shown range
pub const RANGE_OFFSET: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Decimal places kept in the average and the bound
const SCORE_DP: u32 = 2;

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(SCORE_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Score a set of selections against the document's total credits.
///
/// `total_credits` is passed in rather than summed from `selections`
/// because it is the total of the detected courses, which the caller
/// already has. Fails without dividing when it is not positive.
pub fn score(selections: &[GradeSelection], total_credits: Decimal) -> Result<ScoreResult, CgpaError> {
    if total_credits <= Decimal::ZERO {
        return Err(CgpaError::ZeroCredits { total: total_credits });
    }

    let weighted_sum: Decimal = selections.iter().map(GradeSelection::weighted_points).sum();

    let average     = round2(weighted_sum / total_credits);
    let lower_bound = round2(average - RANGE_OFFSET).max(Decimal::ZERO);

    tracing::debug!(
        "Scored {} selections: weighted_sum={}, total_credits={}, average={}",
        selections.len(),
        weighted_sum,
        total_credits,
        average,
    );

    Ok(ScoreResult { average_points: average, lower_bound })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::grade::GradeSymbol;

    fn credits(n: i64) -> Decimal {
        Decimal::new(n * 100, 2)
    }

    #[test]
    fn test_weighted_average_and_range() {
        // 3*10 + 4*8 = 62, 62 / 7 = 8.857...
        let sel = vec![
            GradeSelection::new(credits(3), GradeSymbol::A),
            GradeSelection::new(credits(4), GradeSymbol::B),
        ];
        let r = score(&sel, credits(7)).unwrap();
        assert_eq!(r.average_points, Decimal::new(886, 2));
        assert_eq!(r.lower_bound, Decimal::new(836, 2));
    }

    #[test]
    fn test_lower_bound_clamps_at_zero() {
        let sel = vec![GradeSelection::new(credits(3), GradeSymbol::F)];
        let r = score(&sel, credits(3)).unwrap();
        assert_eq!(r.average_points, Decimal::ZERO);
        assert_eq!(r.lower_bound, Decimal::ZERO);
    }

    #[test]
    fn test_average_below_half_point_clamps() {
        // 2 credits of E (2 points) over 10 credits = 0.40
        let sel = vec![GradeSelection::new(credits(2), GradeSymbol::E)];
        let r = score(&sel, credits(10)).unwrap();
        assert_eq!(r.average_points, Decimal::new(40, 2));
        assert_eq!(r.lower_bound, Decimal::ZERO);
    }

    #[test]
    fn test_zero_credits_is_refused() {
        let sel = vec![GradeSelection::new(Decimal::ZERO, GradeSymbol::A)];
        assert_eq!(
            score(&sel, Decimal::ZERO),
            Err(CgpaError::ZeroCredits { total: Decimal::ZERO })
        );
    }

    #[test]
    fn test_negative_credits_are_refused() {
        assert!(score(&[], Decimal::new(-100, 2)).is_err());
    }

    #[test]
    fn test_all_a_is_ten() {
        let sel = vec![
            GradeSelection::new(credits(3), GradeSymbol::A),
            GradeSelection::new(credits(4), GradeSymbol::A),
            GradeSelection::new(Decimal::new(150, 2), GradeSymbol::A),
        ];
        let r = score(&sel, Decimal::new(850, 2)).unwrap();
        assert_eq!(r.average_points, Decimal::new(1000, 2));
        assert_eq!(r.lower_bound, Decimal::new(950, 2));
    }

    #[test]
    fn test_midpoint_rounds_up() {
        // E (2 points) on 0.50 credits is 1.00 point-credit
        let sel = vec![GradeSelection::new(Decimal::new(50, 2), GradeSymbol::E)];
        let r = score(&sel, credits(8)).unwrap();
        // 1.00 / 8 = 0.125 -> 0.13
        assert_eq!(r.average_points, Decimal::new(13, 2));
    }

    #[test]
    fn test_range_offset_is_half_point() {
        assert_eq!(RANGE_OFFSET, Decimal::new(5, 1));
    }
}
