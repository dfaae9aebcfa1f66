//! Combined odds of a combination.

use rust_decimal::Decimal;
use tracing::warn;

use crate::types::TeamEntry;

/// Product of the decimal odds of every non-draw leg.
///
/// Draws are left out of the product. Unparsable or non-positive odds
/// count as 1. The result does not depend on whether the combination is
/// settled. Saturates at `Decimal::MAX` on overflow.
pub fn combined_odds(subset: &[TeamEntry]) -> Decimal {
    let mut total = Decimal::ONE;
    for team in subset.iter().filter(|t| !t.is_draw()) {
        total = match total.checked_mul(team.decimal_odds()) {
            Some(v) => v,
            None => {
                warn!(team = %team.name, odds = %team.odds, "Combined odds overflow, saturating");
                return Decimal::MAX;
            }
        };
    }
    total
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
