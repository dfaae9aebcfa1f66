//! Settlement of a single combination.

use rust_decimal::Decimal;
use tracing::warn;

use crate::types::{Combination, Outcome};

/// Signed net result of a combination staked at `stake`.
///
/// Pending and all-draw combinations settle at 0; a loss costs the
/// stake; a win pays `stake * total_odds - stake` (profit, not return).
pub fn settle(combination: &Combination, stake: Decimal) -> Decimal {
    match combination.outcome {
        Outcome::Pending => Decimal::ZERO,
        _ if combination.is_void() => Decimal::ZERO,
        Outcome::Lost => -stake,
        Outcome::Won => match stake.checked_mul(combination.total_odds) {
            Some(gross) => gross - stake,
            None => {
                warn!(
                    teams = %combination.team_names(", "),
                    stake = %stake,
                    "Payout overflow, saturating"
                );
                Decimal::MAX
            }
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
