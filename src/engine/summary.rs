//! Summary aggregator — folds settled combinations into totals.

use rust_decimal::Decimal;
use tracing::debug;

use crate::strategy::settlement::settle;
use crate::types::{Combination, Outcome, Summary};

/// Aggregate all combinations for a given total risk.
///
/// The risk is split evenly; with no combinations the divisor is 1, so
/// the per-combination risk is the whole risk and every total is 0.
pub fn summarize(combinations: &[Combination], total_risk: Decimal) -> Summary {
    let total_combinations = combinations.len();
    let per_combination_risk = total_risk / Decimal::from(total_combinations.max(1));

    let mut summary = Summary {
        total_combinations,
        per_combination_risk,
        ..Summary::default()
    };

    for combination in combinations {
        match combination.outcome {
            Outcome::Won => summary.winning_combinations += 1,
            Outcome::Lost => summary.losing_combinations += 1,
            Outcome::Pending => summary.pending_combinations += 1,
        }

        let result = settle(combination, per_combination_risk);
        if result > Decimal::ZERO {
            summary.total_win = summary.total_win.saturating_add(result);
        } else if result < Decimal::ZERO {
            summary.total_loss = summary.total_loss.saturating_add(-result);
        }
    }

    summary.net_result = summary.total_win - summary.total_loss;

    debug!(
        combinations = total_combinations,
        won = summary.winning_combinations,
        lost = summary.losing_combinations,
        pending = summary.pending_combinations,
        net = %summary.net_result,
        "Summary computed"
    );

    summary
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
