//! Human-readable report for pasting into a chat or note.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::engine::RoundRobin;
use crate::types::Summary;

/// Round to cents.
fn cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn describe(amount: Decimal, currency: &str) -> Option<String> {
    let amount = cents(amount);
    if amount > Decimal::ZERO {
        Some(format!("a profit of {currency}{amount:.2}"))
    } else if amount < Decimal::ZERO {
        Some(format!("a loss of {currency}{:.2}", amount.abs()))
    } else {
        None
    }
}

/// One block per combination with its result, then a closing sentence
/// with the net result.
pub fn render(round_robin: &RoundRobin, currency: &str) -> String {
    let mut text = String::new();

    for (i, (combination, result)) in round_robin.results().enumerate() {
        text.push_str(&format!(
            "Combination {}, made up of picks: {},\n",
            i + 1,
            combination.team_names(", ")
        ));
        match describe(result, currency) {
            Some(d) => text.push_str(&format!("Produced {d}\n\n")),
            None => text.push_str("Produced neither a profit nor a loss\n\n"),
        }
    }

    match describe(round_robin.summary.net_result, currency) {
        Some(d) => text.push_str(&format!("In this case your Round Robin produced {d}.")),
        None => text.push_str("In this case your Round Robin produced neither a profit nor a loss."),
    }

    text
}

/// Multi-line summary block.
pub fn render_summary(summary: &Summary, currency: &str) -> String {
    format!(
        "Total combinations: {}\n\
         Winning combinations: {}\n\
         Losing combinations: {}\n\
         Pending combinations: {}\n\
         Risk per combination: {cur}{:.2}\n\
         Winnings: {cur}{:.2}\n\
         Losses: {cur}{:.2}\n\
         Net result: {cur}{:.2}",
        summary.total_combinations,
        summary.winning_combinations,
        summary.losing_combinations,
        summary.pending_combinations,
        cents(summary.per_combination_risk),
        cents(summary.total_win),
        cents(summary.total_loss),
        cents(summary.net_result),
        cur = currency,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
