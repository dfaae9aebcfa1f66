//! Scoring strategy — combination generation, classification, combined
//! odds, and settlement.

pub mod classifier;
pub mod generator;
pub mod odds;
pub mod settlement;

use crate::types::{Combination, TeamEntry};
use classifier::classify;
use odds::combined_odds;

/// Turn a raw subset of legs into a scored combination.
pub fn score(subset: Vec<TeamEntry>) -> Combination {
    let classification = classify(&subset);
    let total_odds = combined_odds(&subset);
    Combination {
        teams: subset,
        total_odds,
        outcome: classification.outcome,
        draw_count: classification.draw_count,
        effective_teams: classification.effective_teams,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
