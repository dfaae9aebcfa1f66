//! Core engine — the team list → combinations → summary pipeline.
//!
//! Every call recomputes from scratch. Callers re-run `evaluate` whenever
//! the team list, combination size, or risk amount changes.

pub mod sheet;
pub mod summary;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::strategy::{generator, score, settlement::settle};
use crate::types::{parse_risk, Combination, Summary, TeamEntry};
use sheet::TeamSheet;
use summary::summarize;

/// Scored combinations and their aggregate for one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundRobin {
    pub combination_size: usize,
    pub combinations: Vec<Combination>,
    pub summary: Summary,
}

impl RoundRobin {
    /// Each combination with its signed result at the per-combination risk.
    pub fn results(&self) -> impl Iterator<Item = (&Combination, Decimal)> + '_ {
        let stake = self.summary.per_combination_risk;
        self.combinations.iter().map(move |c| (c, settle(c, stake)))
    }
}

/// Legs with both a name and odds, in their original order.
pub fn valid_teams(teams: &[TeamEntry]) -> Vec<TeamEntry> {
    teams.iter().filter(|t| t.is_valid()).cloned().collect()
}

/// Generate and score every combination of `size` valid teams.
pub fn build_combinations(teams: &[TeamEntry], size: usize) -> Vec<Combination> {
    let valid = valid_teams(teams);
    if valid.len() < size {
        warn!(
            valid_teams = valid.len(),
            size,
            "Not enough valid teams for the combination size"
        );
        return Vec::new();
    }

    let combinations: Vec<Combination> = generator::generate(&valid, size)
        .into_iter()
        .map(score)
        .collect();

    debug!(
        teams = teams.len(),
        valid_teams = valid.len(),
        size,
        combinations = combinations.len(),
        "Combinations built"
    );

    combinations
}

/// Run the full pipeline: valid teams → combinations → summary.
pub fn evaluate(teams: &[TeamEntry], size: usize, risk: &str) -> RoundRobin {
    let combinations = build_combinations(teams, size);
    let summary = summarize(&combinations, parse_risk(risk));
    RoundRobin {
        combination_size: size,
        combinations,
        summary,
    }
}

impl TeamSheet {
    /// Evaluate the sheet's current legs.
    pub fn evaluate(&self, size: usize, risk: &str) -> RoundRobin {
        evaluate(&self.teams(), size, risk)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
