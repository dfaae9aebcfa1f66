//! Subset classifier.
//!
//! Decides whether a combination won, lost or is still pending, and how
//! many of its legs pushed.

use crate::types::{Outcome, TeamEntry, TeamStatus};

/// Outcome of a combination plus its draw bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub outcome: Outcome,
    pub draw_count: usize,
    pub effective_teams: usize,
}

/// Classify a subset of legs.
///
/// Any unset leg makes the whole subset pending, and draws are then not
/// reported. Otherwise legs are scanned in order: draws reduce the
/// effective team count, and the first losing leg ends the scan, so
/// draws listed after it are not counted.
pub fn classify(subset: &[TeamEntry]) -> Classification {
    let mut effective_teams = subset.len();

    if subset.iter().any(|t| t.status == TeamStatus::Unset) {
        return Classification {
            outcome: Outcome::Pending,
            draw_count: 0,
            effective_teams,
        };
    }

    let mut draw_count = 0;
    for team in subset {
        match team.status {
            TeamStatus::Draw => {
                draw_count += 1;
                effective_teams -= 1;
            }
            TeamStatus::Lose => {
                return Classification {
                    outcome: Outcome::Lost,
                    draw_count,
                    effective_teams,
                };
            }
            TeamStatus::Win | TeamStatus::Unset => {}
        }
    }

    Classification {
        outcome: Outcome::Won,
        draw_count,
        effective_teams,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
