//! Shared types for the round robin calculator.
//!
//! These types form the data model used across all modules: team legs
//! as entered by the caller, the derived combinations, and the aggregate
//! summary. Strategy and engine modules depend on them, never the other
//! way round.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Team legs
// ---------------------------------------------------------------------------

/// Stable identifier of a team entry. Ids are handed out in creation
/// order, so sorting by id reproduces the order teams were added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u64);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Settlement status of a single leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamStatus {
    Win,
    Lose,
    Draw,
    /// Game not finished (or not yet marked).
    #[default]
    Unset,
}

impl fmt::Display for TeamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamStatus::Win => write!(f, "win"),
            TeamStatus::Lose => write!(f, "lose"),
            TeamStatus::Draw => write!(f, "draw"),
            TeamStatus::Unset => write!(f, "unset"),
        }
    }
}

/// Parse a status string (case-insensitive). Empty input means unset.
impl FromStr for TeamStatus {
    type Err = RoundRobinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "win" | "w" => Ok(TeamStatus::Win),
            "lose" | "loss" | "l" => Ok(TeamStatus::Lose),
            "draw" | "d" | "push" => Ok(TeamStatus::Draw),
            "" | "unset" | "pending" => Ok(TeamStatus::Unset),
            other => Err(RoundRobinError::Config(format!("unknown team status: {other}"))),
        }
    }
}

/// One wagering leg as entered by the caller.
///
/// Odds stay as raw text: an entry with empty odds is excluded from the
/// round robin, while non-empty but unparsable odds count as 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamEntry {
    pub id: TeamId,
    pub name: String,
    pub odds: String,
    #[serde(default)]
    pub status: TeamStatus,
}

impl TeamEntry {
    pub fn new(id: TeamId, name: &str, odds: &str, status: TeamStatus) -> Self {
        Self {
            id,
            name: name.to_string(),
            odds: odds.to_string(),
            status,
        }
    }

    /// A blank row, as a freshly added form line.
    pub fn blank(id: TeamId) -> Self {
        Self::new(id, "", "", TeamStatus::Unset)
    }

    /// Whether this leg takes part in combination generation.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && !self.odds.is_empty()
    }

    /// Parsed decimal odds (1 when unparsable or non-positive).
    pub fn decimal_odds(&self) -> Decimal {
        parse_odds(&self.odds)
    }

    pub fn is_draw(&self) -> bool {
        self.status == TeamStatus::Draw
    }
}

impl fmt::Display for TeamEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {} ({})", self.name, self.odds, self.status)
    }
}

// ---------------------------------------------------------------------------
// Numeric input
// ---------------------------------------------------------------------------

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let s = raw.trim();
    // Digit-group underscores are not numeric input.
    if s.is_empty() || s.contains('_') {
        return None;
    }
    Decimal::from_str(s)
        .ok()
        .or_else(|| Decimal::from_scientific(s).ok())
}

/// Parse decimal odds. Anything unparsable, zero or negative is treated
/// as a neutral multiplier of 1.
pub fn parse_odds(raw: &str) -> Decimal {
    match parse_decimal(raw) {
        Some(d) if d > Decimal::ZERO => d,
        _ => Decimal::ONE,
    }
}

/// Parse the total risk amount. Unparsable or negative input is 0.
pub fn parse_risk(raw: &str) -> Decimal {
    match parse_decimal(raw) {
        Some(d) if d >= Decimal::ZERO => d,
        _ => Decimal::ZERO,
    }
}

// ---------------------------------------------------------------------------
// Combinations
// ---------------------------------------------------------------------------

/// Result state of a whole combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Every leg settled and none lost.
    Won,
    /// At least one leg lost.
    Lost,
    /// At least one leg still unset.
    Pending,
}

impl Outcome {
    /// Tri-state view: `Some(true)` won, `Some(false)` lost, `None` pending.
    pub fn is_winner(&self) -> Option<bool> {
        match self {
            Outcome::Won => Some(true),
            Outcome::Lost => Some(false),
            Outcome::Pending => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Won => write!(f, "WON"),
            Outcome::Lost => write!(f, "LOST"),
            Outcome::Pending => write!(f, "PENDING"),
        }
    }
}

/// One size-k selection of valid teams with its derived scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combination {
    /// Legs in their original relative order.
    pub teams: Vec<TeamEntry>,
    /// Product of the non-draw legs' odds.
    pub total_odds: Decimal,
    pub outcome: Outcome,
    pub draw_count: usize,
    /// Legs left once draws are removed.
    pub effective_teams: usize,
}

impl Combination {
    /// Leg names joined with the given separator.
    pub fn team_names(&self, sep: &str) -> String {
        self.teams
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(sep)
    }

    /// All legs pushed.
    pub fn is_void(&self) -> bool {
        self.effective_teams == 0
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {:.2} [{}]",
            self.team_names(" + "),
            self.total_odds,
            self.outcome,
        )?;
        if self.draw_count > 0 {
            write!(
                f,
                " ({} draw(s), {} effective team(s))",
                self.draw_count, self.effective_teams
            )?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Aggregate over all combinations for a given total risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_combinations: usize,
    pub winning_combinations: usize,
    pub losing_combinations: usize,
    pub pending_combinations: usize,
    /// Total risk split evenly across combinations.
    pub per_combination_risk: Decimal,
    /// Sum of positive combination results.
    pub total_win: Decimal,
    /// Sum of absolute negative combination results.
    pub total_loss: Decimal,
    pub net_result: Decimal,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            total_combinations: 0,
            winning_combinations: 0,
            losing_combinations: 0,
            pending_combinations: 0,
            per_combination_risk: Decimal::ZERO,
            total_win: Decimal::ZERO,
            total_loss: Decimal::ZERO,
            net_result: Decimal::ZERO,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} combos (W{}/L{}/P{}) | stake {:.2} each | win {:.2} | loss {:.2} | net {:.2}",
            self.total_combinations,
            self.winning_combinations,
            self.losing_combinations,
            self.pending_combinations,
            self.per_combination_risk,
            self.total_win,
            self.total_loss,
            self.net_result,
        )
    }
}

/// A selectable combination size with the number of combinations it yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeOption {
    pub size: usize,
    pub count: u64,
}

impl fmt::Display for SizeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} teams per combination ({} combinations)", self.size, self.count)
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types. The scoring core itself never fails;
/// these cover sheet editing, export and configuration.
#[derive(Debug, thiserror::Error)]
pub enum RoundRobinError {
    #[error("Team sheet is full: at most {max} teams")]
    SheetFull { max: usize },

    #[error("Team sheet needs at least {min} teams")]
    SheetAtMinimum { min: usize },

    #[error("Team not found: {0}")]
    TeamNotFound(TeamId),

    #[error("Duplicate team id: {0}")]
    DuplicateTeam(TeamId),

    #[error("Invalid team count {count}: expected between {min} and {max}")]
    InvalidSheetSize { count: usize, min: usize, max: usize },

    #[error("Export error: {0}")]
    Export(String),

    #[error("Report sink error: {0}")]
    Sink(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
