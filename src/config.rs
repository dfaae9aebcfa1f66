//! Configuration loading from TOML.
//!
//! Reads `roundrobin.toml` and deserializes into strongly-typed structs:
//! the combination size and total risk, export preferences, and the
//! team legs in the order they should be enumerated.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

use crate::engine::sheet::TeamSheet;
use crate::export::ExportFormat;
use crate::types::{TeamEntry, TeamId, TeamStatus};

/// Default config file path.
pub const DEFAULT_CONFIG_FILE: &str = "roundrobin.toml";

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub calculator: CalculatorConfig,
    #[serde(default)]
    pub export: ExportConfig,
    pub teams: Vec<TeamConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CalculatorConfig {
    pub combination_size: usize,
    /// Total risk as entered; unparsable text counts as 0.
    #[serde(default)]
    pub risk: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub format: ExportFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            format: ExportFormat::default(),
        }
    }
}

fn default_currency() -> String {
    "$".to_string()
}

/// One team leg. Odds are kept as text, exactly as typed.
#[derive(Debug, Deserialize, Clone)]
pub struct TeamConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub odds: String,
    #[serde(default)]
    pub status: TeamStatus,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        Self::parse(&contents).with_context(|| format!("Failed to parse config file: {path}"))
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Build the team sheet; ids follow file order starting at 1.
    pub fn team_sheet(&self) -> Result<TeamSheet> {
        let entries = self
            .teams
            .iter()
            .enumerate()
            .map(|(i, t)| TeamEntry::new(TeamId(i as u64 + 1), &t.name, &t.odds, t.status))
            .collect();
        TeamSheet::from_entries(entries).context("Invalid team list in config")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
