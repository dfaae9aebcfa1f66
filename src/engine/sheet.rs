//! Team sheet — the caller-held list of legs.
//!
//! Entries are keyed by `TeamId` in a `BTreeMap`. Ids come from a
//! monotonically increasing counter, so iteration order is creation
//! order no matter how entries are edited or removed.

use std::collections::BTreeMap;

use tracing::debug;

use crate::strategy::generator;
use crate::types::{RoundRobinError, SizeOption, TeamEntry, TeamId, TeamStatus};

/// Fewest legs a sheet may hold.
pub const MIN_TEAMS: usize = 3;
/// Most legs a sheet may hold.
pub const MAX_TEAMS: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct TeamSheet {
    entries: BTreeMap<TeamId, TeamEntry>,
    next_id: u64,
}

impl Default for TeamSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamSheet {
    /// A sheet with `MIN_TEAMS` blank rows (ids 1, 2, 3).
    pub fn new() -> Self {
        let mut sheet = Self {
            entries: BTreeMap::new(),
            next_id: 1,
        };
        for _ in 0..MIN_TEAMS {
            sheet.push_blank();
        }
        sheet
    }

    /// Build a sheet from caller-supplied entries.
    pub fn from_entries(teams: Vec<TeamEntry>) -> Result<Self, RoundRobinError> {
        if !(MIN_TEAMS..=MAX_TEAMS).contains(&teams.len()) {
            return Err(RoundRobinError::InvalidSheetSize {
                count: teams.len(),
                min: MIN_TEAMS,
                max: MAX_TEAMS,
            });
        }

        let mut entries = BTreeMap::new();
        for team in teams {
            let id = team.id;
            if entries.insert(id, team).is_some() {
                return Err(RoundRobinError::DuplicateTeam(id));
            }
        }
        let next_id = entries.keys().next_back().map_or(1, |id| id.0 + 1);

        Ok(Self { entries, next_id })
    }

    fn push_blank(&mut self) -> TeamId {
        let id = TeamId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, TeamEntry::blank(id));
        id
    }

    /// Append a blank row.
    pub fn add_team(&mut self) -> Result<TeamId, RoundRobinError> {
        if self.entries.len() >= MAX_TEAMS {
            return Err(RoundRobinError::SheetFull { max: MAX_TEAMS });
        }
        let id = self.push_blank();
        debug!(id = %id, count = self.entries.len(), "Team added");
        Ok(id)
    }

    /// Remove a row, keeping at least `MIN_TEAMS`.
    pub fn remove_team(&mut self, id: TeamId) -> Result<TeamEntry, RoundRobinError> {
        if !self.entries.contains_key(&id) {
            return Err(RoundRobinError::TeamNotFound(id));
        }
        if self.entries.len() <= MIN_TEAMS {
            return Err(RoundRobinError::SheetAtMinimum { min: MIN_TEAMS });
        }
        let removed = self
            .entries
            .remove(&id)
            .ok_or(RoundRobinError::TeamNotFound(id))?;
        debug!(id = %id, count = self.entries.len(), "Team removed");
        Ok(removed)
    }

    fn entry_mut(&mut self, id: TeamId) -> Result<&mut TeamEntry, RoundRobinError> {
        self.entries
            .get_mut(&id)
            .ok_or(RoundRobinError::TeamNotFound(id))
    }

    pub fn set_name(&mut self, id: TeamId, name: &str) -> Result<(), RoundRobinError> {
        self.entry_mut(id)?.name = name.to_string();
        Ok(())
    }

    pub fn set_odds(&mut self, id: TeamId, odds: &str) -> Result<(), RoundRobinError> {
        self.entry_mut(id)?.odds = odds.to_string();
        Ok(())
    }

    /// Mark a leg's result. Can be changed at any time as scores come in.
    pub fn set_status(&mut self, id: TeamId, status: TeamStatus) -> Result<(), RoundRobinError> {
        self.entry_mut(id)?.status = status;
        Ok(())
    }

    pub fn get(&self, id: TeamId) -> Option<&TeamEntry> {
        self.entries.get(&id)
    }

    /// All entries in creation order.
    pub fn teams(&self) -> Vec<TeamEntry> {
        self.entries.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sizes offered by the size selector for the current row count.
    pub fn available_sizes(&self) -> Vec<SizeOption> {
        generator::available_sizes(self.entries.len())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
