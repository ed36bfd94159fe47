//! Participant ledger: who competes in each tournament and their tallies.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::id::new_id;
use crate::standings::{compute_standings, Standing};

/// A team or player registered in one tournament.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    pub id: String,
    /// Display name: trimmed, internal whitespace collapsed, case preserved.
    pub name: String,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    /// Two-letter country code for flag display, stored uppercased.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso_code: Option<String>,
}

impl Participant {
    /// Total matches folded into this participant's tallies.
    pub fn played(&self) -> u32 {
        self.wins + self.draws + self.losses
    }
}

/// Participant state for one tournament: the map plus insertion order.
///
/// The order vector is append-only and defines display/iteration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticipantData {
    pub participants: HashMap<String, Participant>,
    pub order: Vec<String>,
}

/// Participant state across all tournaments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticipantLedger {
    pub by_tournament: HashMap<String, ParticipantData>,
}

/// Canonical form of a name used for duplicate detection: trimmed, internal
/// whitespace collapsed to single spaces, lowercased.
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Display form of a name: trimmed and whitespace-collapsed, case preserved.
pub fn display_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True when `code` is exactly two ASCII letters.
pub fn valid_iso_code(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_alphabetic())
}

impl ParticipantLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a participant with zero tallies.
    ///
    /// Returns the generated id, or `None` when the command is a no-op: the
    /// normalized name is empty or already taken within the tournament.
    pub fn add_participant(
        &mut self,
        tournament_id: &str,
        name: &str,
        iso_code: Option<&str>,
    ) -> Option<String> {
        let normalized = normalize_name(name);
        if normalized.is_empty() {
            return None;
        }

        let data = self
            .by_tournament
            .entry(tournament_id.to_string())
            .or_default();

        let exists = data.order.iter().any(|id| {
            data.participants
                .get(id)
                .map_or(false, |p| normalize_name(&p.name) == normalized)
        });
        if exists {
            return None;
        }

        let id = new_id();
        data.participants.insert(
            id.clone(),
            Participant {
                id: id.clone(),
                name: display_name(name),
                wins: 0,
                draws: 0,
                losses: 0,
                iso_code: iso_code.map(|c| c.to_uppercase()),
            },
        );
        data.order.push(id.clone());
        Some(id)
    }

    /// Fold one match outcome into both participants' tallies.
    ///
    /// Silent no-op on a self-pair or unknown id. Strictly greater home
    /// score is a home win, strictly smaller an away win, equal scores a
    /// draw for both. This is the only mutator of the tallies.
    pub fn record_result(
        &mut self,
        tournament_id: &str,
        home_id: &str,
        away_id: &str,
        home_score: u32,
        away_score: u32,
    ) {
        let data = match self.by_tournament.get_mut(tournament_id) {
            Some(data) => data,
            None => return,
        };

        if home_id == away_id
            || !data.participants.contains_key(home_id)
            || !data.participants.contains_key(away_id)
        {
            return;
        }

        if home_score > away_score {
            if let Some(home) = data.participants.get_mut(home_id) {
                home.wins += 1;
            }
            if let Some(away) = data.participants.get_mut(away_id) {
                away.losses += 1;
            }
        } else if home_score < away_score {
            if let Some(away) = data.participants.get_mut(away_id) {
                away.wins += 1;
            }
            if let Some(home) = data.participants.get_mut(home_id) {
                home.losses += 1;
            }
        } else {
            if let Some(home) = data.participants.get_mut(home_id) {
                home.draws += 1;
            }
            if let Some(away) = data.participants.get_mut(away_id) {
                away.draws += 1;
            }
        }
    }

    /// Participants of a tournament in insertion order.
    pub fn participants(&self, tournament_id: &str) -> Vec<&Participant> {
        match self.by_tournament.get(tournament_id) {
            Some(data) => data
                .order
                .iter()
                .filter_map(|id| data.participants.get(id))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn get(&self, tournament_id: &str, id: &str) -> Option<&Participant> {
        self.by_tournament.get(tournament_id)?.participants.get(id)
    }

    /// Look up a participant id by name (normalized comparison).
    pub fn id_by_name(&self, tournament_id: &str, name: &str) -> Option<&str> {
        let normalized = normalize_name(name);
        self.participants(tournament_id)
            .into_iter()
            .find(|p| normalize_name(&p.name) == normalized)
            .map(|p| p.id.as_str())
    }

    /// Number of participants registered in a tournament.
    pub fn count(&self, tournament_id: &str) -> usize {
        self.by_tournament
            .get(tournament_id)
            .map_or(0, |data| data.order.len())
    }

    /// Ranked standings for a tournament; empty when the tournament is
    /// unknown. Pure and recomputed in full on every call.
    pub fn standings(&self, tournament_id: &str) -> Vec<Standing> {
        match self.by_tournament.get(tournament_id) {
            Some(data) => compute_standings(data),
            None => Vec::new(),
        }
    }
}
