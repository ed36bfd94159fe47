//! Match ledger: which pairs have played and their recorded scorelines.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::id::new_id;

/// Lowest storable score.
pub const MIN_SCORE: u32 = 0;
/// Highest storable score.
pub const MAX_SCORE: u32 = 99;

/// Canonical key for an unordered participant pair, used to detect
/// rematches regardless of home/away order.
pub fn pair_key(a: &str, b: &str) -> String {
    if a <= b {
        format!("{}::{}", a, b)
    } else {
        format!("{}::{}", b, a)
    }
}

/// Normalize a raw score: truncate toward zero, then clamp to
/// `[MIN_SCORE, MAX_SCORE]`.
pub fn clamp_score(raw: f64) -> u32 {
    let truncated = raw.trunc();
    if truncated < MIN_SCORE as f64 {
        MIN_SCORE
    } else if truncated > MAX_SCORE as f64 {
        MAX_SCORE
    } else {
        truncated as u32
    }
}

/// A single match between two participants of one tournament.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Match {
    pub id: String,
    pub tournament_id: String,
    pub home_id: String,
    pub away_id: String,
    /// Absent until a scoreline is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_score: Option<u32>,
}

/// Match state for one tournament: the map plus creation order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchData {
    pub matches: HashMap<String, Match>,
    pub order: Vec<String>,
}

/// Match state across all tournaments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchLedger {
    pub by_tournament: HashMap<String, MatchData>,
}

impl MatchLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a match between two distinct participants.
    ///
    /// Returns the generated match id, or `None` when the command is a
    /// no-op: a self-pair, or a pair that has already played in either
    /// home/away order. The returned id is what a follow-up
    /// [`set_scores`](Self::set_scores) call targets.
    pub fn create_match(
        &mut self,
        tournament_id: &str,
        home_id: &str,
        away_id: &str,
    ) -> Option<String> {
        if home_id == away_id {
            return None;
        }

        let data = self
            .by_tournament
            .entry(tournament_id.to_string())
            .or_default();
        let key = pair_key(home_id, away_id);

        let exists = data.order.iter().any(|id| {
            data.matches
                .get(id)
                .map_or(false, |m| pair_key(&m.home_id, &m.away_id) == key)
        });
        if exists {
            return None;
        }

        let id = new_id();
        data.matches.insert(
            id.clone(),
            Match {
                id: id.clone(),
                tournament_id: tournament_id.to_string(),
                home_id: home_id.to_string(),
                away_id: away_id.to_string(),
                home_score: None,
                away_score: None,
            },
        );
        data.order.push(id.clone());
        Some(id)
    }

    /// Store a scoreline on an existing match, truncating and clamping each
    /// side to `[MIN_SCORE, MAX_SCORE]` independently.
    ///
    /// No-op when the match is missing; repeat calls overwrite.
    pub fn set_scores(&mut self, tournament_id: &str, match_id: &str, home_raw: f64, away_raw: f64) {
        let entry = match self
            .by_tournament
            .get_mut(tournament_id)
            .and_then(|data| data.matches.get_mut(match_id))
        {
            Some(entry) => entry,
            None => return,
        };

        entry.home_score = Some(clamp_score(home_raw));
        entry.away_score = Some(clamp_score(away_raw));
    }

    /// Matches of a tournament in creation order.
    pub fn matches(&self, tournament_id: &str) -> Vec<&Match> {
        match self.by_tournament.get(tournament_id) {
            Some(data) => data
                .order
                .iter()
                .filter_map(|id| data.matches.get(id))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn get(&self, tournament_id: &str, match_id: &str) -> Option<&Match> {
        self.by_tournament.get(tournament_id)?.matches.get(match_id)
    }

    /// True when the unordered pair `{a, b}` has already played.
    pub fn has_played(&self, tournament_id: &str, a: &str, b: &str) -> bool {
        if a == b {
            return false;
        }
        let key = pair_key(a, b);
        self.matches(tournament_id)
            .iter()
            .any(|m| pair_key(&m.home_id, &m.away_id) == key)
    }

    /// Ids of every opponent `participant_id` has faced, as home or away.
    pub fn opponents_played(&self, tournament_id: &str, participant_id: &str) -> HashSet<String> {
        let mut opponents = HashSet::new();
        for m in self.matches(tournament_id) {
            if m.home_id == participant_id {
                opponents.insert(m.away_id.clone());
            } else if m.away_id == participant_id {
                opponents.insert(m.home_id.clone());
            }
        }
        opponents
    }
}
