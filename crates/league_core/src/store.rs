//! The top-level state container composing both ledgers.

use serde::{Deserialize, Serialize};

use crate::matches::{clamp_score, MatchLedger};
use crate::participant::{Participant, ParticipantLedger};

/// Explicit owner of all tournament state: the participant ledger and the
/// match ledger, each partitioned by tournament id.
///
/// Passed by reference wherever commands or queries are needed; there is no
/// ambient global. The two ledgers stay independent, but
/// [`submit_result`](Self::submit_result) keeps them consistent by applying
/// match creation, score storage and tally update as one call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TournamentStore {
    pub participants: ParticipantLedger,
    pub matches: MatchLedger,
}

impl TournamentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a would-be submission before dispatch.
    ///
    /// Mirrors the checks an entry form performs: both sides chosen and
    /// distinct, both registered, and the pair not already played. The
    /// ledgers would absorb an invalid command silently; this surfaces the
    /// reason instead.
    pub fn check_submission(
        &self,
        tournament_id: &str,
        home_id: &str,
        away_id: &str,
    ) -> Result<(), String> {
        if home_id.is_empty() || away_id.is_empty() || home_id == away_id {
            return Err("pick two different participants".to_string());
        }
        if self.participants.get(tournament_id, home_id).is_none()
            || self.participants.get(tournament_id, away_id).is_none()
        {
            return Err("both participants must be registered in this tournament".to_string());
        }
        if self.matches.has_played(tournament_id, home_id, away_id) {
            return Err("this pair has already played".to_string());
        }
        Ok(())
    }

    /// Submit a match result atomically: create the match, store the
    /// truncated-and-clamped scoreline, and fold the outcome into both
    /// participants' tallies.
    ///
    /// Returns the new match id, or `None` when match creation no-ops
    /// (self-pair or rematch), in which case no score is stored and no tally
    /// changes either.
    pub fn submit_result(
        &mut self,
        tournament_id: &str,
        home_id: &str,
        away_id: &str,
        home_raw: f64,
        away_raw: f64,
    ) -> Option<String> {
        let match_id = self.matches.create_match(tournament_id, home_id, away_id)?;

        self.matches
            .set_scores(tournament_id, &match_id, home_raw, away_raw);
        self.participants.record_result(
            tournament_id,
            home_id,
            away_id,
            clamp_score(home_raw),
            clamp_score(away_raw),
        );

        Some(match_id)
    }

    /// Participants still eligible as the home side: anyone who has not yet
    /// played every other participant.
    pub fn eligible_home(&self, tournament_id: &str) -> Vec<&Participant> {
        let total = self.participants.count(tournament_id);
        self.participants
            .participants(tournament_id)
            .into_iter()
            .filter(|p| p.played() as usize + 1 != total)
            .collect()
    }

    /// Eligible opponents once a home side is chosen: everyone except the
    /// home participant and anyone they have already faced.
    pub fn eligible_opponents(&self, tournament_id: &str, home_id: &str) -> Vec<&Participant> {
        let played = self.matches.opponents_played(tournament_id, home_id);
        self.participants
            .participants(tournament_id)
            .into_iter()
            .filter(|p| p.id != home_id && !played.contains(&p.id))
            .collect()
    }
}
