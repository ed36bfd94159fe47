//! Derived standings: ranked summary rows computed from participant tallies.

use serde::{Deserialize, Serialize};

use crate::participant::{Participant, ParticipantData};

/// Points awarded per win.
pub const WIN_POINTS: u32 = 3;
/// Points awarded per draw.
pub const DRAW_POINTS: u32 = 1;

/// One ranked row of a standings table.
///
/// Never stored; always derived from the current tallies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Standing {
    pub id: String,
    pub name: String,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub played: u32,
    pub points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso_code: Option<String>,
}

impl Standing {
    fn from_participant(p: &Participant) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            wins: p.wins,
            draws: p.draws,
            losses: p.losses,
            played: p.played(),
            points: p.wins * WIN_POINTS + p.draws * DRAW_POINTS,
            iso_code: p.iso_code.clone(),
        }
    }
}

/// Build the ranked table: points descending, then wins descending, then
/// name ascending (case-sensitive lexicographic).
pub(crate) fn compute_standings(data: &ParticipantData) -> Vec<Standing> {
    let mut rows: Vec<Standing> = data
        .order
        .iter()
        .filter_map(|id| data.participants.get(id))
        .map(Standing::from_participant)
        .collect();

    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.wins.cmp(&a.wins))
            .then_with(|| a.name.cmp(&b.name))
    });

    rows
}

#[cfg(test)]
mod tests {
    use crate::ParticipantLedger;

    fn ledger_with(names: &[&str]) -> (ParticipantLedger, Vec<String>) {
        let mut ledger = ParticipantLedger::new();
        let ids = names
            .iter()
            .map(|name| ledger.add_participant("t1", name, None).unwrap())
            .collect();
        (ledger, ids)
    }

    #[test]
    fn test_points_and_played() {
        let (mut ledger, ids) = ledger_with(&["A", "B"]);
        ledger.record_result("t1", &ids[0], &ids[1], 2, 2);
        ledger.record_result("t1", &ids[0], &ids[1], 1, 0);

        let rows = ledger.standings("t1");
        assert_eq!(rows[0].name, "A");
        assert_eq!(rows[0].played, 2);
        assert_eq!(rows[0].points, 4);
        assert_eq!(rows[1].points, 1);
    }

    #[test]
    fn test_ranking_by_points() {
        // A: 2w 1d = 7 pts, B: 2w 0d 1l = 6 pts, C: 1w 2d = 5 pts;
        // the fillers X and Y end up below C.
        let (mut ledger, ids) = ledger_with(&["C", "B", "A", "X", "Y"]);
        let (c, b, a, x, y) = (&ids[0], &ids[1], &ids[2], &ids[3], &ids[4]);

        ledger.record_result("t1", a, x, 1, 0);
        ledger.record_result("t1", a, y, 2, 1);
        ledger.record_result("t1", a, x, 1, 1);
        ledger.record_result("t1", b, x, 1, 0);
        ledger.record_result("t1", b, y, 3, 0);
        ledger.record_result("t1", y, b, 2, 0);
        ledger.record_result("t1", c, x, 2, 0);
        ledger.record_result("t1", c, y, 1, 1);
        ledger.record_result("t1", c, x, 0, 0);

        let rows = ledger.standings("t1");
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(&names[..3], &["A", "B", "C"]);
        assert_eq!(rows[0].points, 7);
        assert_eq!(rows[1].points, 6);
        assert_eq!(rows[2].points, 5);
    }

    #[test]
    fn test_tie_break_by_wins_then_name() {
        // Both 3 pts: A via one win, B via three draws; A ranks first.
        let (mut ledger, ids) = ledger_with(&["B", "A", "X"]);
        let (b, a, x) = (&ids[0], &ids[1], &ids[2]);

        ledger.record_result("t1", a, x, 1, 0);
        ledger.record_result("t1", b, x, 0, 0);
        ledger.record_result("t1", b, x, 0, 0);
        ledger.record_result("t1", b, x, 0, 0);

        let rows = ledger.standings("t1");
        assert_eq!(rows[0].name, "A");
        assert_eq!(rows[1].name, "B");

        // Equal points and wins fall back to name order.
        let (ledger2, _) = ledger_with(&["Green", "Blue"]);
        let rows = ledger2.standings("t1");
        assert_eq!(rows[0].name, "Blue");
        assert_eq!(rows[1].name, "Green");
    }

    #[test]
    fn test_unknown_tournament_is_empty() {
        let ledger = ParticipantLedger::new();
        assert!(ledger.standings("nowhere").is_empty());
    }
}
