//! Text reports for standings and match lists.

use league_core::{LayoutSettings, TournamentStore};

/// Render the ranked standings table for one tournament.
pub fn standings_report(
    store: &TournamentStore,
    tournament_id: &str,
    title: &str,
    settings: &LayoutSettings,
) -> String {
    let rows = store.participants.standings(tournament_id);

    let mut report = String::new();
    report.push_str(&format!("=== Standings: {} ===\n", title));

    if rows.is_empty() {
        report.push_str("(no participants yet)\n");
        return report;
    }

    report.push_str(&format!(
        "{:<4} {:<24} {:>3} {:>3} {:>3} {:>3} {:>4}\n",
        "#", "Name", "P", "W", "D", "L", "Pts"
    ));
    report.push_str(&"-".repeat(53));
    report.push('\n');

    for (rank, row) in rows.iter().enumerate() {
        let name = match (&row.iso_code, settings.show_flags) {
            (Some(code), true) => format!("{} ({})", row.name, code),
            _ => row.name.clone(),
        };
        report.push_str(&format!(
            "{:<4} {:<24} {:>3} {:>3} {:>3} {:>3} {:>4}\n",
            rank + 1,
            name,
            row.played,
            row.wins,
            row.draws,
            row.losses,
            row.points
        ));
    }

    report
}

/// Render the match list for one tournament, in creation order.
pub fn matches_report(store: &TournamentStore, tournament_id: &str, title: &str) -> String {
    let matches = store.matches.matches(tournament_id);

    let mut report = String::new();
    report.push_str(&format!("=== Matches: {} ===\n", title));

    if matches.is_empty() {
        report.push_str("(no matches yet)\n");
        return report;
    }

    for m in matches {
        let home = participant_name(store, tournament_id, &m.home_id);
        let away = participant_name(store, tournament_id, &m.away_id);
        let score = match (m.home_score, m.away_score) {
            (Some(h), Some(a)) => format!("{:>2} - {:<2}", h, a),
            _ => " (not played) ".to_string(),
        };
        report.push_str(&format!("{:>24} {} {:<24}\n", home, score, away));
    }

    report
}

fn participant_name(store: &TournamentStore, tournament_id: &str, id: &str) -> String {
    store
        .participants
        .get(tournament_id, id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use league_core::{LayoutSettings, TournamentStore};

    fn sample_store() -> TournamentStore {
        let mut store = TournamentStore::new();
        let red = store
            .participants
            .add_participant("t1", "Red", Some("us"))
            .unwrap();
        let blue = store.participants.add_participant("t1", "Blue", None).unwrap();
        store.participants.add_participant("t1", "Green", None);
        store.submit_result("t1", &red, &blue, 3.0, 1.0);
        store
    }

    #[test]
    fn test_standings_report_ranks_rows() {
        let store = sample_store();
        let report = standings_report(&store, "t1", "Test Cup", &LayoutSettings::clean());

        let lines: Vec<&str> = report.lines().collect();
        assert!(lines[0].contains("Test Cup"));
        assert!(lines[2].starts_with("1    Red"));
        assert!(lines[3].starts_with("2    Blue"));
        assert!(lines[4].starts_with("3    Green"));
    }

    #[test]
    fn test_standings_report_flags_follow_layout() {
        let store = sample_store();
        let with_flags = standings_report(&store, "t1", "Cup", &LayoutSettings::energetic());
        let without = standings_report(&store, "t1", "Cup", &LayoutSettings::clean());
        assert!(with_flags.contains("Red (US)"));
        assert!(!without.contains("(US)"));
    }

    #[test]
    fn test_matches_report_shows_scoreline() {
        let store = sample_store();
        let report = matches_report(&store, "t1", "Test Cup");
        assert!(report.contains("Red"));
        assert!(report.contains("Blue"));
        assert!(report.contains(" 3 - 1"));
    }

    #[test]
    fn test_empty_tournament_reports() {
        let store = TournamentStore::new();
        assert!(standings_report(&store, "x", "X", &LayoutSettings::clean())
            .contains("(no participants yet)"));
        assert!(matches_report(&store, "x", "X").contains("(no matches yet)"));
    }
}
