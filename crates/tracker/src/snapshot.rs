//! Store snapshot persistence.
//!
//! The whole [`TournamentStore`] is serialized verbatim, so a restored
//! snapshot reproduces the exact map and order structure of both ledgers.

use league_core::TournamentStore;
use std::path::Path;

/// Load a store snapshot from a JSON file.
pub fn load_store(path: &Path) -> Result<TournamentStore, String> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
    serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
}

/// Save a store snapshot to a JSON file.
pub fn save_store(store: &TournamentStore, path: &Path) -> Result<(), String> {
    let json = serde_json::to_string_pretty(store)
        .map_err(|e| format!("Failed to serialize: {}", e))?;
    std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
}

#[cfg(test)]
mod tests {
    use league_core::TournamentStore;

    #[test]
    fn test_snapshot_round_trip() {
        let mut store = TournamentStore::new();
        let a = store
            .participants
            .add_participant("t1", "Red", Some("us"))
            .unwrap();
        let b = store.participants.add_participant("t1", "Blue", None).unwrap();
        store.submit_result("t1", &a, &b, 3.0, 1.0);
        let pending = store.matches.create_match("t1", &a, "ghost").unwrap();

        let json = serde_json::to_string_pretty(&store).unwrap();
        let restored: TournamentStore = serde_json::from_str(&json).unwrap();

        assert_eq!(
            restored.participants.standings("t1"),
            store.participants.standings("t1")
        );
        assert_eq!(restored.matches.matches("t1"), store.matches.matches("t1"));
        // A match without scores restores with both sides still absent.
        let m = restored.matches.get("t1", &pending).unwrap();
        assert_eq!((m.home_score, m.away_score), (None, None));
    }

    #[test]
    fn test_load_missing_file_is_err() {
        let err = super::load_store(std::path::Path::new("definitely/not/here.json"));
        assert!(err.is_err());
    }
}
