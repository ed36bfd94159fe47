//! Tournament registry and per-layout visibility settings.
//!
//! The registry is pass-through configuration for the presentation layer;
//! the core branches on a single derived flag, [`LayoutSettings::player_mode`].

use serde::{Deserialize, Serialize};

/// Maximum participants per tournament, enforced at the submission layer.
pub const MAX_ENTRY_LIMIT: usize = 16;
/// Maximum display-name length, enforced at the submission layer.
pub const MAX_NAME_LENGTH: usize = 40;

/// Which columns and features a tournament's layout shows.
///
/// All fields are required; the named presets supply the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutSettings {
    pub name: String,
    pub show_add_team: bool,
    pub show_add_player: bool,
    pub show_standings: bool,
    pub show_match_results: bool,
    pub show_buttons: bool,
    pub show_flags: bool,
    pub show_icons: bool,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self::clean()
    }
}

impl LayoutSettings {
    /// Team layout without icon decorations.
    pub fn clean() -> Self {
        Self {
            name: "clean".to_string(),
            show_add_team: true,
            show_add_player: false,
            show_standings: true,
            show_match_results: true,
            show_buttons: false,
            show_flags: false,
            show_icons: false,
        }
    }

    /// Team-and-player layout with flags and win/loss icons.
    pub fn energetic() -> Self {
        Self {
            name: "energetic".to_string(),
            show_add_team: true,
            show_add_player: true,
            show_standings: true,
            show_match_results: true,
            show_buttons: true,
            show_flags: true,
            show_icons: true,
        }
    }

    /// Player-only layout: standings table only, binary results.
    pub fn table() -> Self {
        Self {
            name: "table".to_string(),
            show_add_team: false,
            show_add_player: true,
            show_standings: true,
            show_match_results: false,
            show_buttons: true,
            show_flags: false,
            show_icons: false,
        }
    }

    /// Look up a preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "clean" => Some(Self::clean()),
            "energetic" => Some(Self::energetic()),
            "table" => Some(Self::table()),
            _ => None,
        }
    }

    /// Whether results are entered as a binary winner rather than a numeric
    /// scoreline. Resolved here once instead of probed field by field.
    pub fn player_mode(&self) -> bool {
        self.show_add_player && !self.show_add_team
    }
}

/// A registered tournament: display title, key and layout preset name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TournamentSettings {
    pub title: String,
    pub tournament: String,
    pub layout: String,
}

/// The built-in registry.
pub fn default_tournaments() -> Vec<TournamentSettings> {
    vec![
        TournamentSettings {
            title: "Premier League".to_string(),
            tournament: "premier-league".to_string(),
            layout: "clean".to_string(),
        },
        TournamentSettings {
            title: "EuroBasket".to_string(),
            tournament: "eurobasket".to_string(),
            layout: "energetic".to_string(),
        },
        TournamentSettings {
            title: "Wimbledon".to_string(),
            tournament: "wimbledon".to_string(),
            layout: "table".to_string(),
        },
    ]
}

/// Layout settings for a tournament key; unknown tournaments and unknown
/// preset names fall back to the default layout.
pub fn layout_for(registry: &[TournamentSettings], tournament_id: &str) -> LayoutSettings {
    registry
        .iter()
        .find(|t| t.tournament == tournament_id)
        .and_then(|t| LayoutSettings::preset(&t.layout))
        .unwrap_or_default()
}

/// Display title for a tournament key; falls back to the key itself.
pub fn title_for(registry: &[TournamentSettings], tournament_id: &str) -> String {
    registry
        .iter()
        .find(|t| t.tournament == tournament_id)
        .map(|t| t.title.clone())
        .unwrap_or_else(|| tournament_id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_resolves() {
        let registry = default_tournaments();
        assert_eq!(registry.len(), 3);
        for entry in &registry {
            assert!(LayoutSettings::preset(&entry.layout).is_some());
        }
    }

    #[test]
    fn test_player_mode_resolution() {
        assert!(!LayoutSettings::clean().player_mode());
        assert!(!LayoutSettings::energetic().player_mode());
        assert!(LayoutSettings::table().player_mode());
    }

    #[test]
    fn test_layout_fallback() {
        let registry = default_tournaments();
        assert_eq!(layout_for(&registry, "wimbledon").name, "table");
        assert_eq!(layout_for(&registry, "unknown").name, "clean");
        assert_eq!(title_for(&registry, "eurobasket"), "EuroBasket");
        assert_eq!(title_for(&registry, "unknown"), "unknown");
    }
}
