//! Tournament registry loading.
//!
//! The built-in registry covers the default tournaments; a TOML file can
//! replace it:
//!
//! ```toml
//! [[tournaments]]
//! title = "Premier League"
//! tournament = "premier-league"
//! layout = "clean"
//! ```

use league_core::{default_tournaments, TournamentSettings};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RegistryFile {
    tournaments: Vec<TournamentSettings>,
}

/// Load the registry from `path`, or the built-in defaults when no file is
/// given.
pub fn load_registry(path: Option<&Path>) -> Result<Vec<TournamentSettings>, String> {
    let path = match path {
        Some(path) => path,
        None => return Ok(default_tournaments()),
    };

    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
    let file: RegistryFile =
        toml::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))?;
    Ok(file.tournaments)
}
