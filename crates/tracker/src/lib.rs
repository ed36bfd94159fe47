//! League tracker
//!
//! This crate provides the infrastructure around `league_core`:
//! - persisting full store snapshots as JSON
//! - loading the tournament registry from TOML
//! - rendering standings and match-list text reports
//!
//! # Usage
//!
//! ```bash
//! # Register a team and record a result
//! cargo run -p tracker -- add premier-league "Red Lions"
//! cargo run -p tracker -- result premier-league "Red Lions" "Blue Sharks" 3 1
//!
//! # Print the ranked table
//! cargo run -p tracker -- standings premier-league
//! ```

mod registry;
mod report;
mod snapshot;

pub use registry::*;
pub use report::*;
pub use snapshot::*;
