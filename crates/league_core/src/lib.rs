//! Round-robin league tracking core.
//!
//! Two independent ledgers over per-tournament state:
//! - the participant ledger owns registrations and win/draw/loss tallies;
//! - the match ledger owns which pairs have played and their scorelines.
//!
//! Both are plain data structures mutated by command functions and read by
//! pure queries. Invalid commands (duplicate name, self-pair, rematch,
//! unknown id) are absorbed as silent no-ops: the calling layer is expected
//! to validate before dispatch and report errors itself, the ledger no-op is
//! only the last line of defense.
//!
//! [`TournamentStore`] composes the two ledgers and adds the atomic
//! submit-result path plus the opponent eligibility rules used to filter
//! match entry.

mod config;
mod id;
mod matches;
mod participant;
mod standings;
mod store;

pub use config::*;
pub use id::new_id;
pub use matches::*;
pub use participant::*;
pub use standings::*;
pub use store::*;
