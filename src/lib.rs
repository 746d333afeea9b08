//! Dota 2 Division Leaderboard Mirror
//!
//! A small sync-and-query engine: a background task periodically fetches the
//! ranked leaderboards for each division from the Dota 2 web API, persists
//! the latest snapshot per region in SQLite, and a query layer answers
//! filtered lookups against the cached rows.
//!
//! ## Features
//!
//! - **Adaptive refresh**: the sync loop wakes when the server says the next
//!   snapshot is due, with fixed backoffs for outages and stale schedules
//! - **Replace-on-write**: each region's rows are swapped atomically, so
//!   readers always see a complete snapshot
//! - **Composable filters**: rank window, country set, team presence, and
//!   name prefix, combined freely
//! - **Country index**: per-region ISO 3166 display names for the filter UI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use divboard::{api, PlayerFilter, Region, storage::LeaderboardDb};
//!
//! # fn example() -> divboard::Result<()> {
//! let db = LeaderboardDb::open("leaderboard.db".as_ref())?;
//! let filter = PlayerFilter::from_params(Some(1), Some(100), Some("se,us"), Some("yes"), None);
//! let view = api::leaderboard_view(&db, Region::Europe, &filter)?;
//! println!("{} players", view.players.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod countries;
pub mod dota;
pub mod error;
pub mod filters;
pub mod storage;
pub mod sync;
pub mod types;

// Re-export commonly used types
pub use config::Settings;
pub use error::{Error, Result};
pub use filters::{PlayerFilter, TeamFilter};
pub use types::Region;
