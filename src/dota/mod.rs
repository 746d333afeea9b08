//! Client for the Dota 2 division leaderboard web API.

pub mod http;
pub mod types;

pub use http::LeaderboardClient;
pub use types::{DivisionResponse, Snapshot};
