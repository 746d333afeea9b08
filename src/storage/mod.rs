//! Storage layer for the leaderboard mirror.
//!
//! A thin abstraction over the SQLite database, organized into logical
//! components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Replace-on-write updates and filtered lookups

pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::LeaderboardDb;
