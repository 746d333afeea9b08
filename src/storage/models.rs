//! Data models for the storage layer

use serde::Serialize;

/// One ranked leaderboard entry as stored and served.
///
/// The region is carried alongside the rows, not inside them: a row set is
/// always replaced and queried per region as a whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRow {
    /// 1-based position within the region; dense, no gaps.
    pub rank: u32,
    /// Display name; non-null but may be empty.
    pub name: String,
    pub team_id: Option<i64>,
    pub team_tag: Option<String>,
    pub sponsor: Option<String>,
    /// ISO 3166-1 alpha-2 code, stored as received.
    pub country: Option<String>,
}

/// Timestamps of the most recent successful sync cycle.
///
/// Both fields are absent until the first cycle completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SyncMetadata {
    /// Epoch seconds of the snapshot currently served.
    pub time_posted: Option<i64>,
    /// Epoch seconds at which the remote source expects to publish next.
    pub next_scheduled_post_time: Option<i64>,
}

/// Metadata key for the snapshot timestamp.
pub const KEY_TIME_POSTED: &str = "time_posted";
/// Metadata key for the advertised next publish time.
pub const KEY_NEXT_SCHEDULED_POST_TIME: &str = "next_scheduled_post_time";
