//! Wire types for the division leaderboard payload.

use crate::storage::models::PlayerRow;
use crate::types::Region;
use serde::Deserialize;

/// Response body of one division leaderboard request.
///
/// The service omits fields rather than sending null, so everything is
/// defaulted.
#[derive(Debug, Clone, Deserialize)]
pub struct DivisionResponse {
    #[serde(default)]
    pub leaderboard: Vec<ApiPlayer>,
    /// Epoch seconds at which this snapshot was published.
    #[serde(default)]
    pub time_posted: i64,
    /// Epoch seconds at which the next snapshot is expected.
    #[serde(default)]
    pub next_scheduled_post_time: i64,
}

/// One leaderboard entry as the API returns it. The list order is the
/// authoritative ranking; the API sends no explicit rank field.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPlayer {
    #[serde(default)]
    pub name: String,
    pub team_id: Option<i64>,
    pub team_tag: Option<String>,
    pub sponsor: Option<String>,
    pub country: Option<String>,
}

/// Everything one fetch cycle produced: the ranked rows per surviving
/// region plus the timestamp maxima across them.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub boards: Vec<(Region, Vec<PlayerRow>)>,
    pub time_posted: i64,
    pub next_scheduled_post_time: i64,
}

/// Assign dense 1-based ranks by enumerating the list in the order the
/// server returned it.
pub(crate) fn assign_ranks(entries: Vec<ApiPlayer>) -> Vec<PlayerRow> {
    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| PlayerRow {
            rank: idx as u32 + 1,
            name: entry.name,
            team_id: entry.team_id,
            team_tag: entry.team_tag,
            sponsor: entry.sponsor,
            country: entry.country,
        })
        .collect()
}
