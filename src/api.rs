//! Read contract consumed by the presentation layer.

use serde::Serialize;

use crate::countries::{country_index, CountryOption};
use crate::error::Result;
use crate::filters::PlayerFilter;
use crate::storage::models::{PlayerRow, SyncMetadata};
use crate::storage::LeaderboardDb;
use crate::types::Region;

/// Everything one leaderboard page needs: the filtered rows, the sync
/// timestamps, and the region's country index for the filter dropdown.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardView {
    pub region: Region,
    pub players: Vec<PlayerRow>,
    pub metadata: SyncMetadata,
    pub countries: Vec<CountryOption>,
}

/// Answer one read request against the cached leaderboards.
pub fn leaderboard_view(
    db: &LeaderboardDb,
    region: Region,
    filter: &PlayerFilter,
) -> Result<LeaderboardView> {
    let players = db.find_players(region, filter)?;
    let metadata = db.read_metadata()?;
    let countries = country_index(db.distinct_countries(region)?);

    Ok(LeaderboardView {
        region,
        players,
        metadata,
        countries,
    })
}
