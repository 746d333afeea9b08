//! HTTP client for the division leaderboard endpoint.

use futures::future::join_all;
use reqwest::Client;
use tracing::warn;

use super::types::{assign_ranks, DivisionResponse, Snapshot};
use crate::config::Settings;
use crate::error::Result;
use crate::types::Region;

/// The leaderboard variant pinned by the original service.
const LEADERBOARD_VARIANT: &str = "0";

/// Client for fetching division leaderboards.
pub struct LeaderboardClient {
    http: Client,
    base_url: String,
}

impl LeaderboardClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("divboard/", env!("CARGO_PKG_VERSION")))
            .timeout(settings.request_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: settings.api_base_url.clone(),
        })
    }

    /// Fetch one division's leaderboard.
    pub async fn fetch_division(&self, region: Region) -> Result<DivisionResponse> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("division", region.as_str()),
                ("leaderboard", LEADERBOARD_VARIANT),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<DivisionResponse>()
            .await?;

        Ok(response)
    }

    /// Fetch every region concurrently, keeping whatever succeeds.
    ///
    /// A failing call leaves its region absent from the snapshot and is
    /// logged; overall time is bounded by the slowest surviving call. The
    /// snapshot timestamps are the per-field maxima across survivors.
    /// Returns None when every region failed.
    pub async fn fetch_all(&self, regions: &[Region]) -> Option<Snapshot> {
        let calls = regions.iter().map(|region| self.fetch_division(*region));
        let results = join_all(calls).await;

        let mut boards = Vec::new();
        let mut time_posted = 0_i64;
        let mut next_scheduled_post_time = 0_i64;

        for (region, result) in regions.iter().zip(results) {
            match result {
                Ok(division) => {
                    time_posted = time_posted.max(division.time_posted);
                    next_scheduled_post_time =
                        next_scheduled_post_time.max(division.next_scheduled_post_time);
                    boards.push((*region, assign_ranks(division.leaderboard)));
                }
                Err(err) => {
                    warn!(region = %region, error = %err, "leaderboard fetch failed");
                }
            }
        }

        if boards.is_empty() {
            return None;
        }

        Some(Snapshot {
            boards,
            time_posted,
            next_scheduled_post_time,
        })
    }
}
