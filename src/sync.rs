//! Background task keeping the mirrored leaderboards fresh.
//!
//! One fetch → persist → sleep cycle per iteration, forever. The sleep is
//! derived from the server's advertised next publish time; fixed backoffs
//! cover outages and stale schedules. Nothing in a cycle is fatal to the
//! loop.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::dota::{LeaderboardClient, Snapshot};
use crate::error::Result;
use crate::storage::models::{KEY_NEXT_SCHEDULED_POST_TIME, KEY_TIME_POSTED};
use crate::storage::LeaderboardDb;
use crate::types::Region;

/// Sleep after a cycle in which no region returned data.
pub const TOTAL_OUTAGE_BACKOFF: Duration = Duration::from_secs(300);
/// Sleep after a cycle that failed with an error.
pub const CYCLE_ERROR_BACKOFF: Duration = Duration::from_secs(60);
/// Sleep when the advertised next publish time is already in the past.
pub const STALE_SCHEDULE_FALLBACK: Duration = Duration::from_secs(3600);

/// Owned state of the sync loop: the sole writer handle to storage plus the
/// fetch client.
pub struct SyncTask {
    db: LeaderboardDb,
    client: LeaderboardClient,
}

impl SyncTask {
    pub fn new(db: LeaderboardDb, client: LeaderboardClient) -> Self {
        Self { db, client }
    }

    /// Run fetch → persist cycles until `shutdown` fires.
    ///
    /// Cancellation interrupts an in-progress sleep promptly; writes only
    /// happen inside the persist step, which commits per region.
    pub async fn run(mut self, shutdown: CancellationToken) {
        loop {
            let delay = match self.run_cycle().await {
                Ok(delay) => delay,
                Err(err) => {
                    error!(error = %err, "sync cycle failed");
                    CYCLE_ERROR_BACKOFF
                }
            };

            tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("sync task stopping");
                    return;
                }
                _ = tokio::time::sleep(delay) => {}
            }
        }
    }

    async fn run_cycle(&mut self) -> Result<Duration> {
        let Some(snapshot) = self.client.fetch_all(&Region::ALL).await else {
            warn!("no region returned data this cycle");
            return Ok(TOTAL_OUTAGE_BACKOFF);
        };

        persist_snapshot(&mut self.db, &snapshot)?;
        info!(
            regions = snapshot.boards.len(),
            time_posted = snapshot.time_posted,
            "leaderboards updated"
        );

        let delay = compute_sleep(snapshot.next_scheduled_post_time, epoch_now());
        info!(sleep_secs = delay.as_secs(), "next refresh scheduled");
        Ok(delay)
    }
}

/// Write a snapshot: one atomic replace per region with data, then both
/// metadata keys. Regions absent from the snapshot (or returned empty) keep
/// their previous rows; stale-but-present beats empty.
pub fn persist_snapshot(db: &mut LeaderboardDb, snapshot: &Snapshot) -> Result<()> {
    for (region, rows) in &snapshot.boards {
        if rows.is_empty() {
            continue;
        }
        db.replace_region(*region, rows)?;
    }

    db.upsert_metadata(KEY_TIME_POSTED, snapshot.time_posted)?;
    db.upsert_metadata(KEY_NEXT_SCHEDULED_POST_TIME, snapshot.next_scheduled_post_time)?;
    Ok(())
}

/// How long to sleep before the next cycle: until `next_update` if it is
/// strictly in the future, the fixed fallback otherwise.
pub fn compute_sleep(next_update: i64, now: i64) -> Duration {
    if next_update > now {
        Duration::from_secs((next_update - now) as u64)
    } else {
        STALE_SCHEDULE_FALLBACK
    }
}

fn epoch_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or(0)
}
