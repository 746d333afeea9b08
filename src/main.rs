//! Entry point: open storage, run the sync loop until a shutdown signal.

use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use divboard::{
    config::Settings, dota::LeaderboardClient, storage::LeaderboardDb, sync::SyncTask,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let settings = Settings::from_env();
    info!(db_path = %settings.db_path.display(), "starting leaderboard mirror");

    // Schema initialization is the one fatal startup step; everything after
    // this point retries instead of exiting.
    let db = LeaderboardDb::open(&settings.db_path).context("opening leaderboard database")?;
    let client = LeaderboardClient::new(&settings).context("building leaderboard client")?;

    let shutdown = CancellationToken::new();
    let sync_task = tokio::spawn(SyncTask::new(db, client).run(shutdown.clone()));

    // The presentation layer serves reads against the same database file for
    // as long as the sync task runs.
    shutdown_signal().await;
    info!("shutdown signal received");
    shutdown.cancel();
    sync_task.await.context("joining sync task")?;

    Ok(())
}

/// Configure tracing subscribers; RUST_LOG overrides the default level.
fn init_tracing() {
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut term = signal(SignalKind::terminate()).expect("install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = term.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
