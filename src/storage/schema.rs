//! Database connection and schema management

use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;

/// Connection handle to the leaderboard database.
///
/// The sync task and each reader open their own handle; WAL mode lets
/// readers see the last committed snapshot while a replace is in progress.
pub struct LeaderboardDb {
    pub(crate) conn: Connection,
}

impl LeaderboardDb {
    /// Open (creating if needed) the database at `path` and ensure the
    /// schema exists. Safe to run on every startup.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.busy_timeout(std::time::Duration::from_secs(5))?;

        let db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// In-memory database for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema. Idempotent.
    pub(crate) fn initialize_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                region TEXT NOT NULL,
                rank INTEGER NOT NULL,
                name TEXT NOT NULL,
                team_id INTEGER,
                team_tag TEXT,
                sponsor TEXT,
                country TEXT,
                UNIQUE(region, rank)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS metadata (
                key TEXT PRIMARY KEY,
                value INTEGER
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_region ON players(region)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_country ON players(country)",
            [],
        )?;

        Ok(())
    }
}
