//! Replace-on-write updates and filtered lookups

use super::{models::*, schema::LeaderboardDb};
use crate::error::Result;
use crate::filters::{PlayerFilter, TeamFilter};
use crate::types::Region;
use rusqlite::{params, Row};

impl LeaderboardDb {
    /// Atomically substitute the stored row set for `region` with `rows`.
    ///
    /// Delete and bulk insert commit as one transaction: a concurrent reader
    /// observes either the old complete set or the new one, never a mix.
    pub fn replace_region(&mut self, region: Region, rows: &[PlayerRow]) -> Result<()> {
        let tx = self.conn.transaction()?;

        tx.execute("DELETE FROM players WHERE region = ?", params![region.as_str()])?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO players (region, rank, name, team_id, team_tag, sponsor, country)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
            )?;
            for row in rows {
                stmt.execute(params![
                    region.as_str(),
                    row.rank,
                    row.name,
                    row.team_id,
                    row.team_tag,
                    row.sponsor,
                    row.country,
                ])?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    /// Insert-or-replace a metadata value by key.
    pub fn upsert_metadata(&self, key: &str, value: i64) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO metadata (key, value) VALUES (?, ?)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Read the sync timestamps. Fields are None until the first cycle.
    pub fn read_metadata(&self) -> Result<SyncMetadata> {
        let mut stmt = self.conn.prepare("SELECT key, value FROM metadata")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?;

        let mut metadata = SyncMetadata::default();
        for row in rows {
            let (key, value) = row?;
            match key.as_str() {
                KEY_TIME_POSTED => metadata.time_posted = Some(value),
                KEY_NEXT_SCHEDULED_POST_TIME => {
                    metadata.next_scheduled_post_time = Some(value)
                }
                _ => {}
            }
        }
        Ok(metadata)
    }

    /// Filtered lookup against the stored rows for one region, always
    /// ordered by ascending rank.
    pub fn find_players(&self, region: Region, filter: &PlayerFilter) -> Result<Vec<PlayerRow>> {
        let mut query = String::from(
            "SELECT rank, name, team_id, team_tag, sponsor, country
             FROM players
             WHERE region = ?",
        );
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(region.as_str())];

        if let Some((from, to)) = filter.rank_range() {
            query.push_str(" AND rank BETWEEN ? AND ?");
            params.push(Box::new(from));
            params.push(Box::new(to));
        }

        if !filter.countries.is_empty() {
            query.push_str(" AND UPPER(country) IN (");
            for (i, code) in filter.countries.iter().enumerate() {
                if i > 0 {
                    query.push_str(", ");
                }
                query.push('?');
                params.push(Box::new(code.to_uppercase()));
            }
            query.push(')');
        }

        match filter.team {
            TeamFilter::Yes => query.push_str(" AND team_tag IS NOT NULL AND team_tag != ''"),
            TeamFilter::No => query.push_str(" AND (team_tag IS NULL OR team_tag = '')"),
            TeamFilter::Any => {}
        }

        if let Some(prefix) = &filter.name_prefix {
            query.push_str(" AND LOWER(name) LIKE ?");
            params.push(Box::new(format!("{}%", prefix.to_lowercase())));
        }

        query.push_str(" ORDER BY rank");

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(params.iter().map(|p| p.as_ref())),
            Self::row_to_player,
        )?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Distinct upper-cased country codes stored for a region.
    pub fn distinct_countries(&self, region: Region) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT UPPER(country) FROM players
             WHERE region = ? AND country IS NOT NULL",
        )?;

        let rows = stmt.query_map(params![region.as_str()], |row| row.get::<_, String>(0))?;

        let mut codes = Vec::new();
        for row in rows {
            codes.push(row?);
        }
        Ok(codes)
    }

    fn row_to_player(row: &Row) -> rusqlite::Result<PlayerRow> {
        Ok(PlayerRow {
            rank: row.get(0)?,
            name: row.get(1)?,
            team_id: row.get(2)?,
            team_tag: row.get(3)?,
            sponsor: row.get(4)?,
            country: row.get(5)?,
        })
    }
}
