//! Runtime configuration, read from the environment once at startup.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DB_PATH_ENV_VAR: &str = "DIVBOARD_DB_PATH";
pub const API_URL_ENV_VAR: &str = "DIVBOARD_API_URL";
pub const HTTP_TIMEOUT_ENV_VAR: &str = "DIVBOARD_HTTP_TIMEOUT_SECS";

const DEFAULT_DB_PATH: &str = "leaderboard.db";
const DEFAULT_API_URL: &str =
    "https://www.dota2.com/webapi/ILeaderboard/GetDivisionLeaderboard/v0001";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Settings for the sync engine, passed into the components at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Location of the SQLite file holding the mirrored leaderboards.
    pub db_path: PathBuf,
    /// Base URL of the division leaderboard endpoint.
    pub api_base_url: String,
    /// Per-request timeout for leaderboard fetches.
    pub request_timeout: Duration,
}

impl Settings {
    pub fn from_env() -> Self {
        let db_path = env::var(DB_PATH_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_PATH));

        let api_base_url =
            env::var(API_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let request_timeout = env::var(HTTP_TIMEOUT_ENV_VAR)
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS));

        Settings {
            db_path,
            api_base_url,
            request_timeout,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}
