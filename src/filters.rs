//! Query filters for leaderboard lookups.
//!
//! Every filter is optional and independently composable; malformed input is
//! resolved by dropping the constraint rather than rejecting the request.

/// Team-membership constraint.
///
/// `Yes` matches players whose team tag is present and non-empty, `No`
/// matches the rest, `Any` imposes no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TeamFilter {
    Yes,
    No,
    #[default]
    Any,
}

impl TeamFilter {
    /// Interpret the raw `team` query value. Anything other than `yes` or
    /// `no` (including absence) means no constraint.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("yes") => TeamFilter::Yes,
            Some("no") => TeamFilter::No,
            _ => TeamFilter::Any,
        }
    }
}

/// Composable filter set for [`find_players`](crate::storage::LeaderboardDb::find_players).
#[derive(Debug, Clone, Default)]
pub struct PlayerFilter {
    pub rank_from: Option<u32>,
    pub rank_to: Option<u32>,
    /// Country codes, matched case-insensitively. Empty means no constraint.
    pub countries: Vec<String>,
    pub team: TeamFilter,
    /// Case-insensitive prefix match against the player name.
    pub name_prefix: Option<String>,
}

impl PlayerFilter {
    /// Build a filter from the raw query-parameter shapes the presentation
    /// layer receives: a comma-separated country list and a free-form team
    /// value.
    pub fn from_params(
        rank_from: Option<u32>,
        rank_to: Option<u32>,
        countries: Option<&str>,
        team: Option<&str>,
        name_prefix: Option<&str>,
    ) -> Self {
        let countries = countries
            .map(|csv| {
                csv.split(',')
                    .map(str::trim)
                    .filter(|code| !code.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        PlayerFilter {
            rank_from,
            rank_to,
            countries,
            team: TeamFilter::from_param(team),
            name_prefix: name_prefix
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
        }
    }

    /// The inclusive rank window, only when both bounds were supplied.
    /// Supplying one bound is treated as supplying neither.
    pub fn rank_range(&self) -> Option<(u32, u32)> {
        self.rank_from.zip(self.rank_to)
    }
}
