//! Region identifiers for the division leaderboards.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// A leaderboard division.
///
/// Each region is an independent ranking universe; the set is fixed by the
/// remote service and not user-extensible.
///
/// # Examples
///
/// ```rust
/// use divboard::Region;
///
/// let region: Region = "europe".parse().unwrap();
/// assert_eq!(region.as_str(), "europe");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Americas,
    Europe,
    SeAsia,
    China,
}

impl Region {
    /// All divisions, in the order they are fetched.
    pub const ALL: [Region; 4] = [
        Region::Americas,
        Region::Europe,
        Region::SeAsia,
        Region::China,
    ];

    /// The identifier the remote API and the database use for this region.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Americas => "americas",
            Region::Europe => "europe",
            Region::SeAsia => "se_asia",
            Region::China => "china",
        }
    }
}

impl serde::Serialize for Region {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "americas" => Ok(Region::Americas),
            "europe" => Ok(Region::Europe),
            "se_asia" => Ok(Region::SeAsia),
            "china" => Ok(Region::China),
            _ => Err(Error::InvalidRegion {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_round_trip() {
        for region in Region::ALL {
            let parsed: Region = region.as_str().parse().unwrap();
            assert_eq!(parsed, region);
        }
    }

    #[test]
    fn test_region_parse_is_case_insensitive() {
        assert_eq!("Europe".parse::<Region>().unwrap(), Region::Europe);
        assert_eq!("SE_ASIA".parse::<Region>().unwrap(), Region::SeAsia);
    }

    #[test]
    fn test_region_parse_rejects_unknown() {
        assert!("atlantis".parse::<Region>().is_err());
        assert!("".parse::<Region>().is_err());
    }

    #[test]
    fn test_region_display_matches_wire_name() {
        assert_eq!(Region::SeAsia.to_string(), "se_asia");
        assert_eq!(Region::Americas.to_string(), "americas");
    }
}
