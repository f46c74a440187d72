//! ID types for ESPN fantasy leagues.

use crate::error::{EspnError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for ESPN fantasy League IDs.
///
/// League IDs are always positive; zero is rejected when parsing.
///
/// # Examples
///
/// ```rust
/// use espn_extractor::LeagueId;
///
/// let league_id: LeagueId = "123456".parse().unwrap();
/// assert_eq!(league_id.as_u32(), 123456);
/// assert_eq!(league_id.to_string(), "123456");
/// assert!("0".parse::<LeagueId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueId(pub u32);

impl LeagueId {
    /// Create a new LeagueId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().parse::<u32>()? {
            0 => Err(EspnError::NotPositive),
            id => Ok(Self(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_id_parse() {
        assert_eq!("42".parse::<LeagueId>().unwrap(), LeagueId::new(42));
        assert_eq!(" 42 ".parse::<LeagueId>().unwrap(), LeagueId::new(42));
    }

    #[test]
    fn test_league_id_rejects_zero_and_negative() {
        assert!(matches!("0".parse::<LeagueId>(), Err(EspnError::NotPositive)));
        assert!(matches!(
            "-5".parse::<LeagueId>(),
            Err(EspnError::InvalidLeagueId(_))
        ));
        assert!("abc".parse::<LeagueId>().is_err());
    }
}
