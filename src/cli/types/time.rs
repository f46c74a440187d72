//! Season years and inclusive season ranges.

use crate::error::{EspnError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First season served by the current league endpoint. Older seasons are
/// only reachable through the league history endpoint.
pub const FIRST_CURRENT_ENDPOINT_SEASON: u16 = 2018;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Whether this season predates the current league endpoint.
    pub fn is_historical(&self) -> bool {
        self.0 < FIRST_CURRENT_ENDPOINT_SEASON
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().parse::<u16>() {
            Ok(0) => Err(EspnError::NotPositive),
            Ok(year) => Ok(Self(year)),
            Err(_) => Err(EspnError::NotPositive),
        }
    }
}

/// Inclusive range of seasons, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonRange {
    start: Season,
    end: Season,
}

impl SeasonRange {
    pub fn new(start: Season, end: Season) -> Result<Self> {
        if start > end {
            return Err(EspnError::InvalidSeasonRange {
                start: start.as_u16(),
                end: end.as_u16(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Season {
        self.start
    }

    pub fn end(&self) -> Season {
        self.end
    }

    pub fn len(&self) -> usize {
        usize::from(self.end.0 - self.start.0) + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = Season> {
        (self.start.0..=self.end.0).map(Season)
    }
}

impl fmt::Display for SeasonRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
