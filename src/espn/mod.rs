//! ESPN fantasy football API access.

pub mod http;

pub use http::{EspnClient, LeagueSource, FFL_BASE_URL};
