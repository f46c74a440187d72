//! Type-safe wrappers for CLI inputs.

pub mod delimiter;
pub mod ids;
pub mod time;

pub use delimiter::Delimiter;
pub use ids::LeagueId;
pub use time::{Season, SeasonRange};
