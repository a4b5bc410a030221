//! Playlist rule matcher: ordered (time slot, mood, genre) rules with a
//! genre-keyword fallback chain.

pub mod config;
pub mod rules;
pub mod types;

pub use config::DEFAULT_RULES;
pub use rules::RuleTable;
pub use types::*;

/// Recommend from the built-in rule table.
pub fn recommend(time_slot: &str, mood: &str, genre_text: &str) -> Recommendation {
    DEFAULT_RULES.recommend(time_slot, mood, genre_text)
}
