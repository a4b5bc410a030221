use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wildcard accepted in `time_slots` and `moods`.
pub const ANY: &str = "Any";

/// One row of the rule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub time_slots: Vec<String>,
    pub moods: Vec<String>,
    pub genre_keywords: Vec<String>,
    pub playlist: String,
    #[serde(default)]
    pub icon: String,
}

/// Why a playlist was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchSource {
    /// Rule at `index` in table order matched.
    Rule {
        index: usize,
        time_slots: Vec<String>,
        moods: Vec<String>,
    },
    /// No rule matched; a genre keyword picked a fallback playlist.
    Keyword { keyword: String },
    Default,
}

/// Output of the rule matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub playlist: String,
    pub icon: String,
    pub source: MatchSource,
}

impl Recommendation {
    /// Icon and label joined for display.
    pub fn display(&self) -> String {
        if self.icon.is_empty() {
            self.playlist.clone()
        } else {
            format!("{} {}", self.icon, self.playlist)
        }
    }
}

/// Keyword fallback group: checked in order when no rule matches.
#[derive(Debug, Clone)]
pub struct FallbackGroup {
    pub keywords: Vec<String>,
    pub playlist: String,
    pub icon: String,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RuleError {
    #[error("Rule {index} has no genre keywords")]
    NoGenreKeywords { index: usize },
    #[error("Rule {index} has a blank genre keyword")]
    BlankKeyword { index: usize },
    #[error("Rule {index} has an empty playlist label")]
    EmptyPlaylist { index: usize },
}
