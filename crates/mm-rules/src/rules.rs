//! Ordered rule matching with keyword fallback.

use crate::config::{default_fallbacks, DEFAULT_PLAYLIST};
use crate::types::{FallbackGroup, MatchSource, Recommendation, Rule, RuleError, ANY};
use mm_core::error::{read_artifact, ArtifactError};
use std::path::Path;
use tracing::debug;

/// Validated, ordered rule table. First match wins; there is no specificity
/// scoring, so narrow rules must precede wildcard rules.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
    fallbacks: Vec<FallbackGroup>,
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>) -> Result<Self, RuleError> {
        for (index, rule) in rules.iter().enumerate() {
            if rule.genre_keywords.is_empty() {
                return Err(RuleError::NoGenreKeywords { index });
            }
            if rule.genre_keywords.iter().any(|kw| kw.trim().is_empty()) {
                return Err(RuleError::BlankKeyword { index });
            }
            if rule.playlist.trim().is_empty() {
                return Err(RuleError::EmptyPlaylist { index });
            }
        }
        Ok(Self { rules, fallbacks: default_fallbacks() })
    }

    /// Load a JSON array of rules.
    pub fn from_json_file(path: &Path) -> Result<Self, ArtifactError> {
        let raw = read_artifact(path)?;
        let rules: Vec<Rule> = serde_json::from_str(&raw).map_err(|source| ArtifactError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(rules).map_err(|e| ArtifactError::Invalid(format!("{}: {e}", path.display())))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Recommend a playlist. Never fails; always yields a non-empty label.
    pub fn recommend(&self, time_slot: &str, mood: &str, genre_text: &str) -> Recommendation {
        let genre = genre_text.to_lowercase();

        if let Some((index, rule)) = self
            .rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule_matches(rule, time_slot, mood, &genre))
        {
            debug!(index, playlist = %rule.playlist, "rule matched");
            return Recommendation {
                playlist: rule.playlist.clone(),
                icon: rule.icon.clone(),
                source: MatchSource::Rule {
                    index,
                    time_slots: rule.time_slots.clone(),
                    moods: rule.moods.clone(),
                },
            };
        }

        for group in &self.fallbacks {
            if let Some(kw) = group.keywords.iter().find(|kw| genre.contains(kw.as_str())) {
                debug!(keyword = %kw, playlist = %group.playlist, "keyword fallback");
                return Recommendation {
                    playlist: group.playlist.clone(),
                    icon: group.icon.clone(),
                    source: MatchSource::Keyword { keyword: kw.clone() },
                };
            }
        }

        debug!("no rule or keyword matched, using default playlist");
        Recommendation {
            playlist: DEFAULT_PLAYLIST.0.to_string(),
            icon: DEFAULT_PLAYLIST.1.to_string(),
            source: MatchSource::Default,
        }
    }

    /// Just the playlist label.
    pub fn recommend_label(&self, time_slot: &str, mood: &str, genre_text: &str) -> String {
        self.recommend(time_slot, mood, genre_text).playlist
    }
}

fn accepts(values: &[String], input: &str) -> bool {
    values.iter().any(|v| v == input || v == ANY)
}

// Substring containment, or the podcast special case: a rule listing
// "Podcast" also fires on any genre text containing "pod".
fn genre_matches(keywords: &[String], genre_lower: &str) -> bool {
    keywords.iter().any(|kw| genre_lower.contains(kw.to_lowercase().as_str()))
        || (keywords.iter().any(|kw| kw == "Podcast") && genre_lower.contains("pod"))
}

fn rule_matches(rule: &Rule, time_slot: &str, mood: &str, genre_lower: &str) -> bool {
    accepts(&rule.time_slots, time_slot)
        && accepts(&rule.moods, mood)
        && genre_matches(&rule.genre_keywords, genre_lower)
}
