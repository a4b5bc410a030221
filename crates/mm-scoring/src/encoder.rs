use mm_core::UserQuery;
use serde::Serialize;

pub const FEATURE_WIDTH: usize = 5;

/// Position names; a classifier is assumed to be trained on this exact order.
pub const FEATURE_NAMES: [&str; FEATURE_WIDTH] = [
    "mood_energetic",
    "time_morning",
    "genre_pop",
    "podcast_daily",
    "gender_female",
];

const ENERGETIC_MOODS: [&str; 4] = ["energetic", "upbeat", "happy", "party"];

/// Binary feature vector, position-significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureVector(pub [u8; FEATURE_WIDTH]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn to_f64(&self) -> Vec<f64> {
        self.0.iter().map(|&b| f64::from(b)).collect()
    }
}

fn flag(hit: bool) -> u8 {
    u8::from(hit)
}

/// Encode the form fields. Total: any string, including empty, is accepted.
pub fn encode(mood: &str, time_slot: &str, genre_text: &str, podcast_freq: &str, gender: &str) -> FeatureVector {
    let mood = mood.to_lowercase();
    FeatureVector([
        flag(ENERGETIC_MOODS.iter().any(|m| mood.contains(m))),
        flag(time_slot.to_lowercase().contains("morning")),
        flag(genre_text.to_lowercase().contains("pop")),
        flag(podcast_freq.to_lowercase().contains("daily")),
        flag(gender.to_lowercase().contains("female")),
    ])
}

/// Encode a query; absent fields read as empty.
pub fn encode_query(query: &UserQuery) -> FeatureVector {
    encode(
        query.mood(),
        query.time_slot(),
        query.genre_text(),
        query.podcast_freq(),
        query.gender(),
    )
}
