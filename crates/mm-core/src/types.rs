//! Form inputs collected by the presentation surface.

use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

macro_rules! form_enum {
    ($(#[$meta:meta])* $name:ident, $field:literal { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            /// Display strings in form order.
            pub fn options() -> Vec<&'static str> {
                Self::ALL.iter().map(|v| v.as_str()).collect()
            }
        }

        impl FromStr for $name {
            type Err = InputError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| InputError::UnknownValue { field: $field, value: s.to_string() })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

form_enum!(
    /// Age bracket.
    AgeGroup, "age_group" {
        Teen => "12-20",
        YoungAdult => "20-35",
        Adult => "35-60",
        Senior => "60+",
    }
);

form_enum!(
    Gender, "gender" {
        Female => "Female",
        Male => "Male",
        Other => "Other",
        Undisclosed => "Prefer not to say",
    }
);

form_enum!(
    /// Time of day the user usually listens.
    TimeSlot, "time_slot" {
        Morning => "Morning",
        EarlyMorning => "Early Morning",
        Afternoon => "Afternoon",
        Evening => "Evening",
        Night => "Night",
    }
);

form_enum!(
    /// Mood or influential situation. `Any` is the form default.
    Mood, "mood" {
        Upbeat => "Upbeat",
        Energetic => "Energetic",
        Relaxed => "Relaxed",
        Calm => "Calm",
        Melancholy => "Sadness or melancholy",
        Reflective => "Reflective",
        Excited => "Excited",
        Any => "Any",
    }
);

form_enum!(
    PodcastFrequency, "podcast_freq" {
        Never => "Never",
        Monthly => "Monthly",
        Weekly => "Weekly",
        Daily => "Daily",
    }
);

/// One request's worth of form input. Every field may be absent; absent
/// fields read as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserQuery {
    pub age_group: Option<String>,
    pub gender: Option<String>,
    pub time_slot: Option<String>,
    pub mood: Option<String>,
    pub genre_text: Option<String>,
    pub podcast_freq: Option<String>,
}

impl UserQuery {
    pub fn new(time_slot: impl Into<String>, mood: impl Into<String>, genre_text: impl Into<String>) -> Self {
        Self {
            time_slot: Some(time_slot.into()),
            mood: Some(mood.into()),
            genre_text: Some(genre_text.into()),
            ..Self::default()
        }
    }

    pub fn with_age_group(mut self, age_group: impl Into<String>) -> Self {
        self.age_group = Some(age_group.into());
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_podcast_freq(mut self, podcast_freq: impl Into<String>) -> Self {
        self.podcast_freq = Some(podcast_freq.into());
        self
    }

    pub fn age_group(&self) -> &str {
        self.age_group.as_deref().unwrap_or("")
    }

    pub fn gender(&self) -> &str {
        self.gender.as_deref().unwrap_or("")
    }

    pub fn time_slot(&self) -> &str {
        self.time_slot.as_deref().unwrap_or("")
    }

    pub fn mood(&self) -> &str {
        self.mood.as_deref().unwrap_or("")
    }

    pub fn genre_text(&self) -> &str {
        self.genre_text.as_deref().unwrap_or("")
    }

    pub fn podcast_freq(&self) -> &str {
        self.podcast_freq.as_deref().unwrap_or("")
    }

    /// Comma-separated genres, trimmed and lowercased. Empty parts are dropped.
    pub fn genre_tokens(&self) -> Vec<String> {
        genre_tokens(self.genre_text())
    }

    /// Check every present enumerated field against its allowed values.
    /// `genre_text` is free text and always accepted.
    pub fn validate(&self) -> Result<(), InputError> {
        if let Some(v) = &self.age_group {
            v.parse::<AgeGroup>()?;
        }
        if let Some(v) = &self.gender {
            v.parse::<Gender>()?;
        }
        if let Some(v) = &self.time_slot {
            v.parse::<TimeSlot>()?;
        }
        if let Some(v) = &self.mood {
            v.parse::<Mood>()?;
        }
        if let Some(v) = &self.podcast_freq {
            v.parse::<PodcastFrequency>()?;
        }
        Ok(())
    }
}

/// Split free-text genres on commas, trim and lowercase each part.
pub fn genre_tokens(genre_text: &str) -> Vec<String> {
    genre_text
        .split(',')
        .map(|g| g.trim().to_lowercase())
        .filter(|g| !g.is_empty())
        .collect()
}
