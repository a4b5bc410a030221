//! Shared types for the moodmix recommender: form inputs, artifact errors and
//! process configuration.

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, ArtifactsConfig, DisplayConfig, ServerConfig, TelemetryConfig};
pub use error::{ArtifactError, ConfigError, InputError};
pub use types::{AgeGroup, Gender, Mood, PodcastFrequency, TimeSlot, UserQuery};
