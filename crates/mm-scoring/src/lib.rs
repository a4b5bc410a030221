//! Premium-likelihood scoring: a fixed 5-position binary encoding of the form
//! inputs, fed to an externally trained classifier.

pub mod classifier;
pub mod encoder;
pub mod scorer;

pub use classifier::{load_classifier, Classifier, LinearModel, ModelKind, ScoreError};
pub use encoder::{encode, encode_query, FeatureVector, FEATURE_NAMES, FEATURE_WIDTH};
pub use scorer::{score, ScoreResult};

#[cfg(test)]
mod tests;
