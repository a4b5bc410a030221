use crate::classifier::{Classifier, ScoreError};
use crate::encoder::FeatureVector;
use serde::Serialize;
use tracing::{debug, warn};

/// Outcome of scoring one feature vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScoreResult {
    /// Probability of the positive (premium) class.
    Probability { positive: f64, percent: f64 },
    /// Raw predicted label from a classifier without probabilities.
    Class { label: String },
    Unavailable { reason: String },
}

impl ScoreResult {
    pub fn is_available(&self) -> bool {
        !matches!(self, ScoreResult::Unavailable { .. })
    }

    pub fn summary(&self) -> String {
        match self {
            ScoreResult::Probability { percent, .. } => format!("Premium likelihood: {percent:.1}%"),
            ScoreResult::Class { label } => format!("Predicted class: {label}"),
            ScoreResult::Unavailable { reason } => format!("Prediction unavailable ({reason})"),
        }
    }
}

fn positive_probability(probabilities: Vec<f64>) -> Result<f64, ScoreError> {
    let p = *probabilities
        .get(1)
        .ok_or(ScoreError::MissingPositiveClass(probabilities.len()))?;
    if p.is_finite() { Ok(p) } else { Err(ScoreError::NonFinite) }
}

/// Score with whichever capability the classifier offers, probability first.
/// Never fails: any error becomes [`ScoreResult::Unavailable`].
pub fn score(classifier: &dyn Classifier, features: &FeatureVector) -> ScoreResult {
    let input = features.to_f64();

    let outcome = if classifier.supports_probability() {
        classifier
            .predict_proba(&input)
            .and_then(positive_probability)
            .map(|p| ScoreResult::Probability { positive: p, percent: p * 100.0 })
    } else if classifier.supports_prediction() {
        classifier.predict(&input).map(|label| ScoreResult::Class { label })
    } else {
        Err(ScoreError::Unsupported("probability scoring or class prediction"))
    };

    match outcome {
        Ok(result) => {
            debug!(?result, "scored feature vector");
            result
        }
        Err(e) => {
            warn!(error = %e, "prediction unavailable");
            ScoreResult::Unavailable { reason: e.to_string() }
        }
    }
}
