use crate::*;
use mm_core::UserQuery;
use std::io::Write;

fn logistic(coefficients: Vec<f64>, intercept: f64) -> LinearModel {
    LinearModel {
        kind: ModelKind::Logistic,
        classes: vec!["free".into(), "premium".into()],
        coefficients,
        intercept,
    }
}

struct Inert;
impl Classifier for Inert {}

struct OneClass;
impl Classifier for OneClass {
    fn supports_probability(&self) -> bool { true }
    fn predict_proba(&self, _features: &[f64]) -> Result<Vec<f64>, ScoreError> { Ok(vec![1.0]) }
}

struct LabelOnly;
impl Classifier for LabelOnly {
    fn supports_prediction(&self) -> bool { true }
    fn predict(&self, _features: &[f64]) -> Result<String, ScoreError> { Ok("1".into()) }
}

// ========== Encoding ==========

#[test]
fn test_encode_all_ones() {
    assert_eq!(encode("Energetic", "Morning", "Pop", "Daily", "Female"), FeatureVector([1, 1, 1, 1, 1]));
}

#[test]
fn test_encode_all_zeros() {
    assert_eq!(encode("Calm", "Evening", "Jazz", "Never", "Male"), FeatureVector([0, 0, 0, 0, 0]));
}

#[test]
fn test_encode_substring_semantics() {
    // "Early Morning" contains "morning"; "K-pop" contains "pop".
    let v = encode("Upbeat", "Early Morning", "K-pop", "Weekly", "Prefer not to say");
    assert_eq!(v, FeatureVector([1, 1, 1, 0, 0]));
}

#[test]
fn test_encode_party_mood() {
    assert_eq!(encode("party time", "", "", "", "").as_slice(), &[1, 0, 0, 0, 0]);
}

#[test]
fn test_encode_empty_fields() {
    assert_eq!(encode("", "", "", "", ""), FeatureVector([0; FEATURE_WIDTH]));
}

#[test]
fn test_encode_query_missing_fields() {
    let q = UserQuery { mood: Some("Happy".into()), ..UserQuery::default() };
    assert_eq!(encode_query(&q), FeatureVector([1, 0, 0, 0, 0]));
}

#[test]
fn test_encode_query_full() {
    let q = UserQuery::new("Morning", "Energetic", "Pop, EDM")
        .with_podcast_freq("Daily")
        .with_gender("Female");
    assert_eq!(encode_query(&q).to_f64(), vec![1.0; 5]);
}

#[test]
fn test_feature_names_match_width() {
    assert_eq!(FEATURE_NAMES.len(), FEATURE_WIDTH);
    assert_eq!(FEATURE_NAMES[2], "genre_pop");
}

// ========== Scoring ==========

#[test]
fn test_score_probability() {
    let m = logistic(vec![0.0; 5], 0.0);
    let r = score(&m, &FeatureVector([1, 0, 1, 0, 1]));
    assert_eq!(r, ScoreResult::Probability { positive: 0.5, percent: 50.0 });
    assert_eq!(r.summary(), "Premium likelihood: 50.0%");
}

#[test]
fn test_score_probability_direction() {
    let m = logistic(vec![2.0, 0.0, 0.0, 0.0, 0.0], -1.0);
    let hi = score(&m, &FeatureVector([1, 0, 0, 0, 0]));
    let lo = score(&m, &FeatureVector([0, 0, 0, 0, 0]));
    match (hi, lo) {
        (ScoreResult::Probability { positive: a, .. }, ScoreResult::Probability { positive: b, .. }) => {
            assert!(a > 0.5 && b < 0.5);
        }
        other => panic!("expected probabilities, got {other:?}"),
    }
}

#[test]
fn test_score_linear_reports_class() {
    let m = LinearModel { kind: ModelKind::Linear, ..logistic(vec![1.0; 5], -2.5) };
    assert_eq!(score(&m, &FeatureVector([1, 1, 1, 0, 0])), ScoreResult::Class { label: "premium".into() });
    assert_eq!(score(&m, &FeatureVector([1, 0, 0, 0, 0])), ScoreResult::Class { label: "free".into() });
}

#[test]
fn test_score_shape_mismatch_is_unavailable() {
    let m = logistic(vec![0.1; 12], 0.0);
    let r = score(&m, &FeatureVector([1; 5]));
    assert!(!r.is_available());
    match r {
        ScoreResult::Unavailable { reason } => assert!(reason.contains("expected 12, got 5")),
        other => panic!("expected unavailable, got {other:?}"),
    }
}

#[test]
fn test_score_without_capabilities_is_unavailable() {
    let r = score(&Inert, &FeatureVector([0; 5]));
    assert!(matches!(r, ScoreResult::Unavailable { .. }));
    assert!(r.summary().starts_with("Prediction unavailable"));
}

#[test]
fn test_score_single_class_probability_is_unavailable() {
    assert!(!score(&OneClass, &FeatureVector([0; 5])).is_available());
}

#[test]
fn test_score_label_only_classifier() {
    assert_eq!(score(&LabelOnly, &FeatureVector([0; 5])), ScoreResult::Class { label: "1".into() });
}

#[test]
fn test_score_one_class_linear_model_is_unavailable() {
    // Built directly, so `validate()` never ran.
    let m = LinearModel {
        kind: ModelKind::Linear,
        classes: vec!["only".into()],
        coefficients: vec![1.0; 5],
        intercept: 0.0,
    };
    let r = score(&m, &FeatureVector([1; 5]));
    assert!(!r.is_available());
    assert_eq!(m.predict(&[1.0; 5]), Err(ScoreError::MissingClass { index: 1, classes: 1 }));
}

#[test]
fn test_score_classless_model_is_unavailable() {
    let m = LinearModel { kind: ModelKind::Linear, classes: vec![], ..logistic(vec![0.0; 5], -1.0) };
    assert!(matches!(score(&m, &FeatureVector([0; 5])), ScoreResult::Unavailable { .. }));
}

#[test]
fn test_linear_model_rejects_probability() {
    let m = LinearModel { kind: ModelKind::Linear, ..logistic(vec![1.0; 5], 0.0) };
    assert_eq!(m.predict_proba(&[0.0; 5]), Err(ScoreError::Unsupported("probability scoring")));
}

#[test]
fn test_score_result_serializes_tagged() {
    let json = serde_json::to_value(ScoreResult::Class { label: "premium".into() }).unwrap();
    assert_eq!(json["status"], "class");
    assert_eq!(json["label"], "premium");
}

// ========== Artifact Loading ==========

#[test]
fn test_load_classifier() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(f, r#"{{"kind": "logistic", "classes": ["free", "premium"], "coefficients": [0.4, 0.1, 0.8, 1.2, 0.2], "intercept": -1.0}}"#).unwrap();
    let c = load_classifier(f.path()).unwrap();
    assert!(c.supports_probability());
    assert!(score(c.as_ref(), &encode("Energetic", "Morning", "Pop", "Daily", "Female")).is_available());
}

#[test]
fn test_load_classifier_missing() {
    let err = load_classifier(std::path::Path::new("/nonexistent/premium_classifier.json")).err().unwrap();
    assert!(err.is_missing());
}

#[test]
fn test_load_classifier_bad_classes() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(f, r#"{{"kind": "linear", "classes": ["only"], "coefficients": [1.0]}}"#).unwrap();
    let err = load_classifier(f.path()).err().unwrap();
    assert!(matches!(err, mm_core::ArtifactError::Invalid(_)));
}

#[test]
fn test_load_classifier_unknown_kind() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(f, r#"{{"kind": "forest", "classes": ["a", "b"], "coefficients": [1.0]}}"#).unwrap();
    let err = load_classifier(f.path()).err().unwrap();
    assert!(matches!(err, mm_core::ArtifactError::Parse { .. }));
}
