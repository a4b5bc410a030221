//! Application state shared across all handlers. Read-only after start-up.

use crate::artifacts::Artifacts;
use mm_cluster::ClusterTable;
use mm_core::DisplayConfig;
use mm_rules::{RuleTable, DEFAULT_RULES};
use mm_scoring::Classifier;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub rules: Arc<RuleTable>,
    pub clusters: Option<Arc<ClusterTable>>,
    pub classifier: Option<Arc<dyn Classifier>>,
    /// Informational messages about disabled features.
    pub notices: Arc<Vec<String>>,
    pub top_features: usize,
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Built-in rules only; cluster and premium features disabled.
    pub fn new() -> Self {
        Self {
            rules: Arc::new(DEFAULT_RULES.clone()),
            clusters: None,
            classifier: None,
            notices: Arc::new(Vec::new()),
            top_features: DisplayConfig::default().top_features,
            start_time: std::time::Instant::now(),
        }
    }

    pub fn from_artifacts(artifacts: Artifacts, display: &DisplayConfig) -> Self {
        Self {
            rules: Arc::new(artifacts.rules),
            clusters: artifacts.clusters.map(Arc::new),
            classifier: artifacts.classifier,
            notices: Arc::new(artifacts.notices),
            top_features: display.top_features,
            start_time: std::time::Instant::now(),
        }
    }

    pub fn with_clusters(mut self, table: ClusterTable) -> Self {
        self.clusters = Some(Arc::new(table));
        self
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn Classifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
