//! One-shot loading of the read-only artifacts. A failed load disables the
//! matching feature and leaves a notice; it never aborts start-up.

use mm_cluster::ClusterTable;
use mm_core::{ArtifactError, ArtifactsConfig};
use mm_rules::{RuleTable, DEFAULT_RULES};
use mm_scoring::{load_classifier, Classifier};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

pub struct Artifacts {
    pub rules: RuleTable,
    pub clusters: Option<ClusterTable>,
    pub classifier: Option<Arc<dyn Classifier>>,
    pub notices: Vec<String>,
}

fn notice(what: &str, path: &Path, err: &ArtifactError, consequence: &str) -> String {
    if err.is_missing() {
        info!(path = %path.display(), "{what} not found, {consequence}");
        format!("No {what} found at {}; {consequence}.", path.display())
    } else {
        warn!(path = %path.display(), error = %err, "{what} could not be loaded, {consequence}");
        format!("Could not load {what}: {err}; {consequence}.")
    }
}

impl Artifacts {
    pub fn load(config: &ArtifactsConfig) -> Self {
        let mut notices = Vec::new();

        let rules = match &config.rules {
            Some(path) => match RuleTable::from_json_file(path) {
                Ok(table) => {
                    info!(path = %path.display(), rules = table.len(), "loaded custom rule table");
                    table
                }
                Err(e) => {
                    notices.push(notice("rule table", path, &e, "using built-in rules"));
                    DEFAULT_RULES.clone()
                }
            },
            None => DEFAULT_RULES.clone(),
        };

        let clusters = match ClusterTable::from_json_file(&config.cluster_profiles) {
            Ok(table) => {
                info!(clusters = table.len(), "cluster profiles enabled");
                Some(table)
            }
            Err(e) => {
                notices.push(notice("cluster profiles", &config.cluster_profiles, &e, "cluster insights disabled"));
                None
            }
        };

        let classifier = match load_classifier(&config.classifier) {
            Ok(model) => {
                info!("premium classifier enabled");
                Some(model)
            }
            Err(e) => {
                notices.push(notice("premium classifier", &config.classifier, &e, "premium prediction disabled"));
                None
            }
        };

        Self { rules, clusters, classifier, notices }
    }
}
