//! Cluster profile table, loaded once from the offline clustering artifact.

use mm_core::error::{read_artifact, ArtifactError};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

/// Features defining one cluster, either a ranked name list or a
/// name -> weight mapping. Weights are carried for display only.
#[derive(Debug, Clone, PartialEq)]
pub enum ClusterFeatures {
    List(Vec<String>),
    Weighted(Vec<(String, f64)>),
}

impl ClusterFeatures {
    /// Interpret one profile value. `None` when it is neither a list nor a mapping.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(Self::List(
                items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect(),
            )),
            Value::Object(map) => Some(Self::Weighted(
                map.iter()
                    .map(|(name, weight)| (name.clone(), weight.as_f64().unwrap_or(0.0)))
                    .collect(),
            )),
            _ => None,
        }
    }

    /// Feature names in stored order.
    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::List(names) => names.iter().map(String::as_str).collect(),
            Self::Weighted(pairs) => pairs.iter().map(|(name, _)| name.as_str()).collect(),
        }
    }

    /// Lowercased feature-name set used for overlap scoring.
    pub fn tokens(&self) -> HashSet<String> {
        self.names().into_iter().map(str::to_lowercase).collect()
    }

    pub fn top(&self, n: usize) -> Vec<String> {
        self.names().into_iter().take(n).map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::List(names) => names.is_empty(),
            Self::Weighted(pairs) => pairs.is_empty(),
        }
    }
}

/// A cluster's leading features, for the presentation surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterProfileView {
    pub id: String,
    pub top_features: Vec<String>,
}

/// Ordered cluster-id -> features table. Iteration order is the file order
/// and decides ties in [`crate::map_cluster`].
#[derive(Debug, Clone, Default)]
pub struct ClusterTable {
    entries: Vec<(String, ClusterFeatures)>,
}

impl ClusterTable {
    /// Build from ids of any displayable type; ids are canonicalized to strings.
    pub fn from_entries<K: ToString>(entries: impl IntoIterator<Item = (K, ClusterFeatures)>) -> Self {
        Self {
            entries: entries.into_iter().map(|(id, f)| (id.to_string(), f)).collect(),
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        let map: Map<String, Value> = serde_json::from_str(raw)?;
        let entries = map
            .into_iter()
            .map(|(id, value)| {
                let features = ClusterFeatures::from_value(&value).unwrap_or_else(|| {
                    warn!(cluster = %id, "profile is neither a list nor a mapping, treating as empty");
                    ClusterFeatures::List(Vec::new())
                });
                (id, features)
            })
            .collect();
        Ok(Self { entries })
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ArtifactError> {
        let raw = read_artifact(path)?;
        let table = Self::from_json_str(&raw).map_err(|source| ArtifactError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), clusters = table.len(), "loaded cluster profiles");
        Ok(table)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClusterFeatures)> {
        self.entries.iter().map(|(id, f)| (id.as_str(), f))
    }

    pub fn get(&self, id: &str) -> Option<&ClusterFeatures> {
        self.entries.iter().find(|(k, _)| k == id).map(|(_, f)| f)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids sorted numerically when all of them are integers, else table order.
    pub fn display_order(&self) -> Vec<&str> {
        let numeric: Option<Vec<(i64, &str)>> = self
            .entries
            .iter()
            .map(|(id, _)| id.trim().parse::<i64>().ok().map(|n| (n, id.as_str())))
            .collect();
        match numeric {
            Some(mut ids) => {
                ids.sort_by_key(|(n, _)| *n);
                ids.into_iter().map(|(_, id)| id).collect()
            }
            None => self.entries.iter().map(|(id, _)| id.as_str()).collect(),
        }
    }

    /// Every cluster with its first `top_n` features, in display order.
    pub fn profiles(&self, top_n: usize) -> Vec<ClusterProfileView> {
        self.display_order()
            .into_iter()
            .filter_map(|id| {
                self.get(id).map(|f| ClusterProfileView {
                    id: id.to_string(),
                    top_features: f.top(top_n),
                })
            })
            .collect()
    }
}
