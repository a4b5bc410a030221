//! Token-overlap mapping of a user onto the closest cluster.

use crate::profile::ClusterTable;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Best cluster and its overlap score. `cluster_id` is `None` and `score`
/// is `-1` only for an empty table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterMatch {
    pub cluster_id: Option<String>,
    pub score: i64,
}

impl ClusterMatch {
    /// Only a positive overlap says anything about the user.
    pub fn is_meaningful(&self) -> bool {
        self.cluster_id.is_some() && self.score > 0
    }
}

/// Lowercased time slot, mood and trimmed comma-separated genres.
///
/// Blank parts are kept as the empty token, so a profile feature named `""`
/// overlaps with a user who left a field empty.
pub fn user_tokens(time_slot: &str, mood: &str, genre_text: &str) -> HashSet<String> {
    genre_text
        .split(',')
        .map(|g| g.trim().to_lowercase())
        .chain([time_slot.to_lowercase(), mood.to_lowercase()])
        .collect()
}

/// Pick the cluster sharing the most exact (case-insensitive) tokens with the
/// user. Ties keep the earliest cluster in table order.
pub fn map_cluster(time_slot: &str, mood: &str, genre_text: &str, table: &ClusterTable) -> ClusterMatch {
    let user = user_tokens(time_slot, mood, genre_text);
    let mut best = ClusterMatch { cluster_id: None, score: -1 };

    for (id, features) in table.iter() {
        let score = features.tokens().intersection(&user).count() as i64;
        if score > best.score {
            best = ClusterMatch { cluster_id: Some(id.to_string()), score };
        }
    }

    debug!(cluster = ?best.cluster_id, score = best.score, "mapped user to cluster");
    best
}
