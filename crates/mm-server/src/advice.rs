//! Composes the three decision components for one request.

use crate::state::AppState;
use chrono::{DateTime, Utc};
use mm_cluster::{map_cluster, ClusterMatch};
use mm_core::UserQuery;
use mm_rules::{MatchSource, Recommendation};
use mm_scoring::{encode_query, score, FeatureVector, ScoreResult};
use serde::Serialize;
use uuid::Uuid;

/// Cluster mapping result plus the features that define the cluster.
#[derive(Debug, Clone, Serialize)]
pub struct ClusterInsight {
    pub cluster_id: Option<String>,
    pub score: i64,
    pub meaningful: bool,
    pub top_features: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Premium {
    pub features: FeatureVector,
    pub result: ScoreResult,
    pub summary: String,
}

/// Everything the presentation surface renders for one request.
#[derive(Debug, Clone, Serialize)]
pub struct Advice {
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub playlist: String,
    pub icon: String,
    pub display: String,
    pub source: MatchSource,
    pub rationale: String,
    pub cluster: Option<ClusterInsight>,
    pub premium: Option<Premium>,
    pub notices: Vec<String>,
}

fn insight(state: &AppState, query: &UserQuery) -> Option<ClusterInsight> {
    let table = state.clusters.as_ref()?;
    let matched = map_cluster(query.time_slot(), query.mood(), query.genre_text(), table);
    let meaningful = matched.is_meaningful();
    let ClusterMatch { cluster_id, score } = matched;
    let top_features = cluster_id
        .as_deref()
        .and_then(|id| table.get(id))
        .map(|f| f.top(state.top_features))
        .unwrap_or_default();
    Some(ClusterInsight { cluster_id, score, meaningful, top_features })
}

fn rationale(rec: &Recommendation, query: &UserQuery, cluster: Option<&ClusterInsight>) -> String {
    let mut text = match &rec.source {
        MatchSource::Rule { time_slots, moods, .. } => format!(
            "Matched the {} rule (time: {}, mood: {}) on a genre keyword in \"{}\".",
            rec.playlist,
            time_slots.join("/"),
            moods.join("/"),
            query.genre_text(),
        ),
        MatchSource::Keyword { keyword } => format!(
            "No rule matched time={} and mood={}; the genre keyword \"{keyword}\" picked {}.",
            query.time_slot(),
            query.mood(),
            rec.playlist,
        ),
        MatchSource::Default => format!(
            "No rule or genre keyword matched time={}, mood={}, genre=\"{}\"; showing {}.",
            query.time_slot(),
            query.mood(),
            query.genre_text(),
            rec.playlist,
        ),
    };

    match cluster {
        Some(c) if c.meaningful => {
            text += &format!(
                " Closest listener cluster {} shares {} of your inputs and is defined by: {}.",
                c.cluster_id.as_deref().unwrap_or_default(),
                c.score,
                c.top_features.join(", "),
            );
        }
        Some(_) => text += " None of the listener clusters share your inputs.",
        None => {}
    }
    text
}

/// Run the rule matcher, then the cluster mapper and scorer when their
/// artifacts are loaded. Never fails.
pub fn advise(state: &AppState, query: &UserQuery) -> Advice {
    let rec = state.rules.recommend(query.time_slot(), query.mood(), query.genre_text());
    let cluster = insight(state, query);
    let premium = state.classifier.as_ref().map(|classifier| {
        let features = encode_query(query);
        let result = score(&**classifier, &features);
        let summary = result.summary();
        Premium { features, result, summary }
    });

    Advice {
        request_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        display: rec.display(),
        rationale: rationale(&rec, query, cluster.as_ref()),
        playlist: rec.playlist,
        icon: rec.icon,
        source: rec.source,
        cluster,
        premium,
        notices: state.notices.as_ref().clone(),
    }
}
