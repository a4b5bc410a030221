use crate::advice::{advise, Advice};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::Uri,
    routing::{get, post},
    Json, Router,
};
use mm_core::{AgeGroup, Gender, Mood, PodcastFrequency, TimeSlot, UserQuery};
use serde_json::{json, Value};
use tracing::debug;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/options", get(options))
        .route("/api/v1/clusters", get(clusters))
        .route("/api/v1/recommend", post(recommend))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime_secs": state.start_time.elapsed().as_secs(),
        "rules": state.rules.len(),
        "clusters_loaded": state.clusters.is_some(),
        "classifier_loaded": state.classifier.is_some(),
    }))
}

async fn options() -> Json<Value> {
    Json(json!({
        "age_group": AgeGroup::options(),
        "gender": Gender::options(),
        "time_slot": TimeSlot::options(),
        "mood": Mood::options(),
        "podcast_freq": PodcastFrequency::options(),
    }))
}

async fn clusters(State(state): State<AppState>) -> Json<Value> {
    match &state.clusters {
        Some(table) => Json(json!({
            "enabled": true,
            "clusters": table.profiles(state.top_features),
        })),
        None => Json(json!({
            "enabled": false,
            "clusters": [],
            "notices": state.notices.as_ref(),
        })),
    }
}

async fn recommend(
    State(state): State<AppState>,
    payload: Result<Json<UserQuery>, JsonRejection>,
) -> Result<Json<Advice>, ApiError> {
    let Json(query) = payload?;
    query.validate()?;
    let advice = advise(&state, &query);
    debug!(request_id = %advice.request_id, playlist = %advice.playlist, "recommendation served");
    Ok(Json(advice))
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NoRoute(uri.to_string())
}
