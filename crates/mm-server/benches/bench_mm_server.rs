use criterion::{black_box, criterion_group, criterion_main, Criterion};
use axum::body::Body;
use axum::http::Request;
use mm_cluster::ClusterTable;
use mm_core::UserQuery;
use mm_server::{advice::advise, app_with_state, state::AppState};
use tokio::runtime::Runtime;
use tower::ServiceExt;

fn state() -> AppState {
    let table = ClusterTable::from_json_str(r#"{"0": ["Morning", "Pop"], "1": ["Night", "Rap"], "2": ["Evening", "Folk"]}"#).unwrap();
    AppState::new().with_clusters(table)
}

fn bench_advise(c: &mut Criterion) {
    let s = state();
    let q = UserQuery::new("Night", "Excited", "Hip Hop, Rap");
    c.bench_function("advise_1000", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                black_box(advise(&s, &q));
            }
        })
    });
}

fn bench_http_recommend(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let s = state();
    let body = serde_json::json!({ "time_slot": "Morning", "mood": "Energetic", "genre_text": "Pop, EDM" });
    let bytes = serde_json::to_vec(&body).unwrap();

    c.bench_function("http_recommend_100", |b| {
        b.iter(|| {
            rt.block_on(async {
                for _ in 0..100 {
                    let req = Request::builder()
                        .method("POST")
                        .uri("/api/v1/recommend")
                        .header("content-type", "application/json")
                        .body(Body::from(bytes.clone()))
                        .unwrap();
                    let resp = app_with_state(s.clone()).oneshot(req).await.unwrap();
                    black_box(resp.status());
                }
            })
        })
    });
}

criterion_group!(benches, bench_advise, bench_http_recommend);
criterion_main!(benches);
