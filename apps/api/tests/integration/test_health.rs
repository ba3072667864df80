use super::helpers::{expect_status, read_json, send, spawn_app};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;

#[tokio::test]
async fn health_reports_both_model_pairs() {
    let app = spawn_app();
    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .expect("failed to build health request");
    let res = expect_status(send(&app.app, req).await, StatusCode::OK).await;
    let body: Value = read_json(res).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["soft_errors"], true);

    let models = body["models"].as_array().expect("models should be an array");
    assert_eq!(models.len(), 2);
    assert_eq!(models[0]["language"], "en");
    assert_eq!(models[1]["language"], "vi");
    for model in models {
        assert_eq!(model["vectorizer_dim"], 10);
        assert_eq!(model["model_format"], "dense-json");
        let sha = model["fingerprint"]["model"]["sha256"]
            .as_str()
            .expect("missing fingerprint");
        assert_eq!(sha.len(), 64);
        assert!(model["fingerprint"]["vectorizer"]["path"]
            .as_str()
            .is_some_and(|p| p.ends_with("_vectorizer.json")));
    }
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = spawn_app();
    let req = Request::builder()
        .method("GET")
        .uri("/nope")
        .body(Body::empty())
        .expect("failed to build request");
    let res = send(&app.app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
