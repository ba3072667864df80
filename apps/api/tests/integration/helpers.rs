use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, header},
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tower::ServiceExt;
use toxicity_api::{
    application::classify_text::use_case::ClassifyTextUseCase,
    config::Config,
    presentation::http::{routes::create_router, state::AppState},
};

pub struct TestApp {
    pub app: Router,
}

pub fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

pub fn build_config(soft_errors: bool) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        en_vectorizer_path: fixture("en_vectorizer.json"),
        en_model_path: fixture("en_model.json"),
        vi_vectorizer_path: fixture("vi_vectorizer.json"),
        vi_model_path: fixture("vi_model.json"),
        vi_dictionary_path: Some(fixture("vi_lexicon.txt")),
        vi_compound_joiner: " ".to_string(),
        vi_max_syllables: 500,
        soft_errors,
        max_body_bytes: 16 * 1024,
    }
}

pub fn spawn_app_with(config: Config) -> TestApp {
    let classifier =
        ClassifyTextUseCase::load(&config).expect("failed to load fixture artifacts");

    let state = AppState {
        classifier: Arc::new(classifier),
        config,
        started_at: chrono::Utc::now(),
    };

    TestApp {
        app: create_router(state),
    }
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(build_config(true))
}

pub fn predict_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("failed to build predict request")
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub async fn read_text(res: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("invalid utf8")
}

pub async fn expect_status(
    res: axum::response::Response,
    expected: http::StatusCode,
) -> axum::response::Response {
    let actual = res.status();

    if actual == expected {
        return res;
    }

    let body = read_text(res).await;
    panic!(
        "unexpected status: expected {}, got {} (body: {})",
        expected, actual, body
    );
}
