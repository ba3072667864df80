use super::helpers::{
    build_config, expect_status, fixture, predict_request, read_json, send, spawn_app,
    spawn_app_with,
};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};

async fn prediction_for(text: &str) -> String {
    let app = spawn_app();
    let res = send(&app.app, predict_request(json!({ "text": text }).to_string())).await;
    let res = expect_status(res, StatusCode::OK).await;
    let body: Value = read_json(res).await;
    body["prediction"]
        .as_str()
        .expect("prediction should be a string")
        .to_string()
}

#[tokio::test]
async fn benign_english_is_non_toxic() {
    assert_eq!(prediction_for("I love this!").await, "Non-Toxic Comment");
}

#[tokio::test]
async fn insulting_english_is_toxic() {
    assert_eq!(prediction_for("You are an idiot").await, "Toxic Comment");
    assert_eq!(
        prediction_for("I hate you, you're so STUPID!!!").await,
        "Toxic Comment"
    );
}

#[tokio::test]
async fn vietnamese_text_uses_vietnamese_pair() {
    // "idiot" only scores on the English pair; the Vietnamese pair ignores it.
    assert_eq!(
        prediction_for("Mày đúng là một thằng ngu ngốc, cút khỏi đây ngay đi").await,
        "Toxic Comment"
    );
    assert_eq!(
        prediction_for("Tôi rất thích bộ phim này, nó thật sự rất hay và tuyệt vời").await,
        "Non-Toxic Comment"
    );
}

#[tokio::test]
async fn empty_object_is_rejected() {
    let app = spawn_app();
    let res = send(&app.app, predict_request("{}")).await;
    let res = expect_status(res, StatusCode::BAD_REQUEST).await;
    let body: Value = read_json(res).await;
    assert_eq!(body, json!({ "error": "No text provided" }));
}

#[tokio::test]
async fn empty_text_is_rejected() {
    let app = spawn_app();
    let res = send(&app.app, predict_request(r#"{"text": ""}"#)).await;
    let res = expect_status(res, StatusCode::BAD_REQUEST).await;
    let body: Value = read_json(res).await;
    assert_eq!(body, json!({ "error": "No text provided" }));
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let app = spawn_app();
    for body in ["not json", r#"{"text": 42}"#, "[]"] {
        let res = send(&app.app, predict_request(body)).await;
        let res = expect_status(res, StatusCode::BAD_REQUEST).await;
        let payload: Value = read_json(res).await;
        assert_eq!(payload, json!({ "error": "Invalid JSON body" }), "{body}");
    }
}

#[tokio::test]
async fn body_is_parsed_without_content_type() {
    let app = spawn_app();
    let req = Request::builder()
        .method("POST")
        .uri("/predict")
        .body(Body::from(r#"{"text": "I love this!"}"#))
        .expect("failed to build request");
    let res = expect_status(send(&app.app, req).await, StatusCode::OK).await;
    let body: Value = read_json(res).await;
    assert_eq!(body["prediction"], "Non-Toxic Comment");
}

#[tokio::test]
async fn punctuation_only_degrades_to_error_payload() {
    assert_eq!(
        prediction_for("?!?! ...").await,
        "Error: No features in text."
    );
}

#[tokio::test]
async fn hardened_mode_reports_error_status() {
    let app = spawn_app_with(build_config(false));
    let res = send(&app.app, predict_request(r#"{"text": "?!?! ..."}"#)).await;
    let res = expect_status(res, StatusCode::UNPROCESSABLE_ENTITY).await;
    let body: Value = read_json(res).await;
    assert_eq!(
        body,
        json!({ "error": "No features in text.", "kind": "detection" })
    );
}

#[tokio::test]
async fn oversized_vietnamese_text_is_a_tokenization_error() {
    let mut config = build_config(true);
    config.vi_max_syllables = 5;
    let app = spawn_app_with(config);
    let text = "Tôi rất thích bộ phim này, nó thật sự rất hay và tuyệt vời";
    let res = send(&app.app, predict_request(json!({ "text": text }).to_string())).await;
    let res = expect_status(res, StatusCode::OK).await;
    let body: Value = read_json(res).await;
    let prediction = body["prediction"].as_str().unwrap_or_default();
    assert!(
        prediction.starts_with("Error: text has"),
        "unexpected prediction {prediction:?}"
    );
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = spawn_app();
    let res = send(&app.app, predict_request(r#"{"text": "I love this!"}"#)).await;
    assert!(res.headers().contains_key("x-request-id"));

    let req = Request::builder()
        .method("POST")
        .uri("/predict")
        .header("x-request-id", "caller-supplied-id")
        .body(Body::from(r#"{"text": "I love this!"}"#))
        .expect("failed to build request");
    let res = send(&app.app, req).await;
    assert_eq!(res.headers()["x-request-id"], "caller-supplied-id");
}

#[tokio::test]
async fn onnx_model_serves_english_predictions() {
    let mut config = build_config(true);
    config.en_model_path = fixture("en_model.onnx");
    let app = spawn_app_with(config);

    for (text, expected) in [
        ("You are an idiot", "Toxic Comment"),
        ("I love this!", "Non-Toxic Comment"),
    ] {
        let res = send(&app.app, predict_request(json!({ "text": text }).to_string())).await;
        let res = expect_status(res, StatusCode::OK).await;
        let body: Value = read_json(res).await;
        assert_eq!(body["prediction"], expected, "{text:?}");
    }

    let res = send(
        &app.app,
        Request::builder()
            .uri("/health")
            .body(Body::empty())
            .expect("failed to build health request"),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["models"][0]["model_format"], "onnx");
    assert_eq!(body["models"][1]["model_format"], "dense-json");
}
