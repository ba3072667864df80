use crate::{
    application::classify_text::dto::{PredictRequest, PredictResponse},
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{Json, body::Bytes, extract::State};
use validator::Validate;

/// `POST /predict`
///
/// The body is parsed as JSON whatever the `Content-Type` header says.
pub async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PredictResponse>, AppError> {
    let request: PredictRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(parse_error = %e, "Rejected predict body");
        AppError::BadRequest("Invalid JSON body".into())
    })?;
    request.validate()?;
    let text = request.text.unwrap_or_default();

    match state.classifier.classify(text).await {
        Ok(outcome) => Ok(Json(PredictResponse::label(outcome.label))),
        Err(err) if state.config.soft_errors => {
            tracing::warn!(kind = err.kind(), error = %err, "Classification failed");
            Ok(Json(PredictResponse::soft_error(&err)))
        }
        Err(err) => Err(err.into()),
    }
}
