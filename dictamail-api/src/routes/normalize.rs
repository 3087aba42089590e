use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use dictamail::NormalizedResult;
use serde_json::Value;
use tracing::instrument;

use crate::{app_state::AppState, routes::ApiError};

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(normalize_query)
            .head(method_not_allowed)
            .post(normalize_body)
            .options(preflight)
            .fallback(method_not_allowed),
    )
}

/// Pairs rather than a struct: a repeated `text` is a bad request, not a
/// deserialization failure.
#[instrument(name = "GET /normalize", skip_all)]
async fn normalize_query(
    State(app_state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<NormalizedResult>, ApiError> {
    let Query(pairs) = query.map_err(|rejection| ApiError::internal(rejection.body_text()))?;
    let mut texts = pairs
        .iter()
        .filter(|(key, _)| key == "text")
        .map(|(_, value)| value.as_str());
    let text = match (texts.next(), texts.next()) {
        (Some(text), None) => required_text(Some(text))?,
        _ => return Err(ApiError::missing_text()),
    };

    Ok(Json(app_state.normalizer.normalize(text)))
}

/// The body is read raw and parsed here so malformed JSON surfaces as a 500
/// with the parser's message instead of the extractor's plain-text rejection.
#[instrument(name = "POST /normalize", skip_all)]
async fn normalize_body(
    State(app_state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<NormalizedResult>, ApiError> {
    let body = body.map_err(|rejection| ApiError::internal(rejection.body_text()))?;
    let payload: Value = if body.is_empty() {
        Value::Object(Default::default())
    } else {
        serde_json::from_slice(&body)?
    };
    let text = required_text(payload.get("text").and_then(Value::as_str))?;

    Ok(Json(app_state.normalizer.normalize(text)))
}

async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub(crate) async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

fn required_text(text: Option<&str>) -> Result<&str, ApiError> {
    match text {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(ApiError::missing_text()),
    }
}
