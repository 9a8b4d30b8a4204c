use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use nextword::{Nextword, parse_input};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Longest `input` accepted by `/v1/suggest`, in bytes.
pub const MAX_INPUT_LEN: usize = 1024;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Nextword>,
    pub disable_cache: bool,
}

#[derive(Deserialize)]
pub struct SuggestQuery {
    pub input: String,
}

#[derive(Serialize)]
pub struct SuggestResponse {
    input: String,
    prefix: String,
    candidates: Vec<String>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/v1/suggest", get(suggest))
        .with_state(state)
}

async fn healthz() -> impl IntoResponse {
    "ok"
}

async fn suggest(
    State(state): State<AppState>,
    Query(params): Query<SuggestQuery>,
) -> Result<Response, ApiError> {
    if params.input.len() > MAX_INPUT_LEN {
        return Err(ApiError::bad_request(format!(
            "input must be at most {MAX_INPUT_LEN} bytes"
        )));
    }
    if params.input.contains('\n') {
        return Err(ApiError::bad_request("input must be a single line"));
    }

    let engine = Arc::clone(&state.engine);
    let input = params.input.clone();
    let result = tokio::task::spawn_blocking(move || engine.suggest(&input))
        .await
        .map_err(|e| {
            error!("suggest task failed: {e}");
            ApiError::Internal
        })?;
    let candidates = result.map_err(|e| {
        warn!(
            partial = e.partial().len(),
            "suggest failed for {:?}: {}", params.input, e.source
        );
        ApiError::Internal
    })?;

    let response = SuggestResponse {
        prefix: parse_input(&params.input).prefix,
        input: params.input,
        candidates,
    };

    if state.disable_cache {
        Ok(Json(response).into_response())
    } else {
        Ok((
            [(
                header::CACHE_CONTROL,
                HeaderValue::from_static("public, max-age=300"),
            )],
            Json(response),
        )
            .into_response())
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    fn bad_request<T: Into<String>>(msg: T) -> Self {
        ApiError::BadRequest(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                let body = Json(ErrorResponse { error: msg });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::Internal => {
                let body = Json(json!({ "error": "internal server error" }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
