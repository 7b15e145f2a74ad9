use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, header},
};

use crate::{error::AppError, message::PromptRequest, services::prompt::answer, state::SharedState};

pub async fn gemini_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<String, AppError> {
    let request = parse_body(&headers, &body)?;
    answer(state.model.as_ref(), &request.prompt_text()).await
}

/// Bodies that are not JSON, empty, or not a JSON object carry no prompt.
fn parse_body(headers: &HeaderMap, body: &[u8]) -> Result<PromptRequest, AppError> {
    if !is_json(headers) || body.is_empty() {
        return Ok(PromptRequest::default());
    }

    match Json::<PromptRequest>::from_bytes(body) {
        Ok(Json(request)) => Ok(request),
        Err(JsonRejection::JsonDataError(_)) => Ok(PromptRequest::default()),
        Err(rejection) => Err(AppError::InvalidBody(rejection.body_text())),
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}
