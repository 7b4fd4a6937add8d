use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, header::CONTENT_TYPE},
};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};
use url::form_urlencoded;

use crate::infra::{
    app_state::AppState,
    errors::{SaveError, SaveResult},
};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const FORM_FIELD: &str = "data";

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub success: bool,
    pub message: &'static str,
}

impl SaveResponse {
    fn saved() -> Self {
        Self {
            success: true,
            message: "Data saved successfully",
        }
    }
}

/// Replace the stored catalog with the posted JSON object.
pub async fn save_data_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> SaveResult<Json<SaveResponse>> {
    let document = parse_payload(&headers, &body)?;
    debug!(keys = document.len(), "save payload accepted");

    state.store().save(document).await?;
    info!(path = %state.store().path().display(), "data saved");

    Ok(Json(SaveResponse::saved()))
}

pub async fn method_not_allowed() -> SaveError {
    SaveError::InvalidMethod
}

/// Extract the document from a raw JSON body or from the `data` field of a
/// form-encoded body. Only JSON objects are accepted.
pub fn parse_payload(
    headers: &HeaderMap,
    body: &[u8],
) -> SaveResult<Map<String, Value>> {
    if body.is_empty() {
        return Err(SaveError::invalid_payload("no data received"));
    }

    let parsed = if is_form(headers) {
        let field = form_urlencoded::parse(body)
            .find(|(key, _)| key == FORM_FIELD)
            .map(|(_, value)| value.into_owned())
            .ok_or_else(|| {
                SaveError::invalid_payload("missing `data` form field")
            })?;
        serde_json::from_str::<Value>(&field)
    } else {
        serde_json::from_slice::<Value>(body)
    };

    match parsed {
        Ok(Value::Object(document)) => Ok(document),
        Ok(_) => Err(SaveError::invalid_payload("expected a JSON object")),
        Err(err) => Err(SaveError::invalid_payload(err.to_string())),
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}
