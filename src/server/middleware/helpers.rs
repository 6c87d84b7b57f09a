//! Helper functions for middleware

use crate::auth::API_KEY_HEADER;
use actix_web::http::header::HeaderMap;

/// Header used to correlate a request across logs
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest caller-supplied request id we will echo back
const MAX_REQUEST_ID_LEN: usize = 128;

/// Extract the caller's API key from the `X-API-Key` header
pub fn extract_api_key(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|key| !key.is_empty())
}

/// Caller-supplied request id, if it is short and printable
pub fn incoming_request_id(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(REQUEST_ID_HEADER)?.to_str().ok()?.trim();
    let acceptable = !value.is_empty()
        && value.len() <= MAX_REQUEST_ID_LEN
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    acceptable.then(|| value.to_string())
}
