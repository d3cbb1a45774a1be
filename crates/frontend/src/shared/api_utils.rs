//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and issuing JSON
//! requests against the compensation backend. No retries, no caching, no
//! auth headers: every call is a single request/response exchange.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location, using
/// port 8000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:8000" or "https://example.com:8000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/structures/");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Failure of one backend exchange. Read views report these and keep their
/// prior state; write views surface them inline and stay on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure (fetch rejected, no window, body unreadable).
    Network(String),
    /// Non-2xx HTTP status.
    Status(u16),
    /// Response body did not match the expected contract shape.
    Decode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status(404))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Status(409))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "network error: {}", e),
            ApiError::Status(code) => write!(f, "HTTP {}", code),
            ApiError::Decode(e) => write!(f, "unexpected response: {}", e),
        }
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = perform("GET", path, None).await?;
    read_json(resp).await
}

pub async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let json = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let resp = perform("POST", path, Some(json)).await?;
    read_json(resp).await
}

pub async fn put_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let json = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let resp = perform("PUT", path, Some(json)).await?;
    read_json(resp).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    perform("DELETE", path, None).await.map(|_| ())
}

async fn perform(method: &str, path: &str, body: Option<String>) -> Result<Response, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    let has_body = body.is_some();
    if let Some(json) = body {
        opts.set_body(&JsValue::from_str(&json));
    }

    let request = Request::new_with_str_and_init(&api_url(path), &opts)
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    if has_body {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;

    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp)
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let text = wasm_bindgen_futures::JsFuture::from(
        resp.text().map_err(|e| ApiError::Network(format!("{e:?}")))?,
    )
    .await
    .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    let text: String = text
        .as_string()
        .ok_or_else(|| ApiError::Network("response body is not text".to_string()))?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert!(ApiError::Status(404).is_not_found());
        assert!(!ApiError::Status(404).is_conflict());
        assert!(ApiError::Status(409).is_conflict());
        assert!(!ApiError::Network("offline".into()).is_not_found());
    }

    #[test]
    fn display_messages() {
        assert_eq!(ApiError::Status(409).to_string(), "HTTP 409");
        assert_eq!(
            ApiError::Network("offline".into()).to_string(),
            "network error: offline"
        );
    }
}
