//! REST call to the generation service.
//!
//! Browser (`csr`): a real HTTP call via `gloo-net`. Native: a stub
//! returning [`ApiError::Unavailable`] so the crate compiles and the state
//! and protocol logic stays testable off-browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use crate::net::types::{GenerateRequest, GenerateResponse};

/// Failure talking to the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Submit a generation request to `POST /api/generate`.
///
/// # Errors
///
/// `Transport` when the request cannot be sent, `Status` for a non-OK HTTP
/// response, `Decode` when the body is not a readable response object.
pub async fn post_generate(request: &GenerateRequest) -> Result<GenerateResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post("/api/generate")
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<GenerateResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}
