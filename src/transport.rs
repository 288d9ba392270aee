use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{DashboardError, Result};

/// Settled state of a single HTTP call.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// 2xx response with a JSON body
    Ok(Value),
    /// Non-success status; the body is not inspected
    HttpError(u16),
    /// The request failed before a usable response arrived
    TransportError(String),
}

impl FetchOutcome {
    /// Decodes a successful body into `T`, mapping the other outcomes to errors.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        match self {
            FetchOutcome::Ok(body) => Ok(serde_json::from_value(body)?),
            FetchOutcome::HttpError(status) => Err(DashboardError::Http(status)),
            FetchOutcome::TransportError(message) => Err(DashboardError::Transport(message)),
        }
    }
}

/// HTTP collaborator used by the lookups.
///
/// Futures are not `Send`: the browser implementation runs on the page's
/// single-threaded event loop.
#[async_trait(?Send)]
pub trait Transport {
    async fn post_json(&self, endpoint: &str, body: &Value) -> FetchOutcome;

    async fn get_json(&self, endpoint: &str) -> FetchOutcome;
}

/// Serializes `body` and posts it, folding serialization failures into the outcome.
pub async fn post<T, B>(transport: &T, endpoint: &str, body: &B) -> FetchOutcome
where
    T: Transport + ?Sized,
    B: Serialize,
{
    match serde_json::to_value(body) {
        Ok(body) => transport.post_json(endpoint, &body).await,
        Err(e) => FetchOutcome::TransportError(format!("Failed to serialize request: {}", e)),
    }
}
