use async_trait::async_trait;
use demandcast::{FetchOutcome, Transport};
use gloo_net::http::{Request, Response};
use serde_json::Value;

use crate::settings;

/// Browser transport backed by `fetch` through gloo-net.
///
/// No timeout is applied; a hung request stays pending until the browser
/// gives up on it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlooTransport;

async fn settle(endpoint: &str, method: &str, response: Result<Response, gloo_net::Error>) -> FetchOutcome {
    let response = match response {
        Ok(response) => response,
        Err(e) => {
            log::error!("{} {} - Request failed: {}", method, endpoint, e);
            return FetchOutcome::TransportError(e.to_string());
        }
    };

    if !response.ok() {
        log::warn!("{} {} - Non-OK response: {}", method, endpoint, response.status());
        return FetchOutcome::HttpError(response.status());
    }

    log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
    match response.json::<Value>().await {
        Ok(body) => {
            log::info!("{} {} - Success", method, endpoint);
            FetchOutcome::Ok(body)
        }
        Err(e) => {
            log::error!("{} {} - Failed to parse response: {}", method, endpoint, e);
            FetchOutcome::TransportError(e.to_string())
        }
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn post_json(&self, endpoint: &str, body: &Value) -> FetchOutcome {
        let url = settings::get_settings().api_url(endpoint);
        log::debug!("POST request to: {}", url);

        let request = match Request::post(&url).json(body) {
            Ok(request) => request,
            Err(e) => {
                log::error!("POST {} - Failed to serialize request: {}", endpoint, e);
                return FetchOutcome::TransportError(e.to_string());
            }
        };

        settle(endpoint, "POST", request.send().await).await
    }

    async fn get_json(&self, endpoint: &str) -> FetchOutcome {
        let url = settings::get_settings().api_url(endpoint);
        log::debug!("GET request to: {}", url);

        settle(endpoint, "GET", Request::get(&url).send().await).await
    }
}
