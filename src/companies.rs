use common::{endpoints, CompaniesResponse};

use crate::error::{DashboardError, Result};
use crate::transport::Transport;

/// Fetches the company names the server has sales data for.
///
/// Used only to suggest values for the company inputs, so nothing here
/// touches the page; callers decide how to surface a failure.
pub async fn load_companies<T: Transport + ?Sized>(transport: &T) -> Result<Vec<String>> {
    log::trace!("Fetching company list");
    let response: CompaniesResponse = transport.get_json(endpoints::GET_COMPANIES).await.decode()?;

    if let Some(message) = response.error_message() {
        log::error!("Failed to fetch companies: {}", message);
        return Err(DashboardError::Server(message.to_string()));
    }

    let companies = response.companies.unwrap_or_default();
    log::info!("Successfully fetched {} companies", companies.len());
    Ok(companies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedTransport;
    use crate::transport::FetchOutcome;
    use serde_json::json;

    #[tokio::test]
    async fn test_load_companies() {
        let transport = ScriptedTransport::replying(json!({"companies": ["Acme", "Globex"]}));

        let companies = load_companies(&transport).await.unwrap();

        assert_eq!(companies, vec!["Acme".to_string(), "Globex".to_string()]);
        let requests = transport.requests();
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].endpoint, "/get_companies");
    }

    #[tokio::test]
    async fn test_missing_list_is_empty() {
        let transport = ScriptedTransport::replying(json!({}));
        assert!(load_companies(&transport).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_server_error() {
        let transport =
            ScriptedTransport::replying(json!({"error": "Error retrieving companies: disk"}));

        let err = load_companies(&transport).await.unwrap_err();

        assert_eq!(
            err,
            DashboardError::Server("Error retrieving companies: disk".to_string())
        );
    }

    #[tokio::test]
    async fn test_http_error() {
        let transport = ScriptedTransport::new([FetchOutcome::HttpError(500)]);
        assert_eq!(
            load_companies(&transport).await.unwrap_err(),
            DashboardError::Http(500)
        );
    }
}
