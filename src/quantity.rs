use common::{endpoints, QuantityRequest, QuantityResponse};

use crate::LookupOutcome;
use crate::error::{DashboardError, Result};
use crate::generation::RequestGeneration;
use crate::transport::{self, Transport};
use crate::ui::{ids, read_required, UiPort};

/// Looks up the total quantity sold to a company over a date range.
///
/// Reads the three quantity form fields, posts them to `/get_quantity` and
/// either fills the result table or raises exactly one notice. A response
/// that arrives after a newer quantity lookup started is dropped.
pub async fn fetch_quantity<U, T>(
    ui: &U,
    transport: &T,
    generation: &RequestGeneration,
) -> LookupOutcome
where
    U: UiPort + ?Sized,
    T: Transport + ?Sized,
{
    let [company, from_date, to_date] =
        match read_required(ui, [ids::FETCH_COMPANY, ids::FETCH_FROM_DATE, ids::FETCH_TO_DATE]) {
            Ok(values) => values,
            Err(err) => {
                log::warn!("Quantity lookup rejected: {:?}", err);
                return LookupOutcome::notify(ui, err);
            }
        };

    let ticket = generation.begin();
    ui.set_visible(ids::QUANTITY_RESULTS, true);
    ui.set_visible(ids::QUANTITY_TABLE, false);

    let request = QuantityRequest {
        company,
        from_date,
        to_date,
    };
    log::debug!(
        "Quantity lookup #{} for {} ({} - {})",
        ticket.generation(),
        request.company,
        request.from_date,
        request.to_date
    );
    let outcome = transport::post(transport, endpoints::GET_QUANTITY, &request).await;

    if !ticket.is_current() {
        log::debug!("Dropping superseded quantity response #{}", ticket.generation());
        return LookupOutcome::Superseded;
    }

    match outcome.decode::<QuantityResponse>().and_then(total_quantity) {
        Ok(total) => {
            ui.set_visible(ids::QUANTITY_TABLE, true);
            ui.set_text(ids::RESULT_COMPANY, &request.company);
            ui.set_text(ids::RESULT_FROM_DATE, &request.from_date);
            ui.set_text(ids::RESULT_TO_DATE, &request.to_date);
            ui.set_text(ids::RESULT_QUANTITY, &total.to_string());
            log::info!("Quantity for {}: {}", request.company, total);
            LookupOutcome::Rendered
        }
        Err(err) => {
            log::error!("Quantity lookup failed: {}", err);
            LookupOutcome::notify(ui, err)
        }
    }
}

/// A server error wins over a quantity; zero is a valid quantity.
fn total_quantity(response: QuantityResponse) -> Result<f64> {
    if let Some(message) = response.error_message() {
        return Err(DashboardError::Server(message.to_string()));
    }
    response
        .total_quantity
        .ok_or(DashboardError::NoData("quantity"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageState;
    use crate::testing::ScriptedTransport;
    use crate::transport::FetchOutcome;
    use serde_json::json;

    fn filled_page() -> PageState {
        let page = PageState::dashboard();
        page.set_field(ids::FETCH_COMPANY, "Acme");
        page.set_field(ids::FETCH_FROM_DATE, "2024-01-01");
        page.set_field(ids::FETCH_TO_DATE, "2024-01-31");
        page
    }

    #[tokio::test]
    async fn test_missing_fields_send_nothing() {
        for missing in [ids::FETCH_COMPANY, ids::FETCH_FROM_DATE, ids::FETCH_TO_DATE] {
            let page = filled_page();
            page.set_field(missing, "");
            let transport = ScriptedTransport::replying(json!({"total_quantity": 1}));

            let outcome = fetch_quantity(&page, &transport, &RequestGeneration::new()).await;

            assert_eq!(
                outcome,
                LookupOutcome::Notified(DashboardError::MissingFields(vec![missing]))
            );
            assert!(transport.requests().is_empty());
            assert_eq!(page.notices(), vec!["Please fill in all fields.".to_string()]);
            assert!(!page.is_visible(ids::QUANTITY_RESULTS));
        }
    }

    #[tokio::test]
    async fn test_renders_total_quantity() {
        let page = filled_page();
        let transport = ScriptedTransport::replying(json!({"total_quantity": 1250}));

        let outcome = fetch_quantity(&page, &transport, &RequestGeneration::new()).await;

        assert_eq!(outcome, LookupOutcome::Rendered);
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].endpoint, "/get_quantity");
        assert_eq!(
            requests[0].body,
            Some(json!({"company": "Acme", "from_date": "2024-01-01", "to_date": "2024-01-31"}))
        );
        assert!(page.is_visible(ids::QUANTITY_RESULTS));
        assert!(page.is_visible(ids::QUANTITY_TABLE));
        assert_eq!(page.text(ids::RESULT_COMPANY), "Acme");
        assert_eq!(page.text(ids::RESULT_FROM_DATE), "2024-01-01");
        assert_eq!(page.text(ids::RESULT_TO_DATE), "2024-01-31");
        assert_eq!(page.text(ids::RESULT_QUANTITY), "1250");
        assert!(page.notices().is_empty());
    }

    #[tokio::test]
    async fn test_zero_quantity_is_displayed() {
        let page = filled_page();
        let transport = ScriptedTransport::replying(json!({"total_quantity": 0}));

        let outcome = fetch_quantity(&page, &transport, &RequestGeneration::new()).await;

        assert_eq!(outcome, LookupOutcome::Rendered);
        assert_eq!(page.text(ids::RESULT_QUANTITY), "0");
        assert!(page.is_visible(ids::QUANTITY_TABLE));
    }

    #[tokio::test]
    async fn test_server_error_keeps_table_hidden() {
        let page = filled_page();
        let transport = ScriptedTransport::replying(json!({"error": "bad range"}));

        fetch_quantity(&page, &transport, &RequestGeneration::new()).await;

        assert!(!page.is_visible(ids::QUANTITY_TABLE));
        assert_eq!(page.notices(), vec!["Error: bad range".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_payload_is_no_data() {
        let page = filled_page();
        let transport = ScriptedTransport::replying(json!({}));

        let outcome = fetch_quantity(&page, &transport, &RequestGeneration::new()).await;

        assert_eq!(outcome, LookupOutcome::Notified(DashboardError::NoData("quantity")));
        assert_eq!(page.notices(), vec!["No quantity data received".to_string()]);
    }

    #[tokio::test]
    async fn test_http_status_names_code() {
        let page = filled_page();
        let transport = ScriptedTransport::new([FetchOutcome::HttpError(500)]);

        fetch_quantity(&page, &transport, &RequestGeneration::new()).await;

        assert_eq!(
            page.notices(),
            vec!["An error occurred: HTTP error! status: 500".to_string()]
        );
        assert!(!page.is_visible(ids::QUANTITY_TABLE));
    }

    #[tokio::test]
    async fn test_transport_failure_is_reported() {
        let page = filled_page();
        let transport =
            ScriptedTransport::new([FetchOutcome::TransportError("Failed to fetch".to_string())]);

        fetch_quantity(&page, &transport, &RequestGeneration::new()).await;

        assert_eq!(page.notices(), vec!["An error occurred: Failed to fetch".to_string()]);
    }

    #[tokio::test]
    async fn test_superseded_response_is_dropped() {
        let page = filled_page();
        let generation = RequestGeneration::new();
        let newer = generation.clone();
        let transport = ScriptedTransport::replying(json!({"total_quantity": 9}))
            .while_in_flight(move || {
                newer.begin();
            });

        let outcome = fetch_quantity(&page, &transport, &generation).await;

        assert_eq!(outcome, LookupOutcome::Superseded);
        assert_eq!(page.text(ids::RESULT_QUANTITY), "");
        assert!(!page.is_visible(ids::QUANTITY_TABLE));
        assert!(page.notices().is_empty());
    }
}
