use common::{endpoints, ForecastRequest, ForecastResponse, Frequency, Prediction};

use crate::LookupOutcome;
use crate::error::{DashboardError, Result};
use crate::generation::RequestGeneration;
use crate::transport::{self, Transport};
use crate::ui::{ids, read_required, UiPort};

/// Requests a demand forecast and renders one table row per prediction.
///
/// The loading indicator is shown for the duration of the call and hidden
/// again on every outcome, except when a newer forecast has taken over:
/// that lookup owns the indicator, so a superseded response changes nothing.
pub async fn forecast<U, T>(ui: &U, transport: &T, generation: &RequestGeneration) -> LookupOutcome
where
    U: UiPort + ?Sized,
    T: Transport + ?Sized,
{
    let [company, from_date, to_date, frequency] = match read_required(
        ui,
        [ids::FORE_COMPANY, ids::FORE_FROM_DATE, ids::FORE_TO_DATE, ids::FREQUENCY],
    ) {
        Ok(values) => values,
        Err(err) => {
            log::warn!("Forecast rejected: {:?}", err);
            return LookupOutcome::notify(ui, err);
        }
    };

    if let Err(e) = frequency.parse::<Frequency>() {
        // Still sent; the server has the final say.
        log::warn!("{}", e);
    }

    let ticket = generation.begin();
    ui.set_visible(ids::LOADING_INDICATOR, true);
    ui.set_visible(ids::FORECAST_TABLE, false);

    let request = ForecastRequest {
        company,
        from_date,
        to_date,
        frequency,
    };
    log::debug!(
        "Forecast #{} for {} ({} - {}, {})",
        ticket.generation(),
        request.company,
        request.from_date,
        request.to_date,
        request.frequency
    );
    let outcome = transport::post(transport, endpoints::FORECAST, &request).await;

    if !ticket.is_current() {
        log::debug!("Dropping superseded forecast response #{}", ticket.generation());
        return LookupOutcome::Superseded;
    }

    ui.set_visible(ids::LOADING_INDICATOR, false);

    match outcome.decode::<ForecastResponse>().and_then(predictions) {
        Ok(predictions) => {
            ui.clear_rows(ids::FORECAST_RESULTS_BODY);
            for prediction in &predictions {
                ui.append_row(ids::FORECAST_RESULTS_BODY, &prediction.cells());
            }
            ui.set_visible(ids::FORECAST_TABLE, true);
            log::info!(
                "Rendered {} forecast rows for {}",
                predictions.len(),
                request.company
            );
            LookupOutcome::Rendered
        }
        Err(err) => {
            log::error!("Forecast failed: {}", err);
            LookupOutcome::notify(ui, err)
        }
    }
}

/// A server error wins; an absent or empty list means there is nothing to show.
fn predictions(response: ForecastResponse) -> Result<Vec<Prediction>> {
    if let Some(message) = response.error_message() {
        return Err(DashboardError::Server(message.to_string()));
    }
    match response.predictions {
        Some(predictions) if !predictions.is_empty() => Ok(predictions),
        _ => Err(DashboardError::NoData("forecast")),
    }
}
