//! Common transport-layer types shared between the dashboard frontend and
//! the forecasting server. These structs mirror the server's JSON payloads
//! so the view logic can deserialize responses without duplicating shapes.

mod frequency;

pub use frequency::{Frequency, ParseFrequencyError};

use serde::{Deserialize, Serialize};

/// Endpoint paths exposed by the forecasting server.
pub mod endpoints {
    pub const GET_QUANTITY: &str = "/get_quantity";
    pub const FORECAST: &str = "/forecast";
    pub const GET_COMPANIES: &str = "/get_companies";
}

/// Treats an empty server error message the same as a missing one.
fn non_empty(error: &Option<String>) -> Option<&str> {
    error.as_deref().filter(|message| !message.is_empty())
}

// ===================== Quantity =====================

/// Request body for `POST /get_quantity`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuantityRequest {
    pub company: String,
    pub from_date: String,
    pub to_date: String,
}

/// Response of `POST /get_quantity`.
///
/// The server sends either `{"total_quantity": n}` or `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct QuantityResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_quantity: Option<f64>,
}

impl QuantityResponse {
    pub fn error_message(&self) -> Option<&str> {
        non_empty(&self.error)
    }
}

// ===================== Forecast =====================

/// Request body for `POST /forecast`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastRequest {
    pub company: String,
    pub from_date: String,
    pub to_date: String,
    /// Sent as typed by the user; the server normalizes the casing.
    pub frequency: String,
}

/// One forecasted quantity for an item on a given date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prediction {
    #[serde(rename = "Item")]
    pub item: String,
    #[serde(rename = "Company Name")]
    pub company_name: String,
    #[serde(rename = "Forecasted Quantity")]
    pub forecasted_quantity: f64,
    #[serde(rename = "Date")]
    pub date: String,
}

impl Prediction {
    /// Table cells in display order: item, company, quantity, date.
    pub fn cells(&self) -> [String; 4] {
        [
            self.item.clone(),
            self.company_name.clone(),
            self.forecasted_quantity.to_string(),
            self.date.clone(),
        ]
    }
}

/// Response of `POST /forecast`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ForecastResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predictions: Option<Vec<Prediction>>,
}

impl ForecastResponse {
    pub fn error_message(&self) -> Option<&str> {
        non_empty(&self.error)
    }
}

// ===================== Companies =====================

/// Response of `GET /get_companies`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CompaniesResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub companies: Option<Vec<String>>,
}

impl CompaniesResponse {
    pub fn error_message(&self) -> Option<&str> {
        non_empty(&self.error)
    }
}
