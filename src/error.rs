use thiserror::Error;

/// Error types for the dashboard view logic.
///
/// The `Display` output of every lookup variant is the exact notice text shown
/// to the user, so callers can surface `err.to_string()` directly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// One or more required form fields were left empty; carries their ids
    #[error("Please fill in all fields.")]
    MissingFields(Vec<&'static str>),

    /// The server answered with a non-success HTTP status
    #[error("An error occurred: HTTP error! status: {0}")]
    Http(u16),

    /// The server reported a logical error in the `error` field
    #[error("Error: {0}")]
    Server(String),

    /// The response carried neither a result nor an error
    #[error("No {0} data received")]
    NoData(&'static str),

    /// The request never produced a response
    #[error("An error occurred: {0}")]
    Transport(String),

    /// The response body did not match the expected shape
    #[error("An error occurred: {0}")]
    Decode(String),

    /// A tab was activated with an id that is not a registered panel
    #[error("Unknown tab panel: {0}")]
    UnknownPanel(String),
}

impl From<serde_json::Error> for DashboardError {
    fn from(error: serde_json::Error) -> Self {
        DashboardError::Decode(error.to_string())
    }
}

/// Type alias for Result with DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_texts() {
        assert_eq!(
            DashboardError::MissingFields(vec!["fetchCompany"]).to_string(),
            "Please fill in all fields."
        );
        assert_eq!(
            DashboardError::Http(500).to_string(),
            "An error occurred: HTTP error! status: 500"
        );
        assert_eq!(
            DashboardError::Server("bad range".to_string()).to_string(),
            "Error: bad range"
        );
        assert_eq!(
            DashboardError::NoData("forecast").to_string(),
            "No forecast data received"
        );
    }

    #[test]
    fn test_decode_error_from_serde() {
        let err = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let err: DashboardError = err.into();

        assert!(matches!(err, DashboardError::Decode(_)));
        assert!(err.to_string().starts_with("An error occurred: "));
    }
}
