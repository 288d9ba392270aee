//! View logic for the demand-forecasting dashboard.
//!
//! The operations here act on two injected ports: [`ui::UiPort`] for the
//! page and [`transport::Transport`] for the forecasting server. This keeps
//! them free of browser APIs. The Yew frontend supplies the browser
//! implementations; tests use [`page::PageState`] and a scripted transport.

pub mod companies;
pub mod error;
pub mod forecast;
pub mod generation;
pub mod page;
pub mod quantity;
pub mod tabs;
pub mod transport;
pub mod ui;

#[cfg(test)]
mod testing;

pub use error::{DashboardError, Result};
pub use generation::{RequestGeneration, Ticket};
pub use page::PageState;
pub use transport::{FetchOutcome, Transport};
pub use ui::UiPort;

/// How a user-triggered lookup settled.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// Results were written to the page
    Rendered,
    /// A notice was raised for this error
    Notified(DashboardError),
    /// A newer lookup of the same kind started; the response was dropped
    Superseded,
}

impl LookupOutcome {
    /// Raises the notice for `err` and records it as the outcome.
    pub(crate) fn notify<U: UiPort + ?Sized>(ui: &U, err: DashboardError) -> Self {
        ui.notify(&err.to_string());
        LookupOutcome::Notified(err)
    }
}
