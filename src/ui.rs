/// Element ids the dashboard markup must provide.
pub mod ids {
    // Tabs
    pub const QUANTITY_TAB: &str = "quantityTab";
    pub const FORECAST_TAB: &str = "forecastTab";
    pub const QUANTITY_TAB_BTN: &str = "quantityTabBtn";
    pub const FORECAST_TAB_BTN: &str = "forecastTabBtn";

    // Quantity lookup
    pub const FETCH_COMPANY: &str = "fetchCompany";
    pub const FETCH_FROM_DATE: &str = "fetchFromDate";
    pub const FETCH_TO_DATE: &str = "fetchToDate";
    pub const QUANTITY_RESULTS: &str = "quantityResults";
    pub const QUANTITY_TABLE: &str = "quantityTable";
    pub const RESULT_COMPANY: &str = "resultCompany";
    pub const RESULT_FROM_DATE: &str = "resultFromDate";
    pub const RESULT_TO_DATE: &str = "resultToDate";
    pub const RESULT_QUANTITY: &str = "resultQuantity";

    // Forecast lookup
    pub const FORE_COMPANY: &str = "foreCompany";
    pub const FORE_FROM_DATE: &str = "foreFromDate";
    pub const FORE_TO_DATE: &str = "foreToDate";
    pub const FREQUENCY: &str = "frequency";
    pub const LOADING_INDICATOR: &str = "loadingIndicator";
    pub const FORECAST_TABLE: &str = "forecastTable";
    pub const FORECAST_RESULTS_BODY: &str = "forecastResultsBody";
}

/// Class markers shared with the stylesheet.
pub mod classes {
    pub const TAB_CONTENT: &str = "tab-content";
    pub const TAB_BTN: &str = "tab-btn";
    pub const ACTIVE: &str = "active";
    pub const HIDDEN: &str = "hidden";
}

/// Port over the visible page.
///
/// Every method takes `&self` so an operation can hold the port across the
/// await of its network call while other event handlers keep using it.
/// Implementations render row cells as text, never as markup.
pub trait UiPort {
    /// Current value of a form field, empty when unset.
    fn field(&self, id: &str) -> String;

    fn set_visible(&self, id: &str, visible: bool);

    fn set_text(&self, id: &str, text: &str);

    /// Removes every row from a table body.
    fn clear_rows(&self, id: &str);

    fn append_row(&self, id: &str, cells: &[String]);

    /// Ids of all elements tagged with `class`, in document order.
    fn elements_with_class(&self, class: &str) -> Vec<String>;

    fn set_class(&self, id: &str, class: &str, on: bool);

    /// Surfaces a blocking, user-dismissed message.
    fn notify(&self, message: &str);
}

/// Reads the listed fields and fails with the ids of the empty ones.
pub fn read_required<U: UiPort + ?Sized, const N: usize>(
    ui: &U,
    ids: [&'static str; N],
) -> crate::error::Result<[String; N]> {
    let values = ids.map(|id| ui.field(id));
    let missing: Vec<&'static str> = ids
        .iter()
        .zip(values.iter())
        .filter(|(_, value)| value.is_empty())
        .map(|(id, _)| *id)
        .collect();

    if missing.is_empty() {
        Ok(values)
    } else {
        Err(crate::error::DashboardError::MissingFields(missing))
    }
}
