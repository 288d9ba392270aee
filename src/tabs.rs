use crate::error::{DashboardError, Result};
use crate::ui::{classes, UiPort};

/// Makes `tab_id` the only active panel and `origin_button` the only active tab button.
///
/// An unknown `tab_id` is rejected before anything changes.
pub fn activate_tab<U: UiPort + ?Sized>(ui: &U, origin_button: &str, tab_id: &str) -> Result<()> {
    let panels = ui.elements_with_class(classes::TAB_CONTENT);
    if !panels.iter().any(|panel| panel == tab_id) {
        log::error!("Tab activation for unknown panel: {}", tab_id);
        return Err(DashboardError::UnknownPanel(tab_id.to_string()));
    }

    for panel in &panels {
        ui.set_class(panel, classes::ACTIVE, false);
    }
    for button in ui.elements_with_class(classes::TAB_BTN) {
        ui.set_class(&button, classes::ACTIVE, false);
    }

    ui.set_class(tab_id, classes::ACTIVE, true);
    ui.set_class(origin_button, classes::ACTIVE, true);
    log::debug!("Activated tab {} from {}", tab_id, origin_button);

    Ok(())
}
