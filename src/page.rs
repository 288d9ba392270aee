use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use crate::ui::{classes, ids, UiPort};

/// In-memory model of the dashboard page.
///
/// The frontend renders markup from it and the lookups mutate it through
/// [`UiPort`]. Visibility is the absence of the `hidden` class, the same
/// marker the stylesheet uses.
#[derive(Debug, Default)]
pub struct PageState {
    fields: RefCell<HashMap<String, String>>,
    texts: RefCell<HashMap<String, String>>,
    rows: RefCell<HashMap<String, Vec<Vec<String>>>>,
    /// Element classes in document order.
    classes: RefCell<Vec<(String, BTreeSet<String>)>>,
    notices: RefCell<Vec<String>>,
}

impl PageState {
    /// Page laid out the way the dashboard starts: quantity tab active,
    /// every result area and the loading indicator hidden.
    pub fn dashboard() -> Self {
        let page = Self::default();

        page.register(ids::QUANTITY_TAB_BTN, &[classes::TAB_BTN, classes::ACTIVE]);
        page.register(ids::FORECAST_TAB_BTN, &[classes::TAB_BTN]);
        page.register(ids::QUANTITY_TAB, &[classes::TAB_CONTENT, classes::ACTIVE]);
        page.register(ids::FORECAST_TAB, &[classes::TAB_CONTENT]);

        for id in [
            ids::QUANTITY_RESULTS,
            ids::QUANTITY_TABLE,
            ids::LOADING_INDICATOR,
            ids::FORECAST_TABLE,
        ] {
            page.register(id, &[classes::HIDDEN]);
        }

        page
    }

    /// Adds an element with its initial classes, replacing any earlier entry.
    pub fn register(&self, id: &str, initial: &[&str]) {
        let set: BTreeSet<String> = initial.iter().map(|c| c.to_string()).collect();
        let mut classes = self.classes.borrow_mut();
        match classes.iter_mut().find(|(element, _)| element == id) {
            Some((_, existing)) => *existing = set,
            None => classes.push((id.to_string(), set)),
        }
    }

    /// Stores what the user typed into a form field.
    pub fn set_field(&self, id: &str, value: impl Into<String>) {
        self.fields.borrow_mut().insert(id.to_string(), value.into());
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.classes
            .borrow()
            .iter()
            .find(|(element, _)| element == id)
            .is_some_and(|(_, set)| set.contains(class))
    }

    pub fn is_visible(&self, id: &str) -> bool {
        !self.has_class(id, classes::HIDDEN)
    }

    /// Space-separated class attribute for an element.
    pub fn class_list(&self, id: &str) -> String {
        self.classes
            .borrow()
            .iter()
            .find(|(element, _)| element == id)
            .map(|(_, set)| set.iter().map(String::as_str).collect::<Vec<_>>().join(" "))
            .unwrap_or_default()
    }

    pub fn text(&self, id: &str) -> String {
        self.texts.borrow().get(id).cloned().unwrap_or_default()
    }

    pub fn rows(&self, id: &str) -> Vec<Vec<String>> {
        self.rows.borrow().get(id).cloned().unwrap_or_default()
    }

    /// Every notice raised so far, oldest first.
    pub fn notices(&self) -> Vec<String> {
        self.notices.borrow().clone()
    }
}

impl UiPort for PageState {
    fn field(&self, id: &str) -> String {
        self.fields.borrow().get(id).cloned().unwrap_or_default()
    }

    fn set_visible(&self, id: &str, visible: bool) {
        self.set_class(id, classes::HIDDEN, !visible);
    }

    fn set_text(&self, id: &str, text: &str) {
        self.texts.borrow_mut().insert(id.to_string(), text.to_string());
    }

    fn clear_rows(&self, id: &str) {
        self.rows.borrow_mut().remove(id);
    }

    fn append_row(&self, id: &str, cells: &[String]) {
        self.rows
            .borrow_mut()
            .entry(id.to_string())
            .or_default()
            .push(cells.to_vec());
    }

    fn elements_with_class(&self, class: &str) -> Vec<String> {
        self.classes
            .borrow()
            .iter()
            .filter(|(_, set)| set.contains(class))
            .map(|(element, _)| element.clone())
            .collect()
    }

    fn set_class(&self, id: &str, class: &str, on: bool) {
        let mut classes = self.classes.borrow_mut();
        let index = match classes.iter().position(|(element, _)| element == id) {
            Some(index) => index,
            None => {
                classes.push((id.to_string(), BTreeSet::new()));
                classes.len() - 1
            }
        };
        let set = &mut classes[index].1;
        if on {
            set.insert(class.to_string());
        } else {
            set.remove(class);
        }
    }

    fn notify(&self, message: &str) {
        log::debug!("Notice raised: {}", message);
        self.notices.borrow_mut().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_layout() {
        let page = PageState::dashboard();

        assert_eq!(
            page.elements_with_class(classes::TAB_CONTENT),
            vec![ids::QUANTITY_TAB.to_string(), ids::FORECAST_TAB.to_string()]
        );
        assert!(page.has_class(ids::QUANTITY_TAB, classes::ACTIVE));
        assert!(!page.is_visible(ids::QUANTITY_TABLE));
        assert!(!page.is_visible(ids::LOADING_INDICATOR));
        assert!(page.is_visible(ids::FETCH_COMPANY));
    }

    #[test]
    fn test_set_visible_toggles_hidden_class() {
        let page = PageState::dashboard();

        page.set_visible(ids::FORECAST_TABLE, true);
        assert!(page.is_visible(ids::FORECAST_TABLE));
        assert_eq!(page.class_list(ids::FORECAST_TABLE), "");

        page.set_visible(ids::FORECAST_TABLE, false);
        assert_eq!(page.class_list(ids::FORECAST_TABLE), "hidden");
    }

    #[test]
    fn test_rows_and_fields() {
        let page = PageState::default();
        page.set_field(ids::FORE_COMPANY, "Acme");
        page.append_row(ids::FORECAST_RESULTS_BODY, &["a".to_string(), "b".to_string()]);
        page.append_row(ids::FORECAST_RESULTS_BODY, &["c".to_string(), "d".to_string()]);

        assert_eq!(page.field(ids::FORE_COMPANY), "Acme");
        assert_eq!(page.field(ids::FORE_TO_DATE), "");
        assert_eq!(page.rows(ids::FORECAST_RESULTS_BODY).len(), 2);

        page.clear_rows(ids::FORECAST_RESULTS_BODY);
        assert!(page.rows(ids::FORECAST_RESULTS_BODY).is_empty());
    }

    #[test]
    fn test_class_list_is_sorted() {
        let page = PageState::dashboard();
        assert_eq!(page.class_list(ids::QUANTITY_TAB), "active tab-content");
    }
}
