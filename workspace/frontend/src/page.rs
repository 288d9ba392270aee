use std::rc::Rc;

use demandcast::{PageState, UiPort};
use yew::prelude::*;

/// Bumped after every page mutation so the component tree re-renders.
#[derive(Debug, Default, PartialEq)]
pub struct Revision(pub u64);

impl Reducible for Revision {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: ()) -> Rc<Self> {
        Rc::new(Revision(self.0.wrapping_add(1)))
    }
}

/// [`UiPort`] for the browser: mutations land in the shared [`PageState`]
/// and schedule a redraw; notices become blocking `alert` dialogs.
#[derive(Clone)]
pub struct BrowserPage {
    state: Rc<PageState>,
    redraw: UseReducerDispatcher<Revision>,
}

impl BrowserPage {
    pub fn new(state: Rc<PageState>, redraw: UseReducerDispatcher<Revision>) -> Self {
        Self { state, redraw }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Records input typed by the user. The input element already shows the
    /// value, so no redraw is needed.
    pub fn input_handler(&self, id: &'static str) -> Callback<InputEvent> {
        let state = Rc::clone(&self.state);
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            state.set_field(id, input.value());
        })
    }

    pub fn select_handler(&self, id: &'static str) -> Callback<Event> {
        let state = Rc::clone(&self.state);
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            state.set_field(id, select.value());
        })
    }
}

impl PartialEq for BrowserPage {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl UiPort for BrowserPage {
    fn field(&self, id: &str) -> String {
        self.state.field(id)
    }

    fn set_visible(&self, id: &str, visible: bool) {
        self.state.set_visible(id, visible);
        self.redraw.dispatch(());
    }

    fn set_text(&self, id: &str, text: &str) {
        self.state.set_text(id, text);
        self.redraw.dispatch(());
    }

    fn clear_rows(&self, id: &str) {
        self.state.clear_rows(id);
        self.redraw.dispatch(());
    }

    fn append_row(&self, id: &str, cells: &[String]) {
        self.state.append_row(id, cells);
        self.redraw.dispatch(());
    }

    fn elements_with_class(&self, class: &str) -> Vec<String> {
        self.state.elements_with_class(class)
    }

    fn set_class(&self, id: &str, class: &str, on: bool) {
        self.state.set_class(id, class, on);
        self.redraw.dispatch(());
    }

    fn notify(&self, message: &str) {
        self.state.notify(message);
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(message) {
                    log::error!("Failed to show notice {:?}: {:?}", message, e);
                }
            }
            None => log::warn!("No window to show notice: {}", message),
        }
    }
}
