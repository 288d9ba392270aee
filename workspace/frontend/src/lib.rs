use std::rc::Rc;

use demandcast::companies::load_companies;
use demandcast::PageState;
use yew::prelude::*;

mod components;
pub mod api_client;
pub mod common;
pub mod hooks;
pub mod page;
pub mod settings;

use api_client::GlooTransport;
use crate::common::fetch_hook::use_fetch;
use components::forecast::ForecastPanel;
use components::quantity::QuantityPanel;
use components::tabs::TabBar;
use page::{BrowserPage, Revision};

/// Id of the `<datalist>` both company inputs draw suggestions from.
pub const COMPANY_OPTIONS: &str = "companyOptions";

#[function_component(CompanyOptions)]
fn company_options() -> Html {
    let companies = use_fetch(|| async {
        load_companies(&GlooTransport).await.map_err(|e| e.to_string())
    });

    if companies.is_loading() {
        log::trace!("Company list still loading");
    }

    html! {
        <datalist id={COMPANY_OPTIONS}>
            {for companies.data().into_iter().flatten().map(|company| html! {
                <option value={company.clone()} />
            })}
        </datalist>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_memo((), |_| PageState::dashboard());
    let revision = use_reducer(Revision::default);
    let page = BrowserPage::new(Rc::clone(&state), revision.dispatcher());
    let revision = revision.0;

    html! {
        <div class="container mx-auto p-6">
            <h1 class="text-3xl font-bold mb-6">{"Demand Forecasting"}</h1>
            <CompanyOptions />
            <TabBar page={page.clone()} {revision} />
            <QuantityPanel page={page.clone()} {revision} />
            <ForecastPanel {page} {revision} />
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Demand Forecasting Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Debug mode: {}", settings.debug_mode);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
