use ::common::Frequency;
use demandcast::forecast::forecast;
use demandcast::ui::ids;
use demandcast::RequestGeneration;
use yew::prelude::*;

use crate::api_client::GlooTransport;
use crate::common::loading::{Loading, LoadingSize};
use crate::page::BrowserPage;
use crate::COMPANY_OPTIONS;

#[derive(Properties, PartialEq)]
pub struct ForecastPanelProps {
    pub page: BrowserPage,
    pub revision: u64,
}

#[function_component(ForecastPanel)]
pub fn forecast_panel(props: &ForecastPanelProps) -> Html {
    let generation = use_memo((), |_| RequestGeneration::new());
    let page = &props.page;
    let state = page.state();

    let on_forecast = {
        let page = page.clone();
        let generation = (*generation).clone();
        Callback::from(move |_: MouseEvent| {
            let page = page.clone();
            let generation = generation.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = forecast(&page, &GlooTransport, &generation).await;
                log::trace!("Forecast settled: {:?}", outcome);
            });
        })
    };

    html! {
        <div id={ids::FORECAST_TAB} class={state.class_list(ids::FORECAST_TAB)}>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">{"Demand Forecast"}</h3>
                    <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                        <div class="form-control">
                            <label class="label" for={ids::FORE_COMPANY}><span class="label-text">{"Company"}</span></label>
                            <input
                                id={ids::FORE_COMPANY}
                                type="text"
                                list={COMPANY_OPTIONS}
                                class="input input-bordered w-full"
                                placeholder="e.g. Acme Ltd"
                                oninput={page.input_handler(ids::FORE_COMPANY)}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for={ids::FORE_FROM_DATE}><span class="label-text">{"From"}</span></label>
                            <input
                                id={ids::FORE_FROM_DATE}
                                type="date"
                                class="input input-bordered w-full"
                                oninput={page.input_handler(ids::FORE_FROM_DATE)}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for={ids::FORE_TO_DATE}><span class="label-text">{"To"}</span></label>
                            <input
                                id={ids::FORE_TO_DATE}
                                type="date"
                                class="input input-bordered w-full"
                                oninput={page.input_handler(ids::FORE_TO_DATE)}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for={ids::FREQUENCY}><span class="label-text">{"Frequency"}</span></label>
                            <select
                                id={ids::FREQUENCY}
                                class="select select-bordered w-full"
                                onchange={page.select_handler(ids::FREQUENCY)}
                            >
                                <option value="" selected={true}>{"Select frequency"}</option>
                                {for Frequency::ALL.iter().map(|frequency| html! {
                                    <option value={frequency.as_str()}>{frequency.as_str()}</option>
                                })}
                            </select>
                        </div>
                    </div>
                    <div class="card-actions justify-end mt-4">
                        <button class="btn btn-primary" onclick={on_forecast}>{"Forecast"}</button>
                    </div>
                </div>
            </div>

            <div id={ids::LOADING_INDICATOR} class={state.class_list(ids::LOADING_INDICATOR)}>
                <Loading size={LoadingSize::Large} text={Some("Generating forecast...".to_string())} />
            </div>

            <table id={ids::FORECAST_TABLE} class={format!("table table-zebra w-full mt-6 {}", state.class_list(ids::FORECAST_TABLE))}>
                <thead>
                    <tr>
                        <th>{"Item"}</th>
                        <th>{"Company Name"}</th>
                        <th>{"Forecasted Quantity"}</th>
                        <th>{"Date"}</th>
                    </tr>
                </thead>
                <tbody id={ids::FORECAST_RESULTS_BODY}>
                    // Cells are text nodes; server values are never parsed as markup.
                    {for state.rows(ids::FORECAST_RESULTS_BODY).into_iter().map(|row| html! {
                        <tr>
                            {for row.into_iter().map(|cell| html! { <td>{cell}</td> })}
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
