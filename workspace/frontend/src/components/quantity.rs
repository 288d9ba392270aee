use demandcast::quantity::fetch_quantity;
use demandcast::ui::ids;
use demandcast::RequestGeneration;
use yew::prelude::*;

use crate::api_client::GlooTransport;
use crate::page::BrowserPage;
use crate::COMPANY_OPTIONS;

#[derive(Properties, PartialEq)]
pub struct QuantityPanelProps {
    pub page: BrowserPage,
    pub revision: u64,
}

#[function_component(QuantityPanel)]
pub fn quantity_panel(props: &QuantityPanelProps) -> Html {
    let generation = use_memo((), |_| RequestGeneration::new());
    let page = &props.page;
    let state = page.state();

    let on_fetch = {
        let page = page.clone();
        let generation = (*generation).clone();
        Callback::from(move |_: MouseEvent| {
            let page = page.clone();
            let generation = generation.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = fetch_quantity(&page, &GlooTransport, &generation).await;
                log::trace!("Quantity lookup settled: {:?}", outcome);
            });
        })
    };

    html! {
        <div id={ids::QUANTITY_TAB} class={state.class_list(ids::QUANTITY_TAB)}>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">{"Total Quantity"}</h3>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        <div class="form-control">
                            <label class="label" for={ids::FETCH_COMPANY}><span class="label-text">{"Company"}</span></label>
                            <input
                                id={ids::FETCH_COMPANY}
                                type="text"
                                list={COMPANY_OPTIONS}
                                class="input input-bordered w-full"
                                placeholder="e.g. Acme Ltd"
                                oninput={page.input_handler(ids::FETCH_COMPANY)}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for={ids::FETCH_FROM_DATE}><span class="label-text">{"From"}</span></label>
                            <input
                                id={ids::FETCH_FROM_DATE}
                                type="date"
                                class="input input-bordered w-full"
                                oninput={page.input_handler(ids::FETCH_FROM_DATE)}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for={ids::FETCH_TO_DATE}><span class="label-text">{"To"}</span></label>
                            <input
                                id={ids::FETCH_TO_DATE}
                                type="date"
                                class="input input-bordered w-full"
                                oninput={page.input_handler(ids::FETCH_TO_DATE)}
                            />
                        </div>
                    </div>
                    <div class="card-actions justify-end mt-4">
                        <button class="btn btn-primary" onclick={on_fetch}>{"Get Quantity"}</button>
                    </div>
                </div>
            </div>

            <div id={ids::QUANTITY_RESULTS} class={format!("mt-6 {}", state.class_list(ids::QUANTITY_RESULTS))}>
                <table id={ids::QUANTITY_TABLE} class={format!("table w-full {}", state.class_list(ids::QUANTITY_TABLE))}>
                    <thead>
                        <tr>
                            <th>{"Company"}</th>
                            <th>{"From"}</th>
                            <th>{"To"}</th>
                            <th>{"Total Quantity"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        <tr>
                            <td id={ids::RESULT_COMPANY}>{state.text(ids::RESULT_COMPANY)}</td>
                            <td id={ids::RESULT_FROM_DATE}>{state.text(ids::RESULT_FROM_DATE)}</td>
                            <td id={ids::RESULT_TO_DATE}>{state.text(ids::RESULT_TO_DATE)}</td>
                            <td id={ids::RESULT_QUANTITY}>{state.text(ids::RESULT_QUANTITY)}</td>
                        </tr>
                    </tbody>
                </table>
            </div>
        </div>
    }
}
