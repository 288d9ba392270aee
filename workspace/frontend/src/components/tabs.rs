use demandcast::tabs::activate_tab;
use demandcast::ui::ids;
use yew::prelude::*;

use crate::page::BrowserPage;

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub page: BrowserPage,
    pub revision: u64,
}

/// (button id, panel id, label, icon)
const TABS: [(&str, &str, &str, &str); 2] = [
    (ids::QUANTITY_TAB_BTN, ids::QUANTITY_TAB, "Fetch Quantity", "fas fa-boxes"),
    (ids::FORECAST_TAB_BTN, ids::FORECAST_TAB, "Forecast", "fas fa-chart-line"),
];

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <div role="tablist" class="tabs tabs-boxed mb-6">
            {for TABS.iter().map(|&(button, panel, label, icon)| {
                let onclick = {
                    let page = props.page.clone();
                    Callback::from(move |_: MouseEvent| {
                        log::debug!("User selected tab {}", panel);
                        if let Err(e) = activate_tab(&page, button, panel) {
                            log::error!("{}", e);
                        }
                    })
                };

                html! {
                    <button
                        id={button}
                        role="tab"
                        class={format!("tab {}", props.page.state().class_list(button))}
                        {onclick}
                    >
                        <i class={icon}></i>
                        {format!(" {}", label)}
                    </button>
                }
            })}
        </div>
    }
}
