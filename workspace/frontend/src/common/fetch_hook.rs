use yew::prelude::*;
use std::future::Future;
use crate::hooks::FetchState;

/// Runs `fetch_fn` once on mount and tracks its progress.
///
/// Errors are logged and kept in the state; nothing is surfaced to the user.
#[hook]
pub fn use_fetch<T, F, Fut>(fetch_fn: F) -> UseStateHandle<FetchState<T>>
where
    T: 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);

    {
        let fetch_state = fetch_state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_fn().await {
                    Ok(data) => fetch_state.set(FetchState::Success(data)),
                    Err(err) => {
                        log::warn!("Background fetch failed: {}", err);
                        fetch_state.set(FetchState::Error(err));
                    }
                }
            });
            || ()
        });
    }

    fetch_state
}
