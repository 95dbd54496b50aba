use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::{DEFAULT_YEAR, MAP_CONTAINER_ID};
use crate::controls::{TimeControl, present_transition};
use crate::{data, session};

fn set_loading_shell_step(step: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if let Some(step_el) = document.get_element_by_id("app-loading-step") {
        step_el.set_text_content(Some(step));
    }
}

fn remove_loading_shell() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if let Some(shell) = document.get_element_by_id("app-loading-shell") {
        shell.remove();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Newtype wrappers so each signal gets its own context slot.
#[derive(Clone, Copy)]
pub(crate) struct SliderValue(pub RwSignal<String>);
#[derive(Clone, Copy)]
pub(crate) struct LegendText(pub RwSignal<String>);
#[derive(Clone, Copy)]
pub(crate) struct LoadStatusSignal(pub RwSignal<LoadStatus>);

#[component]
pub fn App() -> impl IntoView {
    let slider = SliderValue(RwSignal::new(DEFAULT_YEAR.to_string()));
    // Empty until the initial filter pass runs.
    let legend = LegendText(RwSignal::new(String::new()));
    let status = LoadStatusSignal(RwSignal::new(LoadStatus::Loading));

    provide_context(slider);
    provide_context(legend);
    provide_context(status);

    // Runs once after mount, when the map container exists.
    Effect::new(move |_| {
        set_loading_shell_step("Preparing map");
        if let Err(e) = session::init_map() {
            web_sys::console::warn_1(&format!("Map init failed: {e}").into());
            status.0.set(LoadStatus::Failed(e));
            remove_loading_shell();
            return;
        }

        set_loading_shell_step("Loading colonies");
        spawn_local(async move {
            let result = match data::load_feature_store().await {
                Ok(store) => session::start(store, DEFAULT_YEAR, |transition| {
                    present_transition(transition, slider, legend)
                }),
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => status.0.set(LoadStatus::Ready),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Feature load failed: {e}").into());
                    status.0.set(LoadStatus::Failed(e));
                }
            }
            remove_loading_shell();
        });
    });

    let error_banner = move || match status.0.get() {
        LoadStatus::Failed(message) => Some(view! {
            <div class="load-error" role="alert">
                "Could not load the colony data: " {message}
            </div>
        }),
        _ => None,
    };

    view! {
        <div id=MAP_CONTAINER_ID class="map"></div>
        <TimeControl />
        {error_banner}
    }
}
