use leptos::html;
use leptos::prelude::*;
use menno_shared::{ControllerInput, Transition};
use wasm_bindgen::JsCast;

use crate::app::{LegendText, LoadStatus, LoadStatusSignal, SliderValue};
use crate::config::{SLIDER_MAX_YEAR, SLIDER_MIN_YEAR};
use crate::session;

/// Write the transition's UI effects: slider first, then legend.
pub(crate) fn present_transition(
    transition: &Transition,
    slider: SliderValue,
    legend: LegendText,
) {
    if let Some(value) = &transition.slider_value {
        slider.0.set(value.clone());
    }
    legend.0.set(transition.legend.clone());
}

fn run_input(input: ControllerInput, slider: SliderValue, legend: LegendText) {
    let handled = session::dispatch(input, |transition| {
        present_transition(transition, slider, legend)
    });
    if !handled {
        web_sys::console::warn_1(&"year input ignored: data not loaded".into());
    }
}

/// Slider, year form and legend.
#[component]
pub fn TimeControl() -> impl IntoView {
    let slider = expect_context::<SliderValue>();
    let legend = expect_context::<LegendText>();
    let status = expect_context::<LoadStatusSignal>().0;
    let year_input: NodeRef<html::Input> = NodeRef::new();

    let inputs_disabled = move || status.get() != LoadStatus::Ready;

    let on_slider_input = move |e: web_sys::Event| {
        let Some(target) = e.target() else {
            return;
        };
        let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
            return;
        };
        let raw = input.value();
        match ControllerInput::from_slider(&raw) {
            Some(parsed) => run_input(parsed, slider, legend),
            None => web_sys::console::warn_1(&format!("ignoring slider value {raw:?}").into()),
        }
    };

    let on_submit = move |e: web_sys::SubmitEvent| {
        e.prevent_default();
        let Some(input) = year_input.get() else {
            return;
        };
        let raw = input.value();
        match ControllerInput::from_form(&raw) {
            Some(parsed) => run_input(parsed, slider, legend),
            None => web_sys::console::warn_1(&format!("ignoring year {raw:?}").into()),
        }
    };

    view! {
        <div class="time-control">
            <input
                type="range"
                class="slider"
                min=SLIDER_MIN_YEAR.to_string()
                max=SLIDER_MAX_YEAR.to_string()
                step="1"
                prop:value=move || slider.0.get()
                prop:disabled=inputs_disabled
                on:input=on_slider_input
                on:change=on_slider_input
            />
            <form id="form" on:submit=on_submit>
                <input
                    type="number"
                    id="year"
                    placeholder="Year"
                    node_ref=year_input
                    prop:disabled=inputs_disabled
                />
                <button type="submit" prop:disabled=inputs_disabled>"Go"</button>
            </form>
            <div id="temporal">
                <span>{move || legend.0.get()}</span>
            </div>
        </div>
    }
}
