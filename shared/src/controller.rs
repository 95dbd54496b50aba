//! Slider/form controller as a pure state machine.
//!
//! UI adapters translate slider and form events into [`ControllerInput`] and
//! apply the returned [`Transition`] in order: slider write-back, legend,
//! then layer operations.

use crate::filter::VisibleSets;
use crate::legend::legend_text;
use crate::reconcile::{Collection, LayerOp, RenderSurface, apply_ops, diff};
use crate::store::FeatureStore;
use crate::year::{Year, parse_year};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerInput {
    /// Slider `input`/`change` event.
    Slider(Year),
    /// Form submit with the value of the numeric year field.
    Form(Year),
}

impl ControllerInput {
    pub fn from_slider(raw: &str) -> Option<Self> {
        parse_year(raw).map(Self::Slider)
    }

    pub fn from_form(raw: &str) -> Option<Self> {
        parse_year(raw).map(Self::Form)
    }

    pub fn year(self) -> Year {
        match self {
            Self::Slider(year) | Self::Form(year) => year,
        }
    }
}

/// Selected year plus what is currently attached to the rendering surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerState {
    selected_year: Option<Year>,
    visible: VisibleSets,
}

/// Everything the UI must do after one input, in application order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub selected_year: Year,
    /// Value to write back into the slider; only set for form submissions.
    pub slider_value: Option<String>,
    pub legend: String,
    pub colony_ops: Vec<LayerOp>,
    pub arrow_ops: Vec<LayerOp>,
}

impl Transition {
    /// Apply the layer operations, colonies first.
    pub fn apply_to<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        apply_ops(surface, Collection::Colonies, &self.colony_ops);
        apply_ops(surface, Collection::Arrows, &self.arrow_ops);
    }

    pub fn is_noop(&self) -> bool {
        self.colony_ops.is_empty() && self.arrow_ops.is_empty()
    }
}

impl ControllerState {
    /// Initial filter pass against an empty surface using the slider default.
    pub fn start(store: &FeatureStore, default_year: Year) -> (Self, Transition) {
        Self::default().transition(store, default_year, None)
    }

    pub fn apply(&self, store: &FeatureStore, input: ControllerInput) -> (Self, Transition) {
        let slider_value = match input {
            ControllerInput::Slider(_) => None,
            ControllerInput::Form(year) => Some(year.to_string()),
        };
        self.transition(store, input.year(), slider_value)
    }

    pub fn selected_year(&self) -> Option<Year> {
        self.selected_year
    }

    pub fn visible(&self) -> &VisibleSets {
        &self.visible
    }

    fn transition(
        &self,
        store: &FeatureStore,
        year: Year,
        slider_value: Option<String>,
    ) -> (Self, Transition) {
        let visible = store.visible(year);
        let transition = Transition {
            selected_year: year,
            slider_value,
            legend: legend_text(year),
            colony_ops: diff(&self.visible.colonies, &visible.colonies),
            arrow_ops: diff(&self.visible.arrows, &visible.arrows),
        };
        let next = Self {
            selected_year: Some(year),
            visible,
        };
        (next, transition)
    }
}
