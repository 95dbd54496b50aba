pub mod controller;
pub mod feature;
pub mod filter;
pub mod legend;
pub mod popup;
pub mod reconcile;
pub mod store;
pub mod year;

pub use controller::{ControllerInput, ControllerState, Transition};
pub use feature::*;
pub use filter::{Dated, VisibleSet, VisibleSets, YearMatch};
pub use legend::legend_text;
pub use reconcile::{Collection, LayerOp, RenderSurface};
pub use store::{ARROWS_DOCUMENT, COLONIES_DOCUMENT, FeatureStore};
pub use year::{Year, parse_year};
