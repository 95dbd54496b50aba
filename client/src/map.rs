use js_sys::{Function, Object, Reflect};
use menno_shared::popup::{colony_popup_html, colony_tooltip_html};
use menno_shared::{Collection, FeatureStore, Geometry, RenderSurface};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use crate::config::{
    BASE_LAYERS, BaseLayerSpec, COLONY_OVERLAY_NAME, MAP_CENTER, MAP_CONTAINER_ID, MAP_ZOOM,
};
use crate::leaflet::{self, Layer, LayerGroup, Map};
use crate::style::{
    ARROW_STYLE, ARROWHEADS, COLONY_HOVER_STYLE, COLONY_RESET_STYLE, COLONY_STYLE, COLONY_TOOLTIP,
    GeoJsonOptions,
};

#[derive(Serialize)]
struct MapOptions {
    center: [f64; 2],
    zoom: u8,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileOptions {
    attribution: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    subdomains: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_zoom: Option<u8>,
}

#[derive(Serialize)]
struct LayerControlOptions {
    collapsed: bool,
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, String> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| format!("serialize error: {e}"))
}

fn js_error(context: &str, err: JsValue) -> String {
    match err.as_string() {
        Some(message) => format!("{context}: {message}"),
        None => format!("{context}: {err:?}"),
    }
}

/// Leaflet-backed rendering surface. One `L.geoJSON` layer per feature,
/// indexed like the store; colonies live in the toggleable overlay group,
/// arrows in a group pinned to the map.
pub struct MapSurface {
    _map: Map,
    colony_group: LayerGroup,
    arrow_group: LayerGroup,
    colony_layers: Vec<Option<Layer>>,
    arrow_layers: Vec<Option<Layer>>,
    _handlers: Vec<Closure<dyn Fn(JsValue)>>,
}

impl MapSurface {
    /// Create the map with its base layers, both feature groups and the layer control.
    pub fn new() -> Result<Self, String> {
        let map = leaflet::map(
            MAP_CONTAINER_ID,
            &to_js(&MapOptions {
                center: MAP_CENTER,
                zoom: MAP_ZOOM,
            })?,
        )
        .map_err(|e| js_error("map error", e))?;

        let base_layers = Object::new();
        for (i, spec) in BASE_LAYERS.iter().enumerate() {
            let layer = base_tile_layer(spec)?;
            if i == 0 {
                layer.add_to(&map);
            }
            Reflect::set(&base_layers, &JsValue::from_str(spec.name), &layer)
                .map_err(|e| js_error("layer control error", e))?;
        }

        let colony_group = leaflet::layer_group();
        colony_group.add_to(&map);
        let arrow_group = leaflet::layer_group();
        arrow_group.add_to(&map);

        let overlays = Object::new();
        Reflect::set(&overlays, &JsValue::from_str(COLONY_OVERLAY_NAME), &colony_group)
            .map_err(|e| js_error("layer control error", e))?;
        leaflet::control_layers(
            &base_layers,
            &overlays,
            &to_js(&LayerControlOptions { collapsed: false })?,
        )
        .add_to(&map);

        Ok(Self {
            _map: map,
            colony_group,
            arrow_group,
            colony_layers: Vec::new(),
            arrow_layers: Vec::new(),
            _handlers: Vec::new(),
        })
    }

    /// Build (detached) layers for every feature in the store. Features whose
    /// geometry is missing or rejected by Leaflet get no layer and never render.
    pub fn populate(&mut self, store: &FeatureStore) -> Result<(), String> {
        let colony_options = to_js(&GeoJsonOptions {
            style: COLONY_STYLE,
            arrowheads: None,
        })?;
        let tooltip_options = to_js(&COLONY_TOOLTIP)?;
        let hover_style = to_js(&COLONY_HOVER_STYLE)?;
        let reset_style = to_js(&COLONY_RESET_STYLE)?;

        self.colony_layers = Vec::with_capacity(store.colonies().len());
        for (index, feature) in store.colonies().iter().enumerate() {
            let Some(layer) = feature_layer(feature.geometry.as_ref(), &colony_options, index)?
            else {
                self.colony_layers.push(None);
                continue;
            };
            layer.bind_tooltip(&colony_tooltip_html(&feature.properties), &tooltip_options);
            layer.bind_popup(&colony_popup_html(&feature.properties));
            self.bind_style_on(&layer, "mouseover", hover_style.clone());
            self.bind_style_on(&layer, "mouseout", reset_style.clone());
            self.colony_layers.push(Some(layer));
        }

        let arrow_options = to_js(&GeoJsonOptions {
            style: ARROW_STYLE,
            arrowheads: Some(ARROWHEADS),
        })?;
        self.arrow_layers = store
            .arrows()
            .iter()
            .enumerate()
            .map(|(index, feature)| feature_layer(feature.geometry.as_ref(), &arrow_options, index))
            .collect::<Result<_, _>>()?;

        Ok(())
    }

    fn bind_style_on(&mut self, layer: &Layer, event: &str, style: JsValue) {
        let target = layer.clone();
        let handler = Closure::<dyn Fn(JsValue)>::new(move |_event: JsValue| {
            target.set_style(&style);
        });
        layer.on(event, handler.as_ref().unchecked_ref::<Function>());
        self._handlers.push(handler);
    }

    fn layer(&self, collection: Collection, index: usize) -> Option<(&LayerGroup, &Layer)> {
        let (group, layers) = match collection {
            Collection::Colonies => (&self.colony_group, &self.colony_layers),
            Collection::Arrows => (&self.arrow_group, &self.arrow_layers),
        };
        layers.get(index)?.as_ref().map(|layer| (group, layer))
    }
}

impl RenderSurface for MapSurface {
    fn attach(&mut self, collection: Collection, index: usize) {
        if let Some((group, layer)) = self.layer(collection, index) {
            group.add_layer(layer);
        }
    }

    fn detach(&mut self, collection: Collection, index: usize) {
        if let Some((group, layer)) = self.layer(collection, index) {
            group.remove_layer(layer);
        }
    }
}

fn base_tile_layer(spec: &BaseLayerSpec) -> Result<Layer, String> {
    let options = to_js(&TileOptions {
        attribution: spec.attribution,
        subdomains: spec.subdomains,
        max_zoom: spec.max_zoom,
    })?;
    Ok(leaflet::tile_layer(spec.url_template, &options))
}

fn feature_layer(
    geometry: Option<&Geometry>,
    options: &JsValue,
    index: usize,
) -> Result<Option<Layer>, String> {
    let Some(geometry) = geometry else {
        return Ok(None);
    };
    match leaflet::geo_json(&to_js(geometry)?, options) {
        Ok(layer) => Ok(Some(layer)),
        Err(e) => {
            web_sys::console::warn_1(
                &js_error(&format!("skipping feature {index}"), e).into(),
            );
            Ok(None)
        }
    }
}
