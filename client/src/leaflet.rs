//! Minimal bindings to the global Leaflet `L` namespace (plus the
//! leaflet-arrowheads plugin, which hooks `L.geoJSON` options).

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L)]
    pub type Map;

    /// Throws if the container element does not exist.
    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    pub fn map(container_id: &str, options: &JsValue) -> Result<Map, JsValue>;

    #[wasm_bindgen(js_namespace = L)]
    #[derive(Clone)]
    pub type Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Layer, map: &Map) -> Layer;

    #[wasm_bindgen(method, js_name = bindTooltip)]
    pub fn bind_tooltip(this: &Layer, content: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Layer, content: &str) -> Layer;

    #[wasm_bindgen(method, js_name = setStyle)]
    pub fn set_style(this: &Layer, style: &JsValue) -> Layer;

    #[wasm_bindgen(method)]
    pub fn on(this: &Layer, event: &str, handler: &js_sys::Function) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> Layer;

    /// Builds a feature group from a GeoJSON object. Throws on invalid geometry.
    #[wasm_bindgen(catch, js_namespace = L, js_name = geoJSON)]
    pub fn geo_json(data: &JsValue, options: &JsValue) -> Result<Layer, JsValue>;

    #[wasm_bindgen(extends = Layer, js_namespace = L)]
    pub type LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    pub fn layer_group() -> LayerGroup;

    #[wasm_bindgen(method, js_name = addLayer)]
    pub fn add_layer(this: &LayerGroup, layer: &Layer) -> LayerGroup;

    #[wasm_bindgen(method, js_name = removeLayer)]
    pub fn remove_layer(this: &LayerGroup, layer: &Layer) -> LayerGroup;

    #[wasm_bindgen(js_namespace = L)]
    pub type Control;

    #[wasm_bindgen(js_namespace = ["L", "control"], js_name = layers)]
    pub fn control_layers(base_layers: &JsValue, overlays: &JsValue, options: &JsValue) -> Control;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Control, map: &Map) -> Control;
}
