use menno_shared::Year;

pub const MAP_CONTAINER_ID: &str = "map";
pub const MAP_CENTER: [f64; 2] = [-10.0, -80.0];
pub const MAP_ZOOM: u8 = 4;

/// Relative path the server mounts the document directory on.
pub const DATA_PATH: &str = "data";

pub fn document_url(document: &str) -> String {
    format!("{DATA_PATH}/{document}")
}

pub const SLIDER_MIN_YEAR: Year = 1920;
pub const SLIDER_MAX_YEAR: Year = 2025;
/// Slider position on first paint; the initial filter pass uses it too.
pub const DEFAULT_YEAR: Year = 1927;

pub const COLONY_OVERLAY_NAME: &str = "Mennonite Colonies";

pub struct BaseLayerSpec {
    pub name: &'static str,
    pub url_template: &'static str,
    pub attribution: &'static str,
    pub subdomains: Option<&'static str>,
    pub max_zoom: Option<u8>,
}

/// First entry is shown by default.
pub const BASE_LAYERS: [BaseLayerSpec; 2] = [
    BaseLayerSpec {
        name: "Carto Voyager",
        url_template: "https://{s}.basemaps.cartocdn.com/rastertiles/voyager/{z}/{x}/{y}{r}.png",
        attribution: r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors &copy; <a href="https://carto.com/attributions">CARTO</a>"#,
        subdomains: Some("abcd"),
        max_zoom: Some(20),
    },
    BaseLayerSpec {
        name: "Esri Imagery",
        url_template: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
        attribution: "Tiles &copy; Esri &mdash; Source: Esri, i-cubed, USDA, USGS, AEX, GeoEye, Getmapping, Aerogrid, IGN, IGP, UPR-EGP, and the GIS User Community",
        subdomains: None,
        max_zoom: None,
    },
];
