use serde::Serialize;

/// Subset of Leaflet `Path` options used by the two feature layers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<&'static str>,
}

pub const COLONY_STYLE: PathStyle = PathStyle {
    color: Some("red"),
    weight: Some(0.5),
    opacity: Some(0.7),
    fill_color: Some("red"),
    fill_opacity: Some(0.5),
    dash_array: None,
};

pub const COLONY_HOVER_STYLE: PathStyle = PathStyle {
    fill_color: Some("yellow"),
    ..EMPTY_STYLE
};

pub const COLONY_RESET_STYLE: PathStyle = PathStyle {
    fill_color: Some("red"),
    ..EMPTY_STYLE
};

pub const ARROW_STYLE: PathStyle = PathStyle {
    color: Some("tan"),
    weight: Some(5.0),
    opacity: Some(0.75),
    fill_color: None,
    fill_opacity: None,
    dash_array: Some("3, 6"),
};

const EMPTY_STYLE: PathStyle = PathStyle {
    color: None,
    weight: None,
    opacity: None,
    fill_color: None,
    fill_opacity: None,
    dash_array: None,
};

/// leaflet-arrowheads decoration for migration lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Arrowheads {
    pub yawn: f64,
    pub size: &'static str,
    pub frequency: &'static str,
}

pub const ARROWHEADS: Arrowheads = Arrowheads {
    yawn: 40.0,
    size: "10px",
    frequency: "endonly",
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TooltipOptions {
    pub sticky: bool,
    #[serde(rename = "className")]
    pub class_name: &'static str,
}

pub const COLONY_TOOLTIP: TooltipOptions = TooltipOptions {
    sticky: true,
    class_name: "tooltip",
};

/// Options passed to `L.geoJSON` for one feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoJsonOptions {
    pub style: PathStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrowheads: Option<Arrowheads>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_style_only_touches_fill() {
        let value = serde_json::to_value(COLONY_HOVER_STYLE).expect("style serializes");
        assert_eq!(value, serde_json::json!({ "fillColor": "yellow" }));
    }

    #[test]
    fn colony_style_uses_leaflet_option_names() {
        let value = serde_json::to_value(COLONY_STYLE).expect("style serializes");
        assert_eq!(value["fillOpacity"], 0.5);
        assert_eq!(value["weight"], 0.5);
        assert!(value.get("dashArray").is_none());
    }

    #[test]
    fn arrow_options_carry_arrowheads() {
        let options = GeoJsonOptions {
            style: ARROW_STYLE,
            arrowheads: Some(ARROWHEADS),
        };
        let value = serde_json::to_value(options).expect("options serialize");
        assert_eq!(value["style"]["dashArray"], "3, 6");
        assert_eq!(value["arrowheads"]["frequency"], "endonly");
        assert_eq!(value["arrowheads"]["size"], "10px");
    }

    #[test]
    fn tooltip_options_use_class_name_key() {
        let value = serde_json::to_value(COLONY_TOOLTIP).expect("tooltip serializes");
        assert_eq!(value["className"], "tooltip");
        assert_eq!(value["sticky"], true);
    }
}
