use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::year::{Year, deserialize_year, year_from_value};

/// `[longitude, latitude]`, optionally followed by altitude.
pub type Position = Vec<f64>;

/// GeoJSON geometry. The map library does all projection; geometry is carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    MultiPoint { coordinates: Vec<Position> },
    LineString { coordinates: Vec<Position> },
    MultiLineString { coordinates: Vec<Vec<Position>> },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    GeometryCollection { geometries: Vec<Geometry> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FeatureTag {
    #[default]
    Feature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FeatureCollectionTag {
    #[default]
    FeatureCollection,
}

/// One geographic feature: geometry plus typed attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "P: Serialize",
    deserialize = "P: Deserialize<'de> + Default"
))]
pub struct Feature<P> {
    #[serde(rename = "type", default)]
    pub tag: FeatureTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: P,
}

impl<P> Feature<P> {
    pub fn new(geometry: Option<Geometry>, properties: P) -> Self {
        Self {
            tag: FeatureTag::Feature,
            id: None,
            geometry,
            properties,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "P: Serialize",
    deserialize = "P: Deserialize<'de> + Default"
))]
pub struct FeatureCollection<P> {
    #[serde(rename = "type", default)]
    pub tag: FeatureCollectionTag,
    #[serde(default)]
    pub features: Vec<Feature<P>>,
}

impl<P> FeatureCollection<P> {
    pub fn new(features: Vec<Feature<P>>) -> Self {
        Self {
            tag: FeatureCollectionTag::FeatureCollection,
            features,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Attributes of a colony polygon.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColonyProperties {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Country", default)]
    pub country: Option<String>,
    /// Raw establishment date; filtering goes through [`Self::established`].
    #[serde(rename = "Est_date", default)]
    pub est_date: Option<Value>,
    #[serde(rename = "Area_ha", default)]
    pub area_ha: Option<Value>,
    #[serde(rename = "Article", default)]
    pub article: Option<String>,
}

impl ColonyProperties {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn country(&self) -> &str {
        self.country.as_deref().unwrap_or_default()
    }

    pub fn article(&self) -> &str {
        self.article.as_deref().unwrap_or_default()
    }

    /// Normalized establishment year, `None` when the attribute is not a year.
    pub fn established(&self) -> Option<Year> {
        self.est_date.as_ref().and_then(year_from_value)
    }

    /// Establishment date as it appears in the source document.
    pub fn established_text(&self) -> String {
        attribute_text(self.est_date.as_ref())
    }

    /// Area as it appears in the source document (number or text).
    pub fn area_text(&self) -> String {
        attribute_text(self.area_ha.as_ref())
    }
}

fn attribute_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(raw)) => raw.clone(),
        Some(Value::Number(number)) => number.to_string(),
        _ => String::new(),
    }
}

/// Attributes of a migration arrow line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArrowProperties {
    #[serde(rename = "Est-Year", default, deserialize_with = "deserialize_year")]
    pub year: Option<Year>,
}

pub type ColonyFeature = Feature<ColonyProperties>;
pub type ArrowFeature = Feature<ArrowProperties>;

#[cfg(test)]
mod tests {
    use super::*;

    const COLONY_DOC: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[-59.9, -22.3], [-59.5, -22.3], [-59.5, -22.6], [-59.9, -22.3]]]
                },
                "properties": {
                    "Name": "Menno",
                    "Country": "Paraguay",
                    "Est_date": 1927,
                    "Area_ha": 680000,
                    "Article": "https://gameo.org/index.php?title=Menno_Colony_(Paraguay)",
                    "OBJECTID": 4
                }
            },
            {
                "type": "Feature",
                "geometry": null,
                "properties": null
            }
        ]
    }"#;

    #[test]
    fn parses_colony_attributes_and_ignores_extras() {
        let doc: FeatureCollection<ColonyProperties> =
            serde_json::from_str(COLONY_DOC).expect("colony document should parse");
        assert_eq!(doc.features.len(), 2);

        let menno = &doc.features[0].properties;
        assert_eq!(menno.name(), "Menno");
        assert_eq!(menno.country(), "Paraguay");
        assert_eq!(menno.established(), Some(1927));
        assert_eq!(menno.established_text(), "1927");
        assert_eq!(menno.area_text(), "680000");
        assert!(matches!(
            doc.features[0].geometry,
            Some(Geometry::Polygon { .. })
        ));
    }

    #[test]
    fn null_geometry_and_properties_fall_back_to_empty() {
        let doc: FeatureCollection<ColonyProperties> =
            serde_json::from_str(COLONY_DOC).expect("colony document should parse");
        let empty = &doc.features[1];
        assert_eq!(empty.geometry, None);
        assert_eq!(empty.properties, ColonyProperties::default());
        assert_eq!(empty.properties.name(), "");
        assert_eq!(empty.properties.area_text(), "");
    }

    #[test]
    fn arrow_year_reads_hyphenated_attribute() {
        let raw = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[-106.0, 28.6], [-59.7, -22.4]]}, "properties": {"Est-Year": "1927"}},
                {"type": "Feature", "geometry": {"type": "MultiLineString", "coordinates": [[[-106.0, 28.6], [-63.2, -17.8]]]}, "properties": {"Est-Year": 1967}},
                {"type": "Feature", "geometry": {"type": "LineString", "coordinates": []}, "properties": {"Est-Year": "n/a"}}
            ]
        }"#;
        let doc: FeatureCollection<ArrowProperties> =
            serde_json::from_str(raw).expect("arrow document should parse");
        let years: Vec<Option<Year>> = doc.features.iter().map(|f| f.properties.year).collect();
        assert_eq!(years, vec![Some(1927), Some(1967), None]);
    }

    #[test]
    fn serialized_feature_keeps_geojson_shape() {
        let feature = Feature::new(
            Some(Geometry::LineString {
                coordinates: vec![vec![0.0, 1.0], vec![2.0, 3.0]],
            }),
            ArrowProperties { year: Some(1930) },
        );
        let value = serde_json::to_value(&feature).expect("feature should serialize");
        assert_eq!(value["type"], "Feature");
        assert_eq!(value["geometry"]["type"], "LineString");
        assert_eq!(value["properties"]["Est-Year"], 1930);
        assert!(value.get("id").is_none());
    }

    #[test]
    fn area_text_keeps_string_areas_verbatim() {
        let props = ColonyProperties {
            area_ha: Some(Value::String("12,500".to_owned())),
            ..ColonyProperties::default()
        };
        assert_eq!(props.area_text(), "12,500");
    }

    #[test]
    fn textual_dates_display_verbatim_but_never_filter() {
        let props: ColonyProperties =
            serde_json::from_str(r#"{"Est_date": "ca. 1927"}"#).expect("properties should parse");
        assert_eq!(props.established(), None);
        assert_eq!(props.established_text(), "ca. 1927");

        let numeric: ColonyProperties =
            serde_json::from_str(r#"{"Est_date": "1948"}"#).expect("properties should parse");
        assert_eq!(numeric.established(), Some(1948));
        assert_eq!(numeric.established_text(), "1948");
    }
}
