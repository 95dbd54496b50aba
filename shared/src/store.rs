use crate::feature::{ArrowFeature, ArrowProperties, ColonyFeature, ColonyProperties, FeatureCollection};
use crate::filter::{Dated, VisibleSets, filter};
use crate::year::Year;

/// File names of the two documents inside the served `data/` directory. The
/// server loads these files and the client fetches them, so both read the same data.
pub const COLONIES_DOCUMENT: &str = "latin-america-mennonite-colonies.geojson";
pub const ARROWS_DOCUMENT: &str = "la-colony-migration-arrows.geojson";

/// Both feature collections, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureStore {
    colonies: Vec<ColonyFeature>,
    arrows: Vec<ArrowFeature>,
}

impl FeatureStore {
    pub fn new(
        colonies: FeatureCollection<ColonyProperties>,
        arrows: FeatureCollection<ArrowProperties>,
    ) -> Self {
        Self {
            colonies: colonies.features,
            arrows: arrows.features,
        }
    }

    /// Parse the two GeoJSON documents. Fails if either is not a feature collection.
    pub fn from_json(colonies: &str, arrows: &str) -> Result<Self, String> {
        let colonies = serde_json::from_str(colonies)
            .map_err(|e| format!("parse error in colonies document: {e}"))?;
        let arrows = serde_json::from_str(arrows)
            .map_err(|e| format!("parse error in migration arrows document: {e}"))?;
        Ok(Self::new(colonies, arrows))
    }

    pub fn colonies(&self) -> &[ColonyFeature] {
        &self.colonies
    }

    pub fn arrows(&self) -> &[ArrowFeature] {
        &self.arrows
    }

    /// Visible sets for `year`: colonies cumulative, arrows exact.
    pub fn visible(&self, year: Year) -> VisibleSets {
        VisibleSets {
            colonies: filter(&self.colonies, year, ColonyProperties::YEAR_MATCH),
            arrows: filter(&self.arrows, year, ArrowProperties::YEAR_MATCH),
        }
    }

    /// Earliest and latest year across every dated feature in either collection.
    pub fn year_bounds(&self) -> Option<(Year, Year)> {
        let colony_years = self.colonies.iter().filter_map(|f| f.properties.year());
        let arrow_years = self.arrows.iter().filter_map(|f| f.properties.year());
        colony_years
            .chain(arrow_years)
            .fold(None, |bounds, year| match bounds {
                None => Some((year, year)),
                Some((earliest, latest)) => Some((earliest.min(year), latest.max(year))),
            })
    }
}
