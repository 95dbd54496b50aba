use std::collections::BTreeSet;

use crate::feature::{ArrowProperties, ColonyProperties, Feature};
use crate::year::Year;

/// How a feature's year is compared against the selected year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearMatch {
    /// Visible from its year onward (`feature_year <= selected`).
    Cumulative,
    /// Visible only in its own year (`feature_year == selected`).
    Exact,
}

impl YearMatch {
    /// Features without a year never match.
    pub fn matches(self, feature_year: Option<Year>, selected: Year) -> bool {
        let Some(feature_year) = feature_year else {
            return false;
        };
        match self {
            Self::Cumulative => feature_year <= selected,
            Self::Exact => feature_year == selected,
        }
    }
}

/// Attributes that carry an establishment year and a default match rule.
pub trait Dated {
    const YEAR_MATCH: YearMatch;

    fn year(&self) -> Option<Year>;
}

impl Dated for ColonyProperties {
    const YEAR_MATCH: YearMatch = YearMatch::Cumulative;

    fn year(&self) -> Option<Year> {
        self.established()
    }
}

impl Dated for ArrowProperties {
    const YEAR_MATCH: YearMatch = YearMatch::Exact;

    fn year(&self) -> Option<Year> {
        self.year
    }
}

/// Indices of the features in one collection that are on the map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleSet(BTreeSet<usize>);

impl VisibleSet {
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ascending feature indices.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    pub fn is_subset(&self, other: &VisibleSet) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn difference<'a>(&'a self, other: &'a VisibleSet) -> impl Iterator<Item = usize> + 'a {
        self.0.difference(&other.0).copied()
    }
}

impl FromIterator<usize> for VisibleSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Select the features of one collection that pass `year_match` for `year`.
pub fn filter<P: Dated>(features: &[Feature<P>], year: Year, year_match: YearMatch) -> VisibleSet {
    features
        .iter()
        .enumerate()
        .filter(|(_, feature)| year_match.matches(feature.properties.year(), year))
        .map(|(index, _)| index)
        .collect()
}

/// Visible sets for both collections at one selected year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleSets {
    pub colonies: VisibleSet,
    pub arrows: VisibleSet,
}
