use axum::Json;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use menno_shared::{FeatureStore, Year, legend_text, parse_year};
use serde::{Deserialize, Serialize};

use crate::app::DATA_CACHE_CONTROL;
use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "colonies": state.store.colonies().len(),
        "arrows": state.store.arrows().len(),
        "loaded_at": state.loaded_at.to_rfc3339(),
    }))
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct YearBounds {
    pub earliest: Option<Year>,
    pub latest: Option<Year>,
}

pub async fn years(State(state): State<AppState>) -> impl IntoResponse {
    let bounds = state.store.year_bounds();
    (
        [(header::CACHE_CONTROL, DATA_CACHE_CONTROL)],
        Json(YearBounds {
            earliest: bounds.map(|(earliest, _)| earliest),
            latest: bounds.map(|(_, latest)| latest),
        }),
    )
}

#[derive(Deserialize)]
pub struct VisibleQuery {
    #[serde(default)]
    pub year: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct VisibleColony {
    pub index: usize,
    pub name: String,
    pub country: String,
    pub established: Option<Year>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct VisibleArrow {
    pub index: usize,
    pub year: Option<Year>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct VisibleResponse {
    pub year: Year,
    pub legend: String,
    pub colonies: Vec<VisibleColony>,
    pub arrows: Vec<VisibleArrow>,
}

pub async fn visible(
    State(state): State<AppState>,
    Query(query): Query<VisibleQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    let year = query
        .year
        .as_deref()
        .and_then(parse_year)
        .ok_or(StatusCode::BAD_REQUEST)?;

    Ok((
        [(header::CACHE_CONTROL, DATA_CACHE_CONTROL)],
        Json(visible_response(&state.store, year)),
    ))
}

fn visible_response(store: &FeatureStore, year: Year) -> VisibleResponse {
    let visible = store.visible(year);
    let colonies = visible
        .colonies
        .iter()
        .filter_map(|index| {
            let props = &store.colonies().get(index)?.properties;
            Some(VisibleColony {
                index,
                name: props.name().to_owned(),
                country: props.country().to_owned(),
                established: props.established(),
            })
        })
        .collect();
    let arrows = visible
        .arrows
        .iter()
        .filter_map(|index| {
            let props = &store.arrows().get(index)?.properties;
            Some(VisibleArrow {
                index,
                year: props.year,
            })
        })
        .collect();

    VisibleResponse {
        year,
        legend: legend_text(year),
        colonies,
        arrows,
    }
}
