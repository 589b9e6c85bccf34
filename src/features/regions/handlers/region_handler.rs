use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};

use crate::core::error::Result;
use crate::features::regions::dtos::{HealthResponseDto, RegionResponseDto, RegionSummaryDto};
use crate::features::regions::models::ROOT_ID;
use crate::features::regions::services::RegionService;
use crate::shared::types::ErrorBody;

const DEMO_PAGE: &str = include_str!("../../../../static/demo.html");

/// Browser demo for the lookup endpoints
pub async fn demo_page() -> Html<&'static str> {
    Html(DEMO_PAGE)
}

/// Get the top-level regions of a country
#[utoipa::path(
    get,
    path = "/{country}",
    params(
        ("country" = String, Path, description = "Country code", example = "jp")
    ),
    responses(
        (status = 200, description = "Implicit root region with top-level regions as children", body = RegionResponseDto),
        (status = 404, description = "Country not found", body = ErrorBody)
    ),
    tag = "regions"
)]
pub async fn get_root_region(
    State(service): State<Arc<RegionService>>,
    Path(country): Path<String>,
) -> Result<Json<RegionResponseDto>> {
    let region = service.get_by_id(&country, ROOT_ID)?;
    Ok(Json(region.into()))
}

/// Get a region by id, with its ancestors and direct children
#[utoipa::path(
    get,
    path = "/{country}/{id}",
    params(
        ("country" = String, Path, description = "Country code", example = "jp"),
        ("id" = String, Path, description = "Region id", example = "1000")
    ),
    responses(
        (status = 200, description = "Region details", body = RegionResponseDto),
        (status = 404, description = "Country or region not found", body = ErrorBody)
    ),
    tag = "regions"
)]
pub async fn get_region(
    State(service): State<Arc<RegionService>>,
    Path((country, id)): Path<(String, String)>,
) -> Result<Json<RegionResponseDto>> {
    let region = service.get_by_id(&country, &id)?;
    Ok(Json(region.into()))
}

/// Find every region carrying a postcode (exact match)
#[utoipa::path(
    get,
    path = "/search_postcode/{country}/{postcode}",
    params(
        ("country" = String, Path, description = "Country code", example = "jp"),
        ("postcode" = String, Path, description = "Postal code", example = "1000001")
    ),
    responses(
        (status = 200, description = "Matching regions", body = Vec<RegionSummaryDto>),
        (status = 404, description = "Country not found or no matching post code", body = ErrorBody)
    ),
    tag = "regions"
)]
pub async fn search_by_postcode(
    State(service): State<Arc<RegionService>>,
    Path((country, postcode)): Path<(String, String)>,
) -> Result<Json<Vec<RegionSummaryDto>>> {
    let regions = service.search_by_postcode(&country, &postcode)?;
    let dtos: Vec<RegionSummaryDto> = regions.into_iter().map(Into::into).collect();
    Ok(Json(dtos))
}

/// Liveness check with loaded dataset sizes
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponseDto)
    ),
    tag = "health"
)]
pub async fn health_check(State(service): State<Arc<RegionService>>) -> Json<HealthResponseDto> {
    Json(HealthResponseDto {
        status: "ok".to_string(),
        datasets: service.stats().into_iter().map(Into::into).collect(),
    })
}
