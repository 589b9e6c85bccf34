use utoipa::{Modify, OpenApi};

use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::shared::types::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Regions
        regions_handlers::get_root_region,
        regions_handlers::get_region,
        regions_handlers::search_by_postcode,
        // Health
        regions_handlers::health_check,
    ),
    components(
        schemas(
            ErrorBody,
            regions_dtos::RegionSummaryDto,
            regions_dtos::RegionResponseDto,
            regions_dtos::DatasetStatsDto,
            regions_dtos::HealthResponseDto,
        )
    ),
    tags(
        (name = "regions", description = "Administrative region hierarchy and postal code search"),
        (name = "health", description = "Service liveness"),
    ),
    info(
        title = "Georegion API",
        version = "0.1.0",
        description = "Administrative region hierarchy and postal code lookups",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
