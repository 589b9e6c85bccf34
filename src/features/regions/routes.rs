use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionService;

/// Create routes for the regions feature
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        .route("/", get(handlers::demo_page))
        .route("/health", get(handlers::health_check))
        // Static routes take priority over the {country} captures below
        .route(
            "/search_postcode/{country}/{postcode}",
            get(handlers::search_by_postcode),
        )
        .route("/{country}", get(handlers::get_root_region))
        .route("/{country}/{id}", get(handlers::get_region))
        .with_state(service)
}
