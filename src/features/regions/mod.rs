//! Administrative region hierarchy and postal code lookups.
//!
//! Each configured country ships as a flat CSV dataset compiled into the
//! binary. At startup every dataset is parsed, linked into a leveled tree and
//! indexed by id and by postcode. The result is an immutable [`RegionService`]
//! that answers all requests.
//!
//! ## Dataset format
//!
//! One region per line, six comma-separated fields:
//! `id, parent_id, name, spell, address, postcode`. An empty or `0` parent
//! means the region is top-level.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/{country}` | Top-level regions of a country |
//! | GET | `/{country}/{id}` | Region with ancestors and direct children |
//! | GET | `/search_postcode/{country}/{postcode}` | Regions with an exact postcode |
//! | GET | `/health` | Liveness and loaded dataset sizes |

pub mod datasets;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use error::LookupError;
pub use services::RegionService;
