pub mod hierarchy_builder;
pub mod record_parser;
mod region_service;

pub use region_service::{DatasetStats, RegionService};

#[cfg(test)]
pub(crate) use region_service::tests::sample_service;
