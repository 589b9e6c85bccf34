use std::collections::HashMap;

use crate::core::config::DatasetConfig;
use crate::features::regions::datasets::{DatasetSource, DATASETS};
use crate::features::regions::error::{DatasetError, LookupError};
use crate::features::regions::models::{IdPolicy, RegionIndex, RegionNode, RegionView};
use crate::features::regions::services::hierarchy_builder::build_index;
use crate::features::regions::services::record_parser::parse_records;

/// Per-country summary of a loaded dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetStats {
    pub country: String,
    pub regions: usize,
    pub placeholders: usize,
    pub postcodes: usize,
}

/// Read-only region lookups over every loaded country.
///
/// Built once at startup and shared behind an `Arc`; nothing here mutates
/// after construction, so concurrent requests need no locking.
pub struct RegionService {
    datasets: HashMap<String, RegionIndex>,
}

impl RegionService {
    pub fn new(datasets: HashMap<String, RegionIndex>) -> Self {
        Self { datasets }
    }

    /// Parse and index every registered dataset. Any bad dataset fails the load.
    pub fn load(config: &DatasetConfig) -> Result<Self, DatasetError> {
        let mut datasets = HashMap::new();

        for source in DATASETS {
            let index = load_dataset(source, config).inspect_err(|e| {
                tracing::error!("Failed to load '{}' dataset: {}", source.country, e);
            })?;
            datasets.insert(source.country.to_string(), index);
        }

        let service = Self::new(datasets);
        let mut total = 0;
        for stats in service.stats() {
            tracing::info!(
                "Loaded {} {} regions ({} postcodes)",
                stats.regions,
                stats.country,
                stats.postcodes
            );
            if stats.placeholders > 0 {
                tracing::warn!(
                    "{} {} regions are referenced as parents but never defined",
                    stats.placeholders,
                    stats.country
                );
            }
            total += stats.regions;
        }
        tracing::info!("Total loaded {} regions", total);

        Ok(service)
    }

    /// A region with its ancestor chain and direct children.
    ///
    /// The root id (empty string) returns the implicit root, whose children
    /// are the top-level regions. `id` is read in the dataset's id format, so
    /// `"0"` is the root and numeric ids ignore leading zeros.
    pub fn get_by_id(&self, country: &str, id: &str) -> Result<RegionView<'_>, LookupError> {
        self.dataset(country)?
            .view(id)
            .ok_or(LookupError::IdNotFound)
    }

    /// Every region whose postcode equals `postcode` exactly
    pub fn search_by_postcode(
        &self,
        country: &str,
        postcode: &str,
    ) -> Result<Vec<&RegionNode>, LookupError> {
        let matches = self.dataset(country)?.with_postcode(postcode);
        if matches.is_empty() {
            return Err(LookupError::NoMatch);
        }
        Ok(matches)
    }

    /// Summaries for every loaded country, ordered by country code
    pub fn stats(&self) -> Vec<DatasetStats> {
        let mut stats: Vec<DatasetStats> = self
            .datasets
            .iter()
            .map(|(country, index)| DatasetStats {
                country: country.clone(),
                regions: index.region_count(),
                placeholders: index.placeholder_count(),
                postcodes: index.postcode_count(),
            })
            .collect();
        stats.sort_by(|a, b| a.country.cmp(&b.country));
        stats
    }

    fn dataset(&self, country: &str) -> Result<&RegionIndex, LookupError> {
        self.datasets
            .get(country)
            .ok_or(LookupError::CountryNotFound)
    }
}

fn load_dataset(
    source: &DatasetSource,
    config: &DatasetConfig,
) -> Result<RegionIndex, DatasetError> {
    let raw = source.read(config.data_dir.as_deref())?;
    build_dataset(&raw, source, config.id_policy)
}

fn build_dataset(
    raw: &str,
    source: &DatasetSource,
    policy: IdPolicy,
) -> Result<RegionIndex, DatasetError> {
    let records = parse_records(raw, source.id_format, policy)?;
    tracing::debug!("Parsed {} {} records", records.len(), source.country);
    build_index(records, source.id_format)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::features::regions::models::{IdFormat, ROOT_ID};

    const JP_SAMPLE: &str = "1,0,Tokyo,TOKYO,Tokyo-to,100\n2,1,Chiyoda,CHIYODA,Tokyo-to Chiyoda-ku,100";

    /// Service holding a small `jp` dataset and nothing else
    pub(crate) fn sample_service() -> RegionService {
        let source = DatasetSource {
            country: "jp",
            id_format: IdFormat::Numeric,
            embedded: JP_SAMPLE,
        };
        let index = build_dataset(JP_SAMPLE, &source, IdPolicy::Strict).unwrap();
        RegionService::new(HashMap::from([("jp".to_string(), index)]))
    }

    #[test]
    fn test_get_by_id_returns_ancestors() {
        let service = sample_service();
        let view = service.get_by_id("jp", "2").unwrap();

        assert_eq!(view.node.level, 2);
        assert_eq!(view.node.postal_code, "100");
        assert_eq!(view.ancestors.len(), 1);
        assert_eq!(view.ancestors[0].id, "1");
        assert_eq!(view.ancestors[0].level, 1);
    }

    #[test]
    fn test_get_by_id_root() {
        let service = sample_service();
        let view = service.get_by_id("jp", ROOT_ID).unwrap();

        assert_eq!(view.node.level, 0);
        assert_eq!(view.children.len(), 1);
        assert_eq!(view.children[0].id, "1");
    }

    #[test]
    fn test_get_by_id_accepts_numeric_spellings() {
        let service = sample_service();

        let root = service.get_by_id("jp", "0").unwrap();
        assert_eq!(root.node.id, ROOT_ID);
        assert_eq!(root.node.level, 0);
        assert_eq!(root.children[0].id, "1");

        assert_eq!(service.get_by_id("jp", "002").unwrap().node.id, "2");
        assert_eq!(
            service.get_by_id("jp", "abc").unwrap_err(),
            LookupError::IdNotFound
        );
    }

    #[test]
    fn test_search_by_postcode_returns_all_matches() {
        let service = sample_service();
        let found = service.search_by_postcode("jp", "100").unwrap();
        let ids: Vec<&str> = found.iter().map(|n| n.id.as_str()).collect();

        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_not_found_errors_are_distinguished() {
        let service = sample_service();

        assert_eq!(
            service.get_by_id("xx", "1").unwrap_err(),
            LookupError::CountryNotFound
        );
        assert_eq!(
            service.get_by_id("jp", "999").unwrap_err(),
            LookupError::IdNotFound
        );
        assert_eq!(
            service.search_by_postcode("jp", "00000").unwrap_err(),
            LookupError::NoMatch
        );
        assert_eq!(
            service.search_by_postcode("xx", "100").unwrap_err(),
            LookupError::CountryNotFound
        );
    }

    #[test]
    fn test_queries_are_idempotent() {
        let service = sample_service();
        let first = service.get_by_id("jp", "1").unwrap();
        let second = service.get_by_id("jp", "1").unwrap();

        assert_eq!(first.node, second.node);
        assert_eq!(first.children, second.children);
    }

    #[test]
    fn test_load_embedded_datasets() {
        let service = RegionService::load(&DatasetConfig::default()).unwrap();
        let stats = service.stats();
        let countries: Vec<&str> = stats.iter().map(|s| s.country.as_str()).collect();

        assert_eq!(countries, vec!["cn", "jp"]);
        assert!(stats.iter().all(|s| s.regions > 0 && s.placeholders == 0));
        assert!(service.get_by_id("cn", "110101000000").is_ok());
        assert!(service.search_by_postcode("jp", "1000001").is_ok());
    }
}
