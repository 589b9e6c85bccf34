use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::regions::models::{RegionNode, RegionView};
use crate::features::regions::services::DatasetStats;

/// Flattened region: descriptive fields only, no nested relations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RegionSummaryDto {
    /// 1 for top-level regions, +1 per generation
    #[schema(example = 2)]
    pub level: u32,
    #[schema(example = "1000")]
    pub id: String,
    /// Parent region id, empty for top-level regions
    #[schema(example = "1")]
    pub parent: String,
    #[schema(example = "1000000")]
    pub postcode: String,
    #[schema(example = "千代田区")]
    pub name: String,
    #[schema(example = "東京都千代田区")]
    pub address: String,
    /// Reading or romanization of the name
    #[schema(example = "チヨダク")]
    pub spell: String,
}

impl From<&RegionNode> for RegionSummaryDto {
    fn from(node: &RegionNode) -> Self {
        Self {
            level: node.level,
            id: node.id.clone(),
            parent: node.parent_id.clone(),
            postcode: node.postal_code.clone(),
            name: node.name.clone(),
            address: node.address.clone(),
            spell: node.spell.clone(),
        }
    }
}

/// Region with its ancestor chain (top-level first) and direct children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RegionResponseDto {
    pub level: u32,
    pub id: String,
    pub parent: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parents: Vec<RegionSummaryDto>,
    pub postcode: String,
    pub name: String,
    pub address: String,
    pub spell: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RegionSummaryDto>,
}

impl From<RegionView<'_>> for RegionResponseDto {
    fn from(view: RegionView<'_>) -> Self {
        let node = view.node;
        Self {
            level: node.level,
            id: node.id.clone(),
            parent: node.parent_id.clone(),
            parents: view.ancestors.into_iter().map(Into::into).collect(),
            postcode: node.postal_code.clone(),
            name: node.name.clone(),
            address: node.address.clone(),
            spell: node.spell.clone(),
            children: view.children.into_iter().map(Into::into).collect(),
        }
    }
}

/// Loaded dataset summary reported by the health check
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DatasetStatsDto {
    #[schema(example = "jp")]
    pub country: String,
    pub regions: usize,
    pub placeholders: usize,
    pub postcodes: usize,
}

impl From<DatasetStats> for DatasetStatsDto {
    fn from(stats: DatasetStats) -> Self {
        Self {
            country: stats.country,
            regions: stats.regions,
            placeholders: stats.placeholders,
            postcodes: stats.postcodes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponseDto {
    #[schema(example = "ok")]
    pub status: String,
    pub datasets: Vec<DatasetStatsDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::regions::services::sample_service;

    #[test]
    fn test_empty_relations_are_omitted() {
        let service = sample_service();
        let dto = RegionResponseDto::from(service.get_by_id("jp", "2").unwrap());
        let json = serde_json::to_value(&dto).unwrap();

        assert!(json.get("children").is_none());
        assert_eq!(json["parents"][0]["id"], "1");
        assert!(json["parents"][0].get("children").is_none());
        assert!(json["parents"][0].get("parents").is_none());
        assert_eq!(json["parent"], "1");
        assert_eq!(json["level"], 2);
    }

    #[test]
    fn test_children_are_flattened() {
        let service = sample_service();
        let dto = RegionResponseDto::from(service.get_by_id("jp", "1").unwrap());
        let json = serde_json::to_value(&dto).unwrap();

        assert!(json.get("parents").is_none());
        assert_eq!(json["children"][0]["id"], "2");
        assert_eq!(json["children"][0]["level"], 2);
        assert!(json["children"][0].get("children").is_none());
    }
}
