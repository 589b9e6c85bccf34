use std::collections::HashMap;

use super::flat_record::IdFormat;
use super::region_node::{NodeKey, RegionNode};

/// Immutable lookup tables for one country, produced by the hierarchy builder.
///
/// Every node lives exactly once in `nodes`; relations and the postcode
/// buckets refer to it by key.
#[derive(Debug, Clone, Default)]
pub struct RegionIndex {
    pub(crate) id_format: IdFormat,
    pub(crate) nodes: Vec<RegionNode>,
    pub(crate) by_id: HashMap<String, NodeKey>,
    pub(crate) by_postcode: HashMap<String, Vec<NodeKey>>,
}

/// A node together with its resolved relations, one generation deep each way.
#[derive(Debug, Clone)]
pub struct RegionView<'a> {
    pub node: &'a RegionNode,
    pub ancestors: Vec<&'a RegionNode>,
    pub children: Vec<&'a RegionNode>,
}

impl RegionIndex {
    /// Number of regions, not counting the implicit root
    pub fn region_count(&self) -> usize {
        self.iter().filter(|n| !n.is_root()).count()
    }

    /// Regions that were referenced as a parent but never defined
    pub fn placeholder_count(&self) -> usize {
        self.iter()
            .filter(|n| n.placeholder && !n.is_root())
            .count()
    }

    pub fn postcode_count(&self) -> usize {
        self.by_postcode.len()
    }

    /// Look up a region by any spelling of its id the dataset format accepts
    pub fn get(&self, id: &str) -> Option<&RegionNode> {
        let id = self.id_format.canonicalize(id)?;
        self.by_id.get(id.as_ref()).map(|&key| &self.nodes[key])
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionNode> {
        self.nodes.iter()
    }

    pub fn view(&self, id: &str) -> Option<RegionView<'_>> {
        let node = self.get(id)?;
        Some(RegionView {
            node,
            ancestors: self.resolve(&node.ancestors),
            children: self.resolve(&node.children),
        })
    }

    /// Regions carrying exactly `postcode`, in dataset order
    pub fn with_postcode(&self, postcode: &str) -> Vec<&RegionNode> {
        self.by_postcode
            .get(postcode)
            .map(|keys| self.resolve(keys))
            .unwrap_or_default()
    }

    fn resolve(&self, keys: &[NodeKey]) -> Vec<&RegionNode> {
        keys.iter().map(|&key| &self.nodes[key]).collect()
    }
}
