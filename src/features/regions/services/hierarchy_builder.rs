use std::collections::{HashMap, HashSet};

use crate::features::regions::error::DatasetError;
use crate::features::regions::models::{
    FlatRecord, IdFormat, NodeKey, RegionIndex, RegionNode, ROOT_ID,
};

/// Build the id and postcode indexes for one country.
///
/// Records may arrive in any order. Pass 1 links every record under its
/// parent, creating placeholders for parents that have not been seen yet.
/// Pass 2 walks each node's parent chain to fill in ancestors and levels, once
/// every record is present. Record ids must already be in the canonical form
/// of `id_format`, which the index then applies to lookups.
pub fn build_index(
    records: Vec<FlatRecord>,
    id_format: IdFormat,
) -> Result<RegionIndex, DatasetError> {
    let mut builder = HierarchyBuilder::new();
    for record in records {
        builder.ingest(record);
    }
    builder.resolve_ancestry()?;
    Ok(builder.finish(id_format))
}

struct HierarchyBuilder {
    nodes: Vec<RegionNode>,
    by_id: HashMap<String, NodeKey>,
}

impl HierarchyBuilder {
    fn new() -> Self {
        let mut builder = Self {
            nodes: Vec::new(),
            by_id: HashMap::new(),
        };
        builder.slot(ROOT_ID);
        builder
    }

    /// Key for `id`, allocating a placeholder on first sight
    fn slot(&mut self, id: &str) -> NodeKey {
        if let Some(&key) = self.by_id.get(id) {
            return key;
        }
        let key = self.nodes.len();
        self.nodes.push(RegionNode::placeholder(id));
        self.by_id.insert(id.to_string(), key);
        key
    }

    fn ingest(&mut self, record: FlatRecord) {
        if record.id == ROOT_ID {
            tracing::warn!(
                "Skipping region '{}' with an empty or zero id",
                record.name
            );
            return;
        }

        let key = self.slot(&record.id);
        let parent_key = self.slot(&record.parent_id);

        // Children gathered while this id was a placeholder, or under an
        // earlier record for the same id, stay in place.
        let node = &mut self.nodes[key];
        let attached_to = if node.placeholder {
            None
        } else {
            tracing::debug!("Region '{}' redefined, last record wins", record.id);
            Some(node.parent_id.clone())
        };

        node.parent_id = record.parent_id;
        node.name = record.name;
        node.spell = record.spell;
        node.address = record.address;
        node.postal_code = record.postal_code;
        node.placeholder = false;

        match attached_to {
            Some(previous) if previous == self.nodes[key].parent_id => {}
            Some(previous) => {
                if let Some(&previous_key) = self.by_id.get(&previous) {
                    self.nodes[previous_key]
                        .children
                        .retain(|&child| child != key);
                }
                self.nodes[parent_key].children.push(key);
            }
            None => self.nodes[parent_key].children.push(key),
        }
    }

    fn resolve_ancestry(&mut self) -> Result<(), DatasetError> {
        let mut visited = HashSet::new();

        for key in 0..self.nodes.len() {
            if self.nodes[key].is_root() {
                self.nodes[key].level = 0;
                continue;
            }

            visited.clear();
            visited.insert(key);

            let mut chain = Vec::new();
            let mut parent_id = self.nodes[key].parent_id.as_str();
            while parent_id != ROOT_ID {
                let Some(&parent_key) = self.by_id.get(parent_id) else {
                    break;
                };
                if !visited.insert(parent_key) {
                    return Err(DatasetError::ParentCycle {
                        id: self.nodes[parent_key].id.clone(),
                    });
                }
                chain.push(parent_key);
                parent_id = self.nodes[parent_key].parent_id.as_str();
            }
            chain.reverse();

            let node = &mut self.nodes[key];
            node.level = chain.len() as u32 + 1;
            node.ancestors = chain;
        }

        Ok(())
    }

    fn finish(self, id_format: IdFormat) -> RegionIndex {
        let mut by_postcode: HashMap<String, Vec<NodeKey>> = HashMap::new();
        for (key, node) in self.nodes.iter().enumerate() {
            if !node.postal_code.is_empty() {
                by_postcode
                    .entry(node.postal_code.clone())
                    .or_default()
                    .push(key);
            }
        }

        RegionIndex {
            id_format,
            nodes: self.nodes,
            by_id: self.by_id,
            by_postcode,
        }
    }
}
