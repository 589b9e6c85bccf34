/// Id of the implicit root every dataset hangs from.
pub const ROOT_ID: &str = "";

/// Stable position of a node inside a [`RegionIndex`](super::RegionIndex) arena.
pub type NodeKey = usize;

/// A region in the hierarchy.
///
/// Relations are stored as arena keys. `children` keeps the order in which each
/// child first appeared in the dataset. `ancestors` runs from the top-level
/// region down to the direct parent and never contains the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionNode {
    pub id: String,
    pub parent_id: String,
    /// 0 for the root, 1 for top-level regions, +1 per generation
    pub level: u32,
    pub name: String,
    pub spell: String,
    pub address: String,
    pub postal_code: String,
    pub children: Vec<NodeKey>,
    pub ancestors: Vec<NodeKey>,
    /// Referenced as a parent but not (yet) defined by a record of its own
    pub placeholder: bool,
}

impl RegionNode {
    pub fn placeholder(id: &str) -> Self {
        Self {
            id: id.to_string(),
            parent_id: ROOT_ID.to_string(),
            level: 0,
            name: String::new(),
            spell: String::new(),
            address: String::new(),
            postal_code: String::new(),
            children: Vec::new(),
            ancestors: Vec::new(),
            placeholder: true,
        }
    }

    pub fn is_root(&self) -> bool {
        self.id == ROOT_ID
    }
}
