mod flat_record;
mod region_index;
mod region_node;

pub use flat_record::{FlatRecord, IdFormat, IdPolicy};
pub use region_index::{RegionIndex, RegionView};
pub use region_node::{NodeKey, RegionNode, ROOT_ID};
