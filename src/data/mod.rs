//! Built-in catalogue shipped with the map.

mod edges;
mod nodes;

pub use edges::default_edges;
pub use nodes::default_nodes;
