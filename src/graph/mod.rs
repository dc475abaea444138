//! Topic graph model: nodes, edges, read state and the queries run over them.

mod credibility;
mod filter;
mod nearest;
mod progress;
mod types;

pub use credibility::{Credibility, CredibilityLabel, credibility_score, type_weight};
pub use filter::{ReadFilter, filter_nodes, matches_query, normalize_query};
pub use nearest::nearest_unread;
pub use progress::Progress;
pub use types::{Edge, EdgeType, Node, ReadSet, Strength};
