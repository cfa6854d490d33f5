mod component;
mod edges;
mod keywords;
mod render;
mod state;
mod types;

pub use component::KeywordConstellation;
pub use edges::{dedup_edges, derive_edges};
pub use keywords::keyword_constellation;
pub use types::{KeywordEdge, KeywordNode};
