//! The campus graph: locations joined by weighted undirected connections.

mod campus_graph;
mod campus_map;
mod location;
mod random;

pub use campus_graph::*;
pub use campus_map::*;
pub use location::*;
pub use random::*;
