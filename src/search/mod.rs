//! Uninformed searches over a [`CampusGraph`](crate::graph::CampusGraph).
//!
//! All three algorithms share one exploration loop and differ only by their
//! frontier. They never mutate the graph and never fail: a missing endpoint or
//! an unreachable goal is a [`SearchResult`] without a path.

mod algorithm;
mod bfs;
mod dfs;
mod engine;
mod request;
mod result;
mod ucs;

#[cfg(test)]
pub(crate) mod test_support;

pub use algorithm::*;
pub use bfs::*;
pub use dfs::*;
pub use request::*;
pub use result::*;
pub use ucs::*;
