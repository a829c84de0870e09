//! Data structures owned by a single search call.
//!
//! # Submodules
//!
//! - [`frontier`]: FIFO, LIFO and cheapest-first collections of partial paths
//! - [`visited`]: visited-location tracking that remembers first-visit order

pub mod frontier;
pub mod visited;
