use std::cmp::Ordering;

use crate::{
    graph::{Location, Weight},
    sets::frontier::TotalF64,
};

/// A partial path waiting in a search frontier, with its accumulated cost.
///
/// Entries are ordered by cost first and then lexicographically by path, which
/// gives equal-cost entries a deterministic extraction order.
///
/// # Invariants
/// - `path` is never empty: it always starts with the search's start location.
/// - `cost` is the sum of the edge weights along `path`.
#[derive(PartialEq, Eq, Clone, Hash, Debug)]
pub struct FrontierEntry {
    cost: TotalF64,
    path: Vec<Location>,
}

impl FrontierEntry {
    /// The single-location path a search is seeded with.
    pub fn root(start: Location) -> Self {
        FrontierEntry {
            cost: TotalF64(0.0),
            path: vec![start],
        }
    }

    /// This path followed by one more hop of the given weight.
    pub fn extend(&self, next: &Location, weight: Weight) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(next.clone());
        FrontierEntry {
            cost: TotalF64(self.cost.0 + weight),
            path,
        }
    }

    /// The location at the tip of the path.
    pub fn node(&self) -> &Location {
        // non-empty by construction
        &self.path[self.path.len() - 1]
    }

    pub fn cost(&self) -> Weight {
        self.cost.0
    }

    /// Number of edges along the path.
    pub fn edges(&self) -> usize {
        self.path.len() - 1
    }

    pub fn into_path(self) -> Vec<Location> {
        self.path
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.path.cmp(&other.path))
    }
}
