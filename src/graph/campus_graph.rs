use hashbrown::HashMap;
use tracing::debug;

use crate::{error::GraphError, graph::Location};

/// Edge weight (distance or cost) of a connection. Always finite and `>= 0`.
pub type Weight = f64;

/// In-memory weighted undirected graph of campus locations.
///
/// # Invariants
/// - A location is a key of `adjacency` iff it belongs to the graph, possibly
///   with an empty neighbor map.
/// - `adjacency[a][b] == adjacency[b][a]` for every connection. Both halves
///   are written and removed by the same call.
/// - Every stored weight is finite and non-negative, which is what makes
///   uniform-cost search optimal.
///
/// Connection insertion is strict: both endpoints must already exist.
#[derive(Debug, Clone, Default)]
pub struct CampusGraph {
    adjacency: HashMap<Location, HashMap<Location, Weight>>,
}

impl CampusGraph {
    pub fn new() -> Self {
        CampusGraph {
            adjacency: HashMap::new(),
        }
    }

    /// Adds a location with no connections.
    ///
    /// # Returns
    /// `true` if the location was inserted, `false` if it already existed (in
    /// which case the graph is left untouched).
    pub fn add_location(&mut self, id: impl Into<Location>) -> bool {
        let id = id.into();
        if self.adjacency.contains_key(&id) {
            debug!(location = %id, "location already exists");
            return false;
        }
        debug!(location = %id, "location added");
        self.adjacency.insert(id, HashMap::new());
        true
    }

    /// Removes a location and every connection that references it.
    pub fn remove_location(&mut self, id: &str) -> Result<(), GraphError> {
        if self.adjacency.remove(id).is_none() {
            return Err(GraphError::LocationNotFound(id.into()));
        }
        for neighbors in self.adjacency.values_mut() {
            neighbors.remove(id);
        }
        debug!(location = id, "location removed");
        Ok(())
    }

    /// Connects `a` and `b` in both directions, replacing any previous weight.
    ///
    /// # Errors
    /// - [`GraphError::LocationNotFound`] if either endpoint is absent.
    /// - [`GraphError::InvalidWeight`] if `weight` is negative, NaN or infinite.
    ///
    /// Nothing is modified when an error is returned.
    pub fn add_connection(&mut self, a: &str, b: &str, weight: Weight) -> Result<(), GraphError> {
        let from = self.key(a)?;
        let to = self.key(b)?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { from, to, weight });
        }

        self.neighbors_mut(a)?.insert(to, weight);
        self.neighbors_mut(b)?.insert(from, weight);
        debug!(from = a, to = b, weight, "connection added");
        Ok(())
    }

    /// Removes the connection between `a` and `b` in both directions.
    pub fn remove_connection(&mut self, a: &str, b: &str) -> Result<(), GraphError> {
        let from = self.key(a)?;
        let to = self.key(b)?;
        if self.neighbors_mut(a)?.remove(b).is_none() {
            return Err(GraphError::ConnectionNotFound { from, to });
        }
        self.neighbors_mut(b)?.remove(a);
        debug!(from = a, to = b, "connection removed");
        Ok(())
    }

    /// The neighbor map of `id`, empty when it has no connections.
    pub fn neighbors(&self, id: &str) -> Result<&HashMap<Location, Weight>, GraphError> {
        self.adjacency
            .get(id)
            .ok_or_else(|| GraphError::LocationNotFound(id.into()))
    }

    /// Neighbors of `id` sorted by identifier. Absent locations have none.
    ///
    /// This is the expansion order shared by all search algorithms.
    pub fn sorted_neighbors(&self, id: &str) -> Vec<(&Location, Weight)> {
        let mut neighbors: Vec<_> = self
            .adjacency
            .get(id)
            .map(|map| map.iter().map(|(loc, &w)| (loc, w)).collect())
            .unwrap_or_default();
        neighbors.sort_by(|x, y| x.0.cmp(y.0));
        neighbors
    }

    /// All locations in lexicographic order.
    pub fn list_locations(&self) -> Vec<&Location> {
        let mut locations: Vec<_> = self.adjacency.keys().collect();
        locations.sort();
        locations
    }

    /// Every connection once, as `(smaller, larger, weight)`, sorted.
    pub fn connections(&self) -> Vec<(&Location, &Location, Weight)> {
        let mut connections: Vec<_> = self
            .adjacency
            .iter()
            .flat_map(|(from, neighbors)| {
                neighbors
                    .iter()
                    .filter(move |(to, _)| from <= *to)
                    .map(move |(to, &w)| (from, to, w))
            })
            .collect();
        connections.sort_by(|x, y| (x.0, x.1).cmp(&(y.0, y.1)));
        connections
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    pub fn edge_weight(&self, a: &str, b: &str) -> Option<Weight> {
        self.adjacency.get(a)?.get(b).copied()
    }

    /// Sum of the weights along `path`, `None` if some hop is not a connection
    /// or the path is empty.
    pub fn path_cost(&self, path: &[Location]) -> Option<Weight> {
        let first = path.first()?;
        if !self.contains(first.as_str()) {
            return None;
        }
        path.windows(2)
            .map(|hop| self.edge_weight(hop[0].as_str(), hop[1].as_str()))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    fn key(&self, id: &str) -> Result<Location, GraphError> {
        self.adjacency
            .get_key_value(id)
            .map(|(key, _)| key.clone())
            .ok_or_else(|| GraphError::LocationNotFound(id.into()))
    }

    fn neighbors_mut(&mut self, id: &str) -> Result<&mut HashMap<Location, Weight>, GraphError> {
        self.adjacency
            .get_mut(id)
            .ok_or_else(|| GraphError::LocationNotFound(id.into()))
    }
}
