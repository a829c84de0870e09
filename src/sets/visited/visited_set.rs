use hashbrown::HashSet;

use crate::graph::Location;

/// Set of expanded locations that also remembers the order of first visit.
///
/// Owned by a single search call and dropped when it returns.
#[derive(Debug, Default)]
pub struct VisitedSet {
    members: HashSet<Location>,
    order: Vec<Location>,
}

impl VisitedSet {
    pub fn new() -> Self {
        VisitedSet {
            members: HashSet::new(),
            order: Vec::new(),
        }
    }

    /// Marks `location` visited.
    ///
    /// # Returns
    /// `true` on the first visit, `false` if it was already visited.
    pub fn insert(&mut self, location: &Location) -> bool {
        if self.members.contains(location) {
            return false;
        }
        self.members.insert(location.clone());
        self.order.push(location.clone());
        true
    }

    pub fn contains(&self, location: &str) -> bool {
        self.members.contains(location)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Locations in the order they were first visited.
    pub fn into_order(self) -> Vec<Location> {
        self.order
    }
}
