use serde::{Deserialize, Serialize};

use crate::{
    error::GraphError,
    graph::{CampusGraph, Location, Weight},
};

/// One undirected connection as it appears in a map file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConnection {
    pub from: Location,
    pub to: Location,
    pub weight: Weight,
}

/// Serializable description of a campus.
///
/// ```json
/// {
///   "locations": ["Gate", "Library"],
///   "connections": [{ "from": "Gate", "to": "Library", "weight": 2 }]
/// }
/// ```
///
/// Converting into a [`CampusGraph`] goes through the regular mutation
/// operations, so an invalid map is rejected the same way an invalid edit is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampusMap {
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub connections: Vec<MapConnection>,
}

impl TryFrom<CampusMap> for CampusGraph {
    type Error = GraphError;

    fn try_from(map: CampusMap) -> Result<Self, Self::Error> {
        let mut graph = CampusGraph::new();
        for location in map.locations {
            graph.add_location(location);
        }
        for connection in &map.connections {
            graph.add_connection(
                connection.from.as_str(),
                connection.to.as_str(),
                connection.weight,
            )?;
        }
        Ok(graph)
    }
}

impl From<&CampusGraph> for CampusMap {
    fn from(graph: &CampusGraph) -> Self {
        CampusMap {
            locations: graph.list_locations().into_iter().cloned().collect(),
            connections: graph
                .connections()
                .into_iter()
                .map(|(from, to, weight)| MapConnection {
                    from: from.clone(),
                    to: to.clone(),
                    weight,
                })
                .collect(),
        }
    }
}

/// The small built-in campus used when no map is supplied.
pub fn sample_campus() -> CampusGraph {
    let mut campus = CampusGraph::new();
    for location in ["A", "B", "C", "D", "E"] {
        campus.add_location(location);
    }
    let connections = [
        ("A", "B", 2.0),
        ("A", "C", 4.0),
        ("B", "D", 3.0),
        ("C", "E", 1.0),
        ("D", "E", 5.0),
    ];
    for (from, to, weight) in connections {
        // every endpoint was added above and every weight is valid
        let _ = campus.add_connection(from, to, weight);
    }
    campus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_campus_shape() {
        let campus = sample_campus();
        assert_eq!(campus.len(), 5);
        assert_eq!(campus.connections().len(), 5);
        assert_eq!(campus.edge_weight("E", "C"), Some(1.0));
    }

    #[test]
    fn parses_and_builds_graph() {
        let json = r#"{
            "locations": ["Gate", "Library", "Lab"],
            "connections": [
                { "from": "Gate", "to": "Library", "weight": 2 },
                { "from": "Library", "to": "Lab", "weight": 3.5 }
            ]
        }"#;
        let map: CampusMap = serde_json::from_str(json).unwrap();
        let graph = CampusGraph::try_from(map).unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_weight("Lab", "Library"), Some(3.5));
    }

    #[test]
    fn rejects_connection_to_undeclared_location() {
        let map = CampusMap {
            locations: vec!["Gate".into()],
            connections: vec![MapConnection {
                from: "Gate".into(),
                to: "Admin".into(),
                weight: 1.0,
            }],
        };
        assert_eq!(
            CampusGraph::try_from(map).unwrap_err(),
            GraphError::LocationNotFound("Admin".into())
        );
    }

    #[test]
    fn rejects_negative_weight() {
        let map = CampusMap {
            locations: vec!["A".into(), "B".into()],
            connections: vec![MapConnection {
                from: "A".into(),
                to: "B".into(),
                weight: -2.0,
            }],
        };
        assert!(matches!(
            CampusGraph::try_from(map),
            Err(GraphError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn graph_to_map_and_back() {
        let campus = sample_campus();
        let map = CampusMap::from(&campus);
        assert_eq!(map.locations.first(), Some(&Location::from("A")));

        let rebuilt = CampusGraph::try_from(map.clone()).unwrap();
        assert_eq!(CampusMap::from(&rebuilt), map);
    }
}
