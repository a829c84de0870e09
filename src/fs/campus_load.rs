use std::{fs, path::Path};

use tracing::info;

use crate::{
    error::{GraphError, LoadError},
    graph::{CampusGraph, CampusMap},
};

/// Reads a JSON [`CampusMap`] and builds the graph it describes.
pub fn load_campus(path: impl AsRef<Path>) -> Result<CampusGraph, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let map: CampusMap = serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = CampusGraph::try_from(map)?;

    info!(
        path = %path.display(),
        locations = graph.len(),
        connections = graph.connections().len(),
        "campus map loaded"
    );
    Ok(graph)
}

/// Writes `graph` as a pretty-printed JSON [`CampusMap`].
pub fn save_campus(path: impl AsRef<Path>, graph: &CampusGraph) -> Result<(), LoadError> {
    let path = path.as_ref();
    let json = campus_to_json(graph);
    fs::write(path, json).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the map at `path`, applies `edit` and writes the result back.
///
/// A missing file is an empty campus. The file is left untouched when
/// `edit` fails.
pub fn update_campus<F>(path: impl AsRef<Path>, edit: F) -> Result<CampusGraph, LoadError>
where
    F: FnOnce(&mut CampusGraph) -> Result<(), GraphError>,
{
    let path = path.as_ref();
    let mut graph = if path.exists() {
        load_campus(path)?
    } else {
        info!(path = %path.display(), "no campus map yet, starting empty");
        CampusGraph::new()
    };
    edit(&mut graph)?;
    save_campus(path, &graph)?;
    Ok(graph)
}

pub fn campus_to_json(graph: &CampusGraph) -> String {
    // a CampusMap only holds strings and finite numbers, which always serialize
    serde_json::to_string_pretty(&CampusMap::from(graph)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::sample_campus;

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campus.json");

        save_campus(&path, &sample_campus()).unwrap();
        let loaded = load_campus(&path).unwrap();

        assert_eq!(loaded.connections(), sample_campus().connections());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_campus(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ \"locations\": [").unwrap();

        assert!(matches!(load_campus(&path), Err(LoadError::Parse { .. })));
    }

    #[test]
    fn invalid_graph_is_graph_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("negative.json");
        std::fs::write(
            &path,
            r#"{"locations": ["A", "B"], "connections": [{"from": "A", "to": "B", "weight": -4}]}"#,
        )
        .unwrap();

        assert!(matches!(load_campus(&path), Err(LoadError::Graph(_))));
    }

    #[test]
    fn update_creates_and_edits_the_map() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campus.json");

        update_campus(&path, |graph| {
            graph.add_location("Gate");
            graph.add_location("Library");
            Ok(())
        })
        .unwrap();
        let graph = update_campus(&path, |graph| graph.add_connection("Gate", "Library", 3.0)).unwrap();
        assert_eq!(graph.edge_weight("Library", "Gate"), Some(3.0));

        let loaded = load_campus(&path).unwrap();
        assert_eq!(loaded.connections(), graph.connections());

        update_campus(&path, |graph| graph.remove_connection("Gate", "Library")).unwrap();
        let graph = update_campus(&path, |graph| graph.remove_location("Gate")).unwrap();
        let names: Vec<_> = graph.list_locations().into_iter().map(|l| l.as_str()).collect();
        assert_eq!(names, vec!["Library"]);
        assert!(load_campus(&path).unwrap().connections().is_empty());
    }

    #[test]
    fn failed_edit_leaves_the_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campus.json");
        save_campus(&path, &sample_campus()).unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let err = update_campus(&path, |graph| graph.add_connection("A", "Nowhere", 1.0)).unwrap_err();
        match err {
            LoadError::Graph(e) => {
                assert!(e.is_not_found());
                assert_eq!(e.to_string(), "location 'Nowhere' does not exist");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = update_campus(&path, |graph| graph.add_connection("A", "B", -2.0)).unwrap_err();
        assert!(matches!(err, LoadError::Graph(GraphError::InvalidWeight { .. })));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }
}
