use rand::Rng;

use crate::graph::CampusGraph;

/// Generates a random campus in the G(n, p) model.
///
/// Locations are named `L00`, `L01`, ... so that lexicographic order matches
/// creation order for up to a hundred locations. Each unordered pair is
/// connected with probability `edge_probability` and an integral weight drawn
/// uniformly from `0..=max_weight`. Probabilities outside `[0, 1]` are
/// clamped and NaN counts as 0.
pub fn random_campus<R: Rng + ?Sized>(
    rng: &mut R,
    nodes: usize,
    edge_probability: f64,
    max_weight: u32,
) -> CampusGraph {
    let p = if edge_probability.is_nan() {
        0.0
    } else {
        edge_probability.clamp(0.0, 1.0)
    };
    let names: Vec<String> = (0..nodes).map(|i| format!("L{i:02}")).collect();

    let mut campus = CampusGraph::new();
    for name in &names {
        campus.add_location(name.as_str());
    }
    for (i, from) in names.iter().enumerate() {
        for to in &names[i + 1..] {
            if rng.random_bool(p) {
                let weight = rng.random_range(0..=max_weight) as f64;
                // both endpoints exist and the weight is non-negative
                let _ = campus.add_connection(from, to, weight);
            }
        }
    }
    campus
}
