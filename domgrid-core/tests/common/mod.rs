//! Graph builders shared by the integration tests.

use domgrid_core::{Edge, GraphGeneratorBuilder, GridPosition, Vertex, VertexId, WeightedGraph};
use domgrid_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

/// Places vertices on the odd cells, four per row from `(1, 1)`, and joins
/// the listed pairs with explicit weights.
#[must_use]
pub fn weighted_graph(vertex_count: u8, edges: &[(usize, usize, f64)]) -> WeightedGraph {
    let vertices = (0..vertex_count)
        .map(|slot| {
            let position = GridPosition::new(1 + 2 * (slot % 4), 1 + 2 * (slot / 4));
            Vertex::new(VertexId::new(usize::from(slot) + 1), position)
        })
        .collect();
    let edges = edges
        .iter()
        .map(|&(left, right, weight)| Edge::new(VertexId::new(left), VertexId::new(right), weight))
        .collect();
    WeightedGraph::from_parts(vertices, edges)
}

/// Generates a graph, panicking on invalid parameters.
#[must_use]
pub fn generated(vertices: usize, edges: usize, seed: u64) -> WeightedGraph {
    GraphGeneratorBuilder::new()
        .with_vertex_count(vertices)
        .with_edge_count(edges)
        .with_seed(seed)
        .build()
        .and_then(|generator| generator.generate())
        .expect("test parameters must generate")
}

/// Proptest configuration honouring `PROPTEST_CASES` and `DOMGRID_PBT_FORK`.
#[must_use]
pub fn proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}
