//! Node-link interchange document.
//!
//! The document mirrors the node-link JSON layout common to graph tooling:
//!
//! ```json
//! {
//!   "directed": false,
//!   "multigraph": false,
//!   "nodes": [{ "id": 1, "pos": [3, 7] }],
//!   "links": [{ "source": 1, "target": 2, "weight": 2.0, "color": "black" }]
//! }
//! ```
//!
//! Serialization derives are available behind the `serde` feature. Unknown
//! top-level keys (such as an empty `"graph"` attribute map) are ignored and
//! `edges` is accepted in place of `links`.

use crate::{
    error::DocumentError,
    graph::{Edge, Vertex, VertexId, WeightedGraph},
    grid::GridPosition,
};

/// Serialisable snapshot of a [`WeightedGraph`].
///
/// # Examples
/// ```
/// use domgrid_core::{GraphDocument, GraphGeneratorBuilder};
///
/// let graph = GraphGeneratorBuilder::new().build()?.generate()?;
/// let document = GraphDocument::from_graph(&graph);
/// assert_eq!(document.nodes.len(), 5);
/// assert_eq!(document.into_graph()?, graph);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphDocument {
    /// Always `false` for documents this crate writes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub directed: bool,
    /// Always `false` for documents this crate writes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub multigraph: bool,
    /// Vertices in id order.
    pub nodes: Vec<NodeRecord>,
    /// Edges in graph order.
    #[cfg_attr(feature = "serde", serde(alias = "edges"))]
    pub links: Vec<LinkRecord>,
}

/// A vertex entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeRecord {
    /// Vertex id.
    pub id: usize,
    /// Grid cell as `[x, y]`.
    pub pos: (u8, u8),
}

/// An edge entry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkRecord {
    /// One endpoint id.
    pub source: usize,
    /// The other endpoint id.
    pub target: usize,
    /// Edge weight.
    pub weight: f64,
    /// Drawing colour; red marks an edge of the chosen dominating set.
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: EdgeColor,
}

/// Colour annotation carried by each link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum EdgeColor {
    /// Ordinary edge.
    #[default]
    Black,
    /// Edge selected by a solver.
    Red,
}

impl EdgeColor {
    const fn for_selection(selected: bool) -> Self {
        if selected { Self::Red } else { Self::Black }
    }

    /// Returns `true` for the selection colour.
    #[must_use]
    pub const fn is_selected(self) -> bool {
        matches!(self, Self::Red)
    }
}

impl GraphDocument {
    /// Captures `graph`, including its selection markers.
    #[must_use]
    pub fn from_graph(graph: &WeightedGraph) -> Self {
        let nodes = graph
            .vertices()
            .iter()
            .map(|vertex| NodeRecord {
                id: vertex.id().get(),
                pos: (vertex.position().x(), vertex.position().y()),
            })
            .collect();
        let links = graph
            .edges()
            .iter()
            .map(|edge| LinkRecord {
                source: edge.source().get(),
                target: edge.target().get(),
                weight: edge.weight(),
                color: EdgeColor::for_selection(edge.is_selected()),
            })
            .collect();
        Self {
            directed: false,
            multigraph: false,
            nodes,
            links,
        }
    }

    /// Rebuilds and validates the described graph.
    ///
    /// Red links come back as selected edges. Weights are taken as written;
    /// they are not recomputed from the positions.
    ///
    /// # Errors
    /// Returns [`DocumentError::Directed`] or [`DocumentError::Multigraph`]
    /// for unsupported graph kinds, and [`DocumentError::Graph`] when the
    /// described graph fails [`WeightedGraph::validate`].
    pub fn into_graph(self) -> Result<WeightedGraph, DocumentError> {
        if self.directed {
            return Err(DocumentError::Directed);
        }
        if self.multigraph {
            return Err(DocumentError::Multigraph);
        }

        let vertices = self
            .nodes
            .into_iter()
            .map(|node| {
                let (x, y) = node.pos;
                Vertex::new(VertexId::new(node.id), GridPosition::new(x, y))
            })
            .collect();
        let edges = self
            .links
            .into_iter()
            .map(|link| {
                Edge::new(VertexId::new(link.source), VertexId::new(link.target), link.weight)
                    .with_selected(link.color.is_selected())
            })
            .collect();
        let graph = WeightedGraph::from_parts(vertices, edges);
        graph.validate()?;
        Ok(graph)
    }
}
