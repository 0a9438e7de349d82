//! Error types for the domgrid core library.
//!
//! Every fallible operation fails atomically: generation never returns a
//! partially built graph and the solvers reject malformed input before any
//! search work begins. Each error enum carries a stable machine-readable code
//! for logging surfaces.

use std::fmt;

use thiserror::Error;

use crate::graph::VertexId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error raised while configuring or running the graph generation pipeline.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GenerationError {
    /// The requested vertex count is zero or exceeds what the grid can hold
    /// under the spacing constraint.
    #[error("vertex count {requested} is outside 1..={capacity} supported by the 8x8 grid")]
    InvalidVertexCount {
        /// Vertex count supplied by the caller.
        requested: usize,
        /// Largest vertex count the grid can structurally support.
        capacity: usize,
    },
    /// The requested edge count cannot form a connected simple graph.
    #[error("edge count {requested} is outside {min}..={max} for the requested vertex count")]
    InvalidEdgeCount {
        /// Edge count supplied by the caller.
        requested: usize,
        /// Fewest edges that can span every vertex (`N - 1`).
        min: usize,
        /// Most edges a simple graph can hold (`N(N - 1) / 2`).
        max: usize,
    },
    /// The spacing constraint emptied the cell pool before every vertex was
    /// placed. Depends on the seed as well as the vertex count.
    #[error("ran out of grid cells after placing {placed} of {requested} vertices; try another seed")]
    PositionExhaustion {
        /// Number of vertices placed before the pool ran dry.
        placed: usize,
        /// Number of vertices requested.
        requested: usize,
    },
    /// An internal invariant of the pipeline was violated.
    #[error("generation invariant violated: {invariant}")]
    InvariantViolation {
        /// Name of the violated invariant.
        invariant: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`GenerationError`] variants.
    enum GenerationErrorCode for GenerationError {
        /// The requested vertex count is unsupported.
        InvalidVertexCount => InvalidVertexCount { .. } => "GENERATION_INVALID_VERTEX_COUNT",
        /// The requested edge count is unsupported.
        InvalidEdgeCount => InvalidEdgeCount { .. } => "GENERATION_INVALID_EDGE_COUNT",
        /// The spacing constraint exhausted the cell pool.
        PositionExhaustion => PositionExhaustion { .. } => "GENERATION_POSITION_EXHAUSTION",
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "GENERATION_INVARIANT_VIOLATION",
    }
}

/// Structural defect found while validating a [`crate::WeightedGraph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphValidationError {
    /// The graph has no vertices.
    #[error("graph contains no vertices")]
    EmptyGraph,
    /// Vertex ids must run `1..=N` in storage order.
    #[error("vertex at index {index} has id {found}, expected {expected}")]
    VertexIdMismatch {
        /// Storage index of the offending vertex.
        index: usize,
        /// Id required at that index.
        expected: usize,
        /// Id actually stored.
        found: usize,
    },
    /// A vertex sits outside the `1..=8` cell range on either axis.
    #[error("vertex {vertex} is positioned off the grid at ({x}, {y})")]
    PositionOutOfBounds {
        /// Offending vertex.
        vertex: VertexId,
        /// Column of the position.
        x: u8,
        /// Row of the position.
        y: u8,
    },
    /// Two vertices share a cell or occupy neighbouring cells.
    #[error("vertices {left} and {right} share or neighbour a grid cell")]
    PositionConflict {
        /// Smaller vertex id of the pair.
        left: VertexId,
        /// Larger vertex id of the pair.
        right: VertexId,
    },
    /// An edge joins a vertex to itself.
    #[error("edge ({vertex}, {vertex}) is a self-loop")]
    SelfLoop {
        /// Vertex carrying the loop.
        vertex: VertexId,
    },
    /// The same unordered vertex pair appears more than once.
    #[error("edge ({left}, {right}) appears more than once")]
    DuplicateEdge {
        /// Smaller endpoint id.
        left: VertexId,
        /// Larger endpoint id.
        right: VertexId,
    },
    /// An edge references a vertex id that is not in the graph.
    #[error("edge references vertex {vertex}, but the graph has {vertex_count} vertices")]
    UnknownVertex {
        /// The unknown vertex id.
        vertex: VertexId,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge weight is NaN, infinite or negative.
    #[error("edge ({left}, {right}) has an invalid weight")]
    InvalidWeight {
        /// Smaller endpoint id.
        left: VertexId,
        /// Larger endpoint id.
        right: VertexId,
    },
    /// The graph splits into more than one connected component.
    #[error("graph is disconnected ({components} components)")]
    Disconnected {
        /// Number of connected components found.
        components: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphValidationError`] variants.
    enum GraphValidationErrorCode for GraphValidationError {
        /// The graph has no vertices.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
        /// Vertex ids are not `1..=N`.
        VertexIdMismatch => VertexIdMismatch { .. } => "GRAPH_VERTEX_ID_MISMATCH",
        /// A vertex is positioned off the grid.
        PositionOutOfBounds => PositionOutOfBounds { .. } => "GRAPH_POSITION_OUT_OF_BOUNDS",
        /// Two vertices violate the spacing rule.
        PositionConflict => PositionConflict { .. } => "GRAPH_POSITION_CONFLICT",
        /// An edge is a self-loop.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// An edge is repeated.
        DuplicateEdge => DuplicateEdge { .. } => "GRAPH_DUPLICATE_EDGE",
        /// An edge references an unknown vertex.
        UnknownVertex => UnknownVertex { .. } => "GRAPH_UNKNOWN_VERTEX",
        /// An edge weight is invalid.
        InvalidWeight => InvalidWeight { .. } => "GRAPH_INVALID_WEIGHT",
        /// The graph is disconnected.
        Disconnected => Disconnected { .. } => "GRAPH_DISCONNECTED",
    }
}

/// Error returned by the dominating set solvers.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SolveError {
    /// The input graph is not simple, undirected and connected.
    #[error("solver precondition violated: {source}")]
    PreconditionViolation {
        /// Validation failure describing the defect.
        #[from]
        source: GraphValidationError,
    },
    /// An internal invariant of a search was violated, indicating a logic
    /// error.
    #[error("search invariant violated: {invariant}")]
    InvariantViolation {
        /// Name of the violated invariant.
        invariant: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`SolveError`] variants.
    enum SolveErrorCode for SolveError {
        /// The input graph failed validation.
        PreconditionViolation => PreconditionViolation { .. } => "SOLVE_PRECONDITION_VIOLATION",
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "SOLVE_INVARIANT_VIOLATION",
    }
}

impl SolveError {
    /// Retrieve the inner [`GraphValidationErrorCode`] when the solver rejected
    /// its input.
    #[must_use]
    pub const fn validation_code(&self) -> Option<GraphValidationErrorCode> {
        match self {
            Self::PreconditionViolation { source } => Some(source.code()),
            Self::InvariantViolation { .. } => None,
        }
    }
}

/// Error raised while converting a [`crate::GraphDocument`] into a graph.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DocumentError {
    /// The document describes a directed graph.
    #[error("directed graphs are not supported")]
    Directed,
    /// The document describes a multigraph.
    #[error("multigraphs are not supported")]
    Multigraph,
    /// The described graph failed structural validation.
    #[error("document describes an invalid graph: {source}")]
    Graph {
        /// Validation failure describing the defect.
        #[from]
        source: GraphValidationError,
    },
}

define_error_codes! {
    /// Stable codes describing [`DocumentError`] variants.
    enum DocumentErrorCode for DocumentError {
        /// The document describes a directed graph.
        Directed => Directed => "DOCUMENT_DIRECTED",
        /// The document describes a multigraph.
        Multigraph => Multigraph => "DOCUMENT_MULTIGRAPH",
        /// The described graph failed validation.
        InvalidGraph => Graph { .. } => "DOCUMENT_INVALID_GRAPH",
    }
}
