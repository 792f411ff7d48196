pub mod generator;
pub mod graph;
mod prim;
pub mod queue;

pub use graph::Graph;
pub use graph::Vertex;
pub use graph::VertexId;
pub use prim::mst_edges;
pub use prim::mst_prim;
pub use queue::HeapPositions;
pub use queue::PriorityQueue;

/// Distance of a vertex that has not been reached yet.
pub const INF: i64 = i64::MAX;
