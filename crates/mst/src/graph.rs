use crate::INF;
use crate::queue::HeapPositions;

/// Slot recorded for a vertex that has never been queued.
pub const NOT_QUEUED: usize = usize::MAX;

/// Handle to a vertex owned by a [`Graph`].
///
/// Handles are plain indices into the graph's arena, so they stay valid while
/// the arena grows. A handle carries no graph identity: any handle whose index
/// is below [`Graph::size`] is accepted by that graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
pub struct Vertex {
    neighbors: Vec<VertexId>,
    weights: Vec<i64>,
    pub(crate) distance: i64,
    pub(crate) parent: Option<VertexId>,
    pub(crate) heap_index: usize,
}

impl Vertex {
    fn new() -> Self {
        Self {
            neighbors: Vec::new(),
            weights: Vec::new(),
            distance: INF,
            parent: None,
            heap_index: NOT_QUEUED,
        }
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    #[inline]
    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }

    #[inline]
    pub fn weights(&self) -> &[i64] {
        &self.weights
    }

    /// Adjacent vertices paired with the weight of the connecting edge.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = (VertexId, i64)> + '_ {
        self.neighbors.iter().copied().zip(self.weights.iter().copied())
    }

    /// Weight of the cheapest edge linking this vertex to the tree, or [`INF`].
    #[inline]
    pub fn distance(&self) -> i64 {
        self.distance
    }

    #[inline]
    pub fn parent(&self) -> Option<VertexId> {
        self.parent
    }

    /// Last slot this vertex occupied in a priority queue.
    ///
    /// The slot is not cleared on extraction; pair it with
    /// [`PriorityQueue::holds`](crate::PriorityQueue::holds) to test membership.
    #[inline]
    pub fn heap_index(&self) -> usize {
        self.heap_index
    }

    fn push_edge(&mut self, to: VertexId, weight: i64) {
        self.neighbors.push(to);
        self.weights.push(weight);
        debug_assert_eq!(self.neighbors.len(), self.weights.len());
    }
}

/// Undirected multigraph with integer edge weights.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vertices(vertex_count: usize) -> Self {
        let mut graph = Self {
            vertices: Vec::with_capacity(vertex_count),
            edge_count: 0,
        };
        for _ in 0..vertex_count {
            graph.add_vertex();
        }
        graph
    }

    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize, i64)]) -> Self {
        let mut graph = Self::with_vertices(vertex_count);
        for &(u, v, w) in edges {
            assert!(u < vertex_count, "edge endpoint out of range");
            assert!(v < vertex_count, "edge endpoint out of range");
            graph.add_edge(VertexId(u), VertexId(v), w);
        }
        graph
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.0)
    }

    /// Handle of the `index`-th vertex, if the graph has that many.
    #[inline]
    pub fn vertex_id(&self, index: usize) -> Option<VertexId> {
        (index < self.vertices.len()).then_some(VertexId(index))
    }

    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> + use<> {
        (0..self.vertices.len()).map(VertexId)
    }

    pub fn add_vertex(&mut self) -> VertexId {
        self.vertices.push(Vertex::new());
        VertexId(self.vertices.len() - 1)
    }

    /// Add an undirected edge between `u` and `v`.
    ///
    /// Parallel edges and self-loops are kept as-is. Returns `false` without
    /// touching either endpoint when one of them is out of range.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: i64) -> bool {
        if !self.contains(u) || !self.contains(v) {
            return false;
        }
        self.vertices[u.0].push_edge(v, weight);
        self.vertices[v.0].push_edge(u, weight);
        self.edge_count += 1;
        true
    }

    /// Release every vertex and its adjacency storage.
    pub fn destroy(&mut self) {
        self.vertices = Vec::new();
        self.edge_count = 0;
    }

    #[inline]
    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> &mut Vertex {
        &mut self.vertices[id.0]
    }
}

impl HeapPositions for Graph {
    #[inline]
    fn contains(&self, vertex: VertexId) -> bool {
        vertex.0 < self.vertices.len()
    }

    #[inline]
    fn set_position(&mut self, vertex: VertexId, slot: usize) {
        self.vertices[vertex.0].heap_index = slot;
    }
}
