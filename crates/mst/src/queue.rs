use crate::INF;
use crate::graph::VertexId;

/// Storage that records where each vertex currently sits inside a
/// [`PriorityQueue`].
pub trait HeapPositions {
    fn contains(&self, vertex: VertexId) -> bool;
    fn set_position(&mut self, vertex: VertexId, slot: usize);
}

/// Indexed binary min-heap over vertex handles.
///
/// - Slot `i` has children `2i + 1` and `2i + 2`.
/// - Every move of a vertex is reported through [`HeapPositions`], so a caller
///   can address a queued vertex by its slot for [`decrease_key`](Self::decrease_key).
/// - Extraction does not reset the removed vertex's slot; use
///   [`holds`](Self::holds) to test membership.
#[derive(Clone, Debug, Default)]
pub struct PriorityQueue {
    vertices: Vec<VertexId>,
    priorities: Vec<i64>,
}

impl PriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            priorities: Vec::with_capacity(capacity),
        }
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
    pub fn vertex_at(&self, slot: usize) -> Option<VertexId> {
        self.vertices.get(slot).copied()
    }

    #[inline]
    pub fn priority_at(&self, slot: usize) -> Option<i64> {
        self.priorities.get(slot).copied()
    }

    /// `true` iff `slot` is in range and currently holds `vertex`.
    #[inline]
    pub fn holds(&self, vertex: VertexId, slot: usize) -> bool {
        self.vertex_at(slot) == Some(vertex)
    }

    pub fn minimum(&self) -> Option<(VertexId, i64)> {
        Some((*self.vertices.first()?, self.priorities[0]))
    }

    /// Append `vertex` with key [`INF`] and lower it to `key`.
    ///
    /// Ignored when `positions` does not know the vertex.
    pub fn insert<P>(&mut self, positions: &mut P, vertex: VertexId, key: i64)
    where
        P: HeapPositions + ?Sized,
    {
        if !positions.contains(vertex) {
            return;
        }
        let slot = self.vertices.len();
        self.vertices.push(vertex);
        self.priorities.push(INF);
        positions.set_position(vertex, slot);
        self.decrease_key(positions, slot, key);
    }

    pub fn extract_min<P>(&mut self, positions: &mut P) -> Option<VertexId>
    where
        P: HeapPositions + ?Sized,
    {
        let min = *self.vertices.first()?;
        let last = self.vertices.len() - 1;
        self.vertices.swap(0, last);
        self.priorities.swap(0, last);
        self.vertices.pop();
        self.priorities.pop();

        if let Some(&root) = self.vertices.first() {
            positions.set_position(root, 0);
            self.sift_down(positions, 0);
        }
        Some(min)
    }

    /// Lower the key at `slot` to `key` and move it towards the root.
    ///
    /// Ignored when `slot` is out of range or `key` is not strictly smaller
    /// than the current key.
    pub fn decrease_key<P>(&mut self, positions: &mut P, slot: usize, key: i64)
    where
        P: HeapPositions + ?Sized,
    {
        match self.priorities.get(slot) {
            Some(&current) if key < current => {}
            _ => return,
        }

        self.priorities[slot] = key;
        positions.set_position(self.vertices[slot], slot);

        let mut i = slot;
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.priorities[parent] <= self.priorities[i] {
                break;
            }
            self.swap_slots(positions, parent, i);
            i = parent;
        }
        debug_assert!(self.ordered_with_parent(i), "decrease-key left slot {i} above its parent");
    }

    /// Release the backing storage.
    pub fn destroy(&mut self) {
        self.vertices = Vec::new();
        self.priorities = Vec::new();
    }

    fn sift_down<P>(&mut self, positions: &mut P, mut i: usize)
    where
        P: HeapPositions + ?Sized,
    {
        let len = self.priorities.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;

            let mut min = i;
            if left < len && self.priorities[left] < self.priorities[min] {
                min = left;
            }
            if right < len && self.priorities[right] < self.priorities[min] {
                min = right;
            }
            if min == i {
                debug_assert!(self.ordered_with_children(i), "sift-down stopped early at slot {i}");
                break;
            }

            self.swap_slots(positions, i, min);
            i = min;
        }
    }

    fn ordered_with_parent(&self, i: usize) -> bool {
        i == 0 || self.priorities[(i - 1) / 2] <= self.priorities[i]
    }

    fn ordered_with_children(&self, i: usize) -> bool {
        [2 * i + 1, 2 * i + 2]
            .into_iter()
            .filter(|&child| child < self.priorities.len())
            .all(|child| self.priorities[i] <= self.priorities[child])
    }

    #[inline]
    fn swap_slots<P>(&mut self, positions: &mut P, a: usize, b: usize)
    where
        P: HeapPositions + ?Sized,
    {
        self.vertices.swap(a, b);
        self.priorities.swap(a, b);
        positions.set_position(self.vertices[a], a);
        positions.set_position(self.vertices[b], b);
    }
}
