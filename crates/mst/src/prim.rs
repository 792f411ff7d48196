use crate::INF;
use crate::graph::{Graph, VertexId};
use crate::queue::PriorityQueue;

/// Grow a minimum spanning tree from `source` and return its total weight.
///
/// - Each vertex ends with the weight of the edge that attached it to the tree
///   and a parent pointer naming the other endpoint; see [`mst_edges`].
/// - The total is the exact sum of every distance, clamped to the `i64` range.
///   The first vertex of each component unreachable from `source` keeps
///   [`INF`], so a disconnected graph saturates at (or just below) `i64::MAX`.
///   The rest of such a component still forms its own tree.
/// - Returns `0` without touching the graph when `source` is not one of its
///   vertices.
pub fn mst_prim(graph: &mut Graph, source: VertexId) -> i64 {
    if graph.vertex(source).is_none() {
        return 0;
    }

    for id in graph.vertex_ids() {
        let vertex = graph.vertex_mut(id);
        vertex.distance = INF;
        vertex.parent = None;
    }
    graph.vertex_mut(source).distance = 0;

    let mut queue = PriorityQueue::with_capacity(graph.size());
    for id in graph.vertex_ids() {
        let key = graph.vertices()[id.index()].distance;
        queue.insert(graph, id, key);
    }

    while let Some(u) = queue.extract_min(graph) {
        for i in 0..graph.vertices()[u.index()].degree() {
            let vertex = &graph.vertices()[u.index()];
            let (v, weight) = (vertex.neighbors()[i], vertex.weights()[i]);

            let target = graph.vertex_mut(v);
            if !queue.holds(v, target.heap_index) || weight > target.distance {
                continue;
            }
            target.parent = Some(u);
            target.distance = weight;
            let slot = target.heap_index;
            queue.decrease_key(graph, slot, weight);
        }
    }

    let total: i128 = graph.vertices().iter().map(|vertex| i128::from(vertex.distance)).sum();
    total.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// Tree edges `(parent, child, weight)` left behind by the last [`mst_prim`] run.
pub fn mst_edges(graph: &Graph) -> Vec<(VertexId, VertexId, i64)> {
    graph
        .vertex_ids()
        .filter_map(|id| {
            let vertex = graph.vertex(id)?;
            Some((vertex.parent()?, id, vertex.distance()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{mst_edges, mst_prim};
    use crate::INF;
    use crate::graph::Graph;

    #[test]
    fn single_vertex_weighs_nothing() {
        let mut g = Graph::new();
        let v = g.add_vertex();
        assert_eq!(mst_prim(&mut g, v), 0);
        assert_eq!(g.vertex(v).unwrap().parent(), None);
        assert!(mst_edges(&g).is_empty());
    }

    #[test]
    fn unknown_source_is_ignored() {
        let mut g = Graph::with_vertices(2);
        let mut other = Graph::with_vertices(5);
        let stranger = other.vertex_id(4).unwrap();
        let a = g.vertex_id(0).unwrap();
        let b = g.vertex_id(1).unwrap();
        g.add_edge(a, b, 3);

        assert_eq!(mst_prim(&mut g, stranger), 0);
        assert_eq!(g.vertex(a).unwrap().distance(), INF);
        assert_eq!(g.vertex(b).unwrap().parent(), None);

        let mut empty = Graph::new();
        assert_eq!(mst_prim(&mut empty, a), 0);
        assert_eq!(mst_prim(&mut other, stranger), INF);
    }

    #[test]
    fn zero_weight_triangle() {
        let mut g = Graph::new();
        let v1 = g.add_vertex();
        let v2 = g.add_vertex();
        let v3 = g.add_vertex();
        g.add_edge(v1, v2, 0);
        g.add_edge(v1, v3, 0);
        g.add_edge(v2, v3, 0);

        assert_eq!(mst_prim(&mut g, v1), 0);
        assert_eq!(g.vertex(v1).unwrap().parent(), None);
        for v in [v2, v3] {
            let parent = g.vertex(v).unwrap().parent().unwrap();
            assert_ne!(parent, v);
            assert!(g.vertex(parent).is_some());
        }
        assert_eq!(mst_edges(&g).len(), 2);
    }

    #[test]
    fn picks_cheapest_edges() {
        //  a --1-- b
        //  |     / |
        //  4   2   5
        //  | /     |
        //  c --3-- d
        let mut g = Graph::with_vertices(4);
        let [a, b, c, d] = [0, 1, 2, 3].map(|i| g.vertex_id(i).unwrap());
        g.add_edge(a, b, 1);
        g.add_edge(a, c, 4);
        g.add_edge(b, c, 2);
        g.add_edge(b, d, 5);
        g.add_edge(c, d, 3);

        assert_eq!(mst_prim(&mut g, a), 6);
        assert_eq!(mst_edges(&g), vec![(a, b, 1), (b, c, 2), (c, d, 3)]);

        assert_eq!(mst_prim(&mut g, d), 6);
        assert_eq!(g.vertex(d).unwrap().parent(), None);
        assert_eq!(g.vertex(c).unwrap().parent(), Some(d));
    }

    #[test]
    fn equal_weight_edge_overwrites_parent() {
        let mut g = Graph::with_vertices(3);
        let [s, a, b] = [0, 1, 2].map(|i| g.vertex_id(i).unwrap());
        g.add_edge(s, b, 5);
        g.add_edge(s, a, 1);
        g.add_edge(a, b, 5);

        assert_eq!(mst_prim(&mut g, s), 6);
        assert_eq!(g.vertex(b).unwrap().parent(), Some(a));
        assert_eq!(g.vertex(b).unwrap().distance(), 5);
    }

    #[test]
    fn parallel_edges_use_the_lightest() {
        let mut g = Graph::with_vertices(2);
        let [a, b] = [0, 1].map(|i| g.vertex_id(i).unwrap());
        for w in [9, 4, 7] {
            g.add_edge(a, b, w);
        }
        assert_eq!(mst_prim(&mut g, a), 4);
    }

    #[test]
    fn self_loops_do_not_count() {
        let mut g = Graph::with_vertices(2);
        let [a, b] = [0, 1].map(|i| g.vertex_id(i).unwrap());
        g.add_edge(a, a, -10);
        g.add_edge(b, b, -20);
        g.add_edge(a, b, 3);
        assert_eq!(mst_prim(&mut g, a), 3);
        assert_eq!(g.vertex(a).unwrap().parent(), None);
        assert_eq!(g.vertex(b).unwrap().parent(), Some(a));
    }

    #[test]
    fn negative_weights_are_allowed() {
        let g_edges = [(0, 1, -4), (1, 2, -1), (0, 2, 2)];
        let mut g = Graph::from_edges(3, &g_edges);
        let source = g.vertex_id(2).unwrap();
        assert_eq!(mst_prim(&mut g, source), -5);
    }

    #[test]
    fn disconnected_graph_saturates() {
        let mut g = Graph::with_vertices(2);
        let a = g.vertex_id(0).unwrap();
        assert_eq!(mst_prim(&mut g, a), i64::MAX);
        assert_eq!(g.vertex_id(1).and_then(|b| g.vertex(b)).unwrap().distance(), INF);

        let mut g = Graph::from_edges(5, &[(0, 1, 2), (1, 2, 2), (3, 4, 1)]);
        let [a, _, _, d, e] = [0, 1, 2, 3, 4].map(|i| g.vertex_id(i).unwrap());
        assert_eq!(mst_prim(&mut g, a), i64::MAX);
        assert_eq!(mst_edges(&g).len(), 3);
        assert_eq!(g.vertex(d).unwrap().distance(), INF);
        assert_eq!(g.vertex(d).unwrap().parent(), None);
        assert_eq!(g.vertex(e).unwrap().parent(), Some(d));
        assert_eq!(g.vertex(e).unwrap().distance(), 1);
    }

    #[test]
    fn disconnected_total_ignores_vertex_order() {
        // isolated vertex last, then first
        let mut g = Graph::from_edges(4, &[(0, 1, 3), (0, 2, -5)]);
        let source = g.vertex_id(0).unwrap();
        let last = mst_prim(&mut g, source);

        let mut g = Graph::from_edges(4, &[(1, 2, 3), (1, 3, -5)]);
        let source = g.vertex_id(1).unwrap();
        let first = mst_prim(&mut g, source);

        assert_eq!(last, i64::MAX - 2);
        assert_eq!(first, last);
    }

    #[test]
    fn several_unreached_components_clamp_to_max() {
        let mut g = Graph::from_edges(4, &[(0, 1, -7)]);
        let source = g.vertex_id(0).unwrap();
        assert_eq!(mst_prim(&mut g, source), i64::MAX);
    }

    #[test]
    fn rerun_resets_previous_state() {
        let mut g = Graph::from_edges(3, &[(0, 1, 2), (1, 2, 3)]);
        let [a, b, c] = [0, 1, 2].map(|i| g.vertex_id(i).unwrap());
        assert_eq!(mst_prim(&mut g, a), 5);
        assert_eq!(mst_prim(&mut g, c), 5);
        assert_eq!(g.vertex(c).unwrap().parent(), None);
        assert_eq!(g.vertex(b).unwrap().parent(), Some(c));
        assert_eq!(g.vertex(a).unwrap().parent(), Some(b));
    }
}
