use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::graph::{Graph, VertexId};

const W_MAX: i64 = 1_000_000_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GraphCase {
    SparseRandom,
    DenseRandom,
    DenseZero,
    Grid,
    AlmostLine,
    ParallelEdges,
    Forest,
}

impl GraphCase {
    pub const ALL: [GraphCase; 7] = [
        GraphCase::SparseRandom,
        GraphCase::DenseRandom,
        GraphCase::DenseZero,
        GraphCase::Grid,
        GraphCase::AlmostLine,
        GraphCase::ParallelEdges,
        GraphCase::Forest,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::SparseRandom => "sparse_random",
            Self::DenseRandom => "dense_random",
            Self::DenseZero => "dense_zero",
            Self::Grid => "grid",
            Self::AlmostLine => "almost_line",
            Self::ParallelEdges => "parallel_edges",
            Self::Forest => "forest",
        }
    }

    /// Every case except [`GraphCase::Forest`] yields a single component.
    pub fn is_connected(self) -> bool {
        !matches!(self, Self::Forest)
    }
}

#[derive(Clone, Debug)]
pub struct GeneratedGraph {
    pub graph: Graph,
    pub source: VertexId,
    /// Input edge list, `(u, v, weight)` with `u`/`v` as vertex indices.
    pub edges: Vec<(usize, usize, i64)>,
}

impl GeneratedGraph {
    fn new(n: usize, edges: Vec<(usize, usize, i64)>, source: usize) -> Self {
        let graph = Graph::from_edges(n, &edges);
        let source = graph.vertex_id(source).expect("source in range");
        Self {
            graph,
            source,
            edges,
        }
    }
}

pub fn generate_case(case: GraphCase, size: usize, seed: u64) -> GeneratedGraph {
    match case {
        GraphCase::SparseRandom => sparse_random_case(size.max(32), seed),
        GraphCase::DenseRandom => dense_random_case(size.max(64), seed),
        GraphCase::DenseZero => dense_zero_case(size.max(64), seed),
        GraphCase::Grid => grid_case(size.max(16), seed),
        GraphCase::AlmostLine => almost_line_case(size.max(8), seed),
        GraphCase::ParallelEdges => parallel_edges_case(size.max(8), seed),
        GraphCase::Forest => forest_case(size.max(16), seed),
    }
}

fn sparse_random_case(n: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = random_spanning_tree(&mut rng, n);
    let mut used: HashSet<(usize, usize)> = edges.iter().map(|&(u, v, _)| key(u, v)).collect();

    let m_target = (n.saturating_mul(4)).min(complete_edges(n));
    while edges.len() < m_target {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u != v && used.insert(key(u, v)) {
            edges.push((u, v, rng.random_range(0..=W_MAX)));
        }
    }

    edges.shuffle(&mut rng);
    let source = rng.random_range(0..n);
    GeneratedGraph::new(n, edges, source)
}

fn dense_random_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = floor_sqrt(size).max(8);
    let mut edges = Vec::with_capacity(complete_edges(n));

    for u in 0..n {
        for v in (u + 1)..n {
            edges.push((u, v, rng.random_range(-W_MAX..=W_MAX)));
        }
    }

    let source = rng.random_range(0..n);
    GeneratedGraph::new(n, edges, source)
}

fn dense_zero_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = floor_sqrt(size).max(8);
    let mut edges = Vec::with_capacity(complete_edges(n));

    for u in 0..n {
        for v in (u + 1)..n {
            edges.push((u, v, 0));
        }
    }

    let source = rng.random_range(0..n);
    GeneratedGraph::new(n, edges, source)
}

fn grid_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let len = floor_sqrt(size).max(4);
    let n = len * len;
    let mut edges = Vec::with_capacity(n * 2);

    let index = |i: usize, j: usize| -> usize { i * len + j };
    for i in 0..len {
        for j in 0..len {
            if j + 1 < len {
                edges.push((index(i, j), index(i, j + 1), rng.random_range(0..=100)));
            }
            if i + 1 < len {
                edges.push((index(i, j), index(i + 1, j), rng.random_range(0..=100)));
            }
        }
    }

    edges.shuffle(&mut rng);
    let source = rng.random_range(0..n);
    GeneratedGraph::new(n, edges, source)
}

fn almost_line_case(n: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(n * 2);

    for i in 0..(n - 1) {
        edges.push((i, i + 1, rng.random_range(0..=10)));
    }
    for _ in 0..n {
        let a = rng.random_range(0..(n - 2));
        let b = (a + rng.random_range(2..=3)).min(n - 1);
        edges.push((a, b, rng.random_range(1_000..=W_MAX)));
    }

    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(&mut rng);
    for edge in &mut edges {
        edge.0 = perm[edge.0];
        edge.1 = perm[edge.1];
    }
    edges.shuffle(&mut rng);

    GeneratedGraph::new(n, edges, perm[0])
}

fn parallel_edges_case(n: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = random_spanning_tree(&mut rng, n);

    let copies = edges.len();
    for i in 0..copies {
        let (u, v, _) = edges[i];
        for _ in 0..rng.random_range(1..=3) {
            edges.push((u, v, rng.random_range(0..=1_000)));
        }
    }
    for _ in 0..n {
        let v = rng.random_range(0..n);
        edges.push((v, v, rng.random_range(-1_000..=1_000)));
    }

    edges.shuffle(&mut rng);
    let source = rng.random_range(0..n);
    GeneratedGraph::new(n, edges, source)
}

fn forest_case(n: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let components = rng.random_range(2..=4);
    let mut edges = Vec::new();

    let chunk = n / components;
    for c in 0..components {
        let start = c * chunk;
        let end = if c + 1 == components { n } else { start + chunk };
        for (u, v, w) in random_spanning_tree(&mut rng, end - start) {
            edges.push((start + u, start + v, w));
        }
    }

    edges.shuffle(&mut rng);
    let source = rng.random_range(0..n);
    GeneratedGraph::new(n, edges, source)
}

/// Random tree over `0..n`: each vertex after the first joins an earlier one.
fn random_spanning_tree<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<(usize, usize, i64)> {
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);
    (1..n)
        .map(|i| {
            let parent = order[rng.random_range(0..i)];
            (parent, order[i], rng.random_range(0..=W_MAX))
        })
        .collect()
}

#[inline]
fn key(u: usize, v: usize) -> (usize, usize) {
    (u.min(v), u.max(v))
}

#[inline]
fn complete_edges(n: usize) -> usize {
    n.saturating_mul(n.saturating_sub(1)) / 2
}

#[inline]
fn floor_sqrt(value: usize) -> usize {
    (value as f64).sqrt().floor() as usize
}
