use bench::rng_for;
use link_cut::NaiveForest;
use link_cut::policy::VertexSum;
use rand::Rng;

pub const SIZES: [usize; 3] = [1_024, 4_096, 16_384];
/// The naive forest is linear per operation; skip it above this size.
pub const NAIVE_SIZE_LIMIT: usize = 4_096;
pub const OPS_PER_SIZE: usize = 5_000;
pub const VALUE_RANGE: std::ops::RangeInclusive<i64> = -1_000_000_000..=1_000_000_000;

const LINK_TRIES: usize = 32;

#[derive(Clone, Copy, Debug)]
pub enum ConnOp {
    Link { u: usize, v: usize },
    Cut { u: usize, v: usize },
    Connected { u: usize, v: usize },
}

#[derive(Clone, Copy, Debug)]
pub enum PathOp {
    VertexSet {
        v: usize,
        key: i64,
    },
    PathSum {
        u: usize,
        v: usize,
    },
    Distance {
        u: usize,
        v: usize,
    },
    EdgeSwap {
        cut_u: usize,
        cut_v: usize,
        link_u: usize,
        link_v: usize,
    },
}

#[derive(Clone, Debug)]
pub struct Case<Op> {
    pub values: Vec<i64>,
    pub edges: Vec<(usize, usize)>,
    pub ops: Vec<Op>,
}

/// Tracks the forest while ops are generated so every link/cut is valid.
struct Shadow {
    forest: NaiveForest<VertexSum>,
    edges: Vec<(usize, usize)>,
}

impl Shadow {
    fn new(n: usize) -> Self {
        Self {
            forest: NaiveForest::new(&vec![0; n]),
            edges: Vec::new(),
        }
    }

    fn link(&mut self, u: usize, v: usize) -> bool {
        if self.forest.link(u, v).is_err() {
            return false;
        }
        self.edges.push((u, v));
        true
    }

    fn cut_random(&mut self, rng: &mut impl Rng) -> Option<(usize, usize)> {
        if self.edges.is_empty() {
            return None;
        }
        let (u, v) = self.edges.swap_remove(rng.random_range(0..self.edges.len()));
        self.forest
            .cut(u, v)
            .expect("shadow edge list out of sync");
        Some((u, v))
    }

    fn link_random(&mut self, rng: &mut impl Rng, n: usize) -> Option<(usize, usize)> {
        for _ in 0..LINK_TRIES {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            if self.link(u, v) {
                return Some((u, v));
            }
        }
        None
    }
}

fn generate_values(rng: &mut impl Rng, n: usize) -> Vec<i64> {
    (0..n).map(|_| rng.random_range(VALUE_RANGE)).collect()
}

/// A random spanning tree, then a quarter of its edges removed.
pub fn generate_connectivity_case(n: usize) -> Case<ConnOp> {
    let mut rng = rng_for(1, n);
    let values = vec![0_i64; n];
    let mut shadow = Shadow::new(n);
    for i in 1..n {
        let parent = rng.random_range(0..i);
        shadow.link(i, parent);
    }
    for _ in 0..n / 4 {
        shadow.cut_random(&mut rng);
    }
    let edges = shadow.edges.clone();

    let mut ops = Vec::with_capacity(OPS_PER_SIZE);
    for _ in 0..OPS_PER_SIZE {
        let roll = rng.random_range(0..100_u32);
        let op = if roll < 25 {
            shadow
                .link_random(&mut rng, n)
                .map(|(u, v)| ConnOp::Link { u, v })
        } else if roll < 50 {
            shadow.cut_random(&mut rng).map(|(u, v)| ConnOp::Cut { u, v })
        } else {
            None
        };
        ops.push(op.unwrap_or_else(|| ConnOp::Connected {
            u: rng.random_range(0..n),
            v: rng.random_range(0..n),
        }));
    }

    Case { values, edges, ops }
}

/// Path queries over a spanning tree that keeps swapping one edge for another.
pub fn generate_path_case(n: usize) -> Case<PathOp> {
    let mut rng = rng_for(2, n);
    let values = generate_values(&mut rng, n);
    let mut shadow = Shadow::new(n);
    for i in 1..n {
        let parent = rng.random_range(0..i);
        shadow.link(i, parent);
    }
    let edges = shadow.edges.clone();

    let mut ops = Vec::with_capacity(OPS_PER_SIZE);
    for _ in 0..OPS_PER_SIZE {
        let roll = rng.random_range(0..100_u32);
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        let op = if roll < 20 {
            PathOp::VertexSet {
                v,
                key: rng.random_range(VALUE_RANGE),
            }
        } else if roll < 55 {
            PathOp::PathSum { u, v }
        } else if roll < 80 {
            PathOp::Distance { u, v }
        } else {
            match shadow.cut_random(&mut rng) {
                Some((cut_u, cut_v)) => {
                    // Reconnect the two halves through a random pair.
                    let (link_u, link_v) = loop {
                        let a = rng.random_range(0..n);
                        let b = rng.random_range(0..n);
                        if shadow.link(a, b) {
                            break (a, b);
                        }
                    };
                    PathOp::EdgeSwap {
                        cut_u,
                        cut_v,
                        link_u,
                        link_v,
                    }
                }
                None => PathOp::PathSum { u, v },
            }
        };
        ops.push(op);
    }

    Case { values, edges, ops }
}
