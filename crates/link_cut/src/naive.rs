//! O(n)-per-operation forest on a parent array.
//!
//! Rooting side effects mirror [`LinkCutTree`](crate::LinkCutTree) exactly,
//! so `find_root` answers can be compared between the two.

use crate::error::LinkCutError;
use crate::policy::{PathMonoid, VertexSum};
use crate::traits::{DynamicForest, PathOps, VertexOps};

pub struct NaiveForest<P: PathMonoid = VertexSum> {
    /// `parent[v] == v` marks a root.
    parent: Vec<usize>,
    keys: Vec<P::Key>,
}

impl<P: PathMonoid> NaiveForest<P> {
    pub fn new(values: &[P::Key]) -> Self {
        Self {
            parent: (0..values.len()).collect(),
            keys: values.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// `v`, its parent, ..., up to the root.
    fn ancestors(&self, v: usize) -> Vec<usize> {
        let mut path = vec![v];
        let mut x = v;
        while self.parent[x] != x {
            x = self.parent[x];
            path.push(x);
        }
        path
    }

    pub fn find_root(&self, v: usize) -> usize {
        let mut x = v;
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    pub fn make_root(&mut self, v: usize) {
        let path = self.ancestors(v);
        for w in path.windows(2) {
            self.parent[w[1]] = w[0];
        }
        self.parent[v] = v;
    }

    /// Re-roots at `u` and returns the path `u -> v` if connected.
    fn path(&mut self, u: usize, v: usize) -> Option<Vec<usize>> {
        self.make_root(u);
        let mut path = self.ancestors(v);
        if path.last() != Some(&u) {
            return None;
        }
        path.reverse();
        Some(path)
    }

    pub fn connected(&mut self, u: usize, v: usize) -> bool {
        self.make_root(u);
        self.find_root(v) == u
    }

    pub fn link(&mut self, u: usize, v: usize) -> Result<(), LinkCutError> {
        if u == v || self.connected(u, v) {
            return Err(LinkCutError::AlreadyConnected { u, v });
        }
        self.parent[u] = v;
        Ok(())
    }

    pub fn cut(&mut self, u: usize, v: usize) -> Result<(), LinkCutError> {
        if u == v {
            return Err(LinkCutError::NoSuchEdge { u, v });
        }
        self.make_root(u);
        if self.parent[v] != u {
            return Err(LinkCutError::NoSuchEdge { u, v });
        }
        self.parent[v] = v;
        Ok(())
    }

    pub fn path_fold(&mut self, u: usize, v: usize) -> Option<P::Agg> {
        let path = self.path(u, v)?;
        let unit = P::agg_unit();
        Some(
            path.into_iter()
                .fold(unit, |acc, x| P::agg_merge(&acc, &self.keys[x], &unit)),
        )
    }

    pub fn distance(&mut self, u: usize, v: usize) -> Option<usize> {
        self.path(u, v).map(|path| path.len() - 1)
    }

    pub fn vertex_get(&self, v: usize) -> P::Key {
        self.keys[v]
    }

    pub fn vertex_set(&mut self, v: usize, key: P::Key) {
        self.keys[v] = key;
    }
}

impl<P: PathMonoid> DynamicForest for NaiveForest<P> {
    type Key = P::Key;

    fn new(values: &[Self::Key]) -> Self {
        Self::new(values)
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn link(&mut self, u: usize, v: usize) -> Result<(), LinkCutError> {
        self.link(u, v)
    }

    fn cut(&mut self, u: usize, v: usize) -> Result<(), LinkCutError> {
        self.cut(u, v)
    }

    fn connected(&mut self, u: usize, v: usize) -> bool {
        self.connected(u, v)
    }
}

impl<P: PathMonoid> VertexOps for NaiveForest<P> {
    fn vertex_get(&mut self, v: usize) -> Self::Key {
        NaiveForest::vertex_get(self, v)
    }

    fn vertex_set(&mut self, v: usize, key: Self::Key) {
        self.vertex_set(v, key)
    }
}

impl<P: PathMonoid> PathOps for NaiveForest<P> {
    type Agg = P::Agg;

    fn make_root(&mut self, v: usize) {
        self.make_root(v)
    }

    fn find_root(&mut self, v: usize) -> usize {
        NaiveForest::find_root(self, v)
    }

    fn path_fold(&mut self, u: usize, v: usize) -> Option<Self::Agg> {
        self.path_fold(u, v)
    }

    fn distance(&mut self, u: usize, v: usize) -> Option<usize> {
        self.distance(u, v)
    }
}
