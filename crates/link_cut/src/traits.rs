//! Trait-based API shared by the link-cut tree and the reference forest.

use crate::error::LinkCutError;

pub trait DynamicForest: Sized {
    type Key: Copy;

    fn new(values: &[Self::Key]) -> Self;
    fn len(&self) -> usize;
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add the edge `(u, v)`; fails if `u` and `v` are already connected.
    ///
    /// `u` becomes the root of its old component before being hung under `v`.
    fn link(&mut self, u: usize, v: usize) -> Result<(), LinkCutError>;

    /// Remove the edge `(u, v)`; fails if there is no such edge.
    fn cut(&mut self, u: usize, v: usize) -> Result<(), LinkCutError>;

    /// Also re-roots `u`'s tree at `u`.
    fn connected(&mut self, u: usize, v: usize) -> bool;
}

pub trait VertexOps: DynamicForest {
    fn vertex_get(&mut self, v: usize) -> Self::Key;
    fn vertex_set(&mut self, v: usize, key: Self::Key);
}

pub trait PathOps: DynamicForest {
    type Agg: Copy;

    fn make_root(&mut self, v: usize);
    fn find_root(&mut self, v: usize) -> usize;

    /// Aggregate over the path `u -> v`, or `None` if disconnected.
    fn path_fold(&mut self, u: usize, v: usize) -> Option<Self::Agg>;

    /// Number of edges on the path `u -> v`, or `None` if disconnected.
    fn distance(&mut self, u: usize, v: usize) -> Option<usize>;
}
