use crate::error::LinkCutError;
use crate::policy::{PathMonoid, VertexSum};
use crate::splay::{Ptr, SplayForest};
use crate::traits::{DynamicForest, PathOps, VertexOps};

/// Link-Cut Tree over vertices `0..n`, generic over a [`PathMonoid`] policy.
///
/// Every operation takes `&mut self`: even queries restructure the
/// underlying splay trees. Vertex indices out of range are caller bugs and
/// panic.
///
/// `link` and `cut` validate their arguments and report a [`LinkCutError`].
/// `link_unchecked` and `cut_unchecked` skip validation; calling them on
/// connected vertices (resp. a non-edge) silently corrupts the forest.
pub struct LinkCutTree<P: PathMonoid = VertexSum> {
    tree: SplayForest<P>,
}

impl<P: PathMonoid> LinkCutTree<P> {
    /// A forest of isolated vertices, vertex `i` holding `values[i]`.
    pub fn new(values: &[P::Key]) -> Self {
        Self {
            tree: SplayForest::new(values),
        }
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    fn ptr(&self, v: usize) -> Ptr {
        debug_assert!(v < self.len());
        Ptr::new(v)
    }

    fn access_ptr(&mut self, x: Ptr) {
        let mut last = Ptr::NULL;
        let mut y = x;
        while !y.is_null() {
            self.tree.splay(y);
            // The old right child keeps `y` as its parent, which now reads as
            // a path-parent pointer.
            self.tree.node_mut(y).child[1] = last;
            self.tree.pull_up(y);
            last = y;
            y = self.tree.node(y).parent;
        }
        self.tree.splay(x);
    }

    /// Makes the path from the root of `v`'s tree down to `v` a single splay
    /// tree rooted at `v`.
    pub fn access(&mut self, v: usize) {
        let x = self.ptr(v);
        self.access_ptr(x);
    }

    pub fn make_root(&mut self, v: usize) {
        let x = self.ptr(v);
        self.access_ptr(x);
        self.tree.reverse(x);
    }

    /// Re-roots at `u` and exposes the path `u -> v` under `v`.
    ///
    /// Returns whether `u` and `v` are connected. If they are, [`aggregate`]
    /// of `v` is the aggregate of that path and it has `distance + 1` vertices.
    ///
    /// [`aggregate`]: Self::aggregate
    pub fn split(&mut self, u: usize, v: usize) -> bool {
        let (x, y) = (self.ptr(u), self.ptr(v));
        self.make_root(u);
        self.access_ptr(y);
        // `u` stays a parentless splay root unless `access` pulled it into `v`'s tree.
        x == y || !self.tree.node(x).parent.is_null()
    }

    /// Aggregate of the splay tree hanging below `v`.
    ///
    /// Meaningful right after `access(v)` or `split(_, v)`.
    pub fn aggregate(&self, v: usize) -> P::Agg {
        self.tree.node(self.ptr(v)).agg
    }

    pub fn connected(&mut self, u: usize, v: usize) -> bool {
        self.split(u, v)
    }

    pub fn distance(&mut self, u: usize, v: usize) -> Option<usize> {
        if !self.split(u, v) {
            return None;
        }
        let size = self.tree.node(self.ptr(v)).size as usize;
        Some(size - 1)
    }

    pub fn path_fold(&mut self, u: usize, v: usize) -> Option<P::Agg> {
        self.split(u, v).then(|| self.aggregate(v))
    }

    pub fn find_root(&mut self, v: usize) -> usize {
        let x = self.ptr(v);
        self.access_ptr(x);
        let mut y = x;
        loop {
            self.tree.push_down(y);
            let l = self.tree.node(y).child[0];
            if l.is_null() {
                break;
            }
            y = l;
        }
        self.tree.splay(y);
        y.index()
    }

    /// Hangs `u`'s tree under `v`. `u` and `v` must not be connected.
    pub fn link_unchecked(&mut self, u: usize, v: usize) {
        let (x, y) = (self.ptr(u), self.ptr(v));
        self.make_root(u);
        self.tree.node_mut(x).parent = y;
    }

    /// Removes the edge `(u, v)`, which must exist.
    pub fn cut_unchecked(&mut self, u: usize, v: usize) {
        let (x, y) = (self.ptr(u), self.ptr(v));
        self.split(u, v);
        self.tree.node_mut(x).parent = Ptr::NULL;
        self.tree.node_mut(y).child[0] = Ptr::NULL;
        self.tree.pull_up(y);
    }

    pub fn link(&mut self, u: usize, v: usize) -> Result<(), LinkCutError> {
        if u == v || self.connected(u, v) {
            #[cfg(feature = "tracing")]
            tracing::debug!(u, v, "link rejected: already connected");
            return Err(LinkCutError::AlreadyConnected { u, v });
        }
        self.link_unchecked(u, v);
        Ok(())
    }

    pub fn cut(&mut self, u: usize, v: usize) -> Result<(), LinkCutError> {
        let (x, y) = (self.ptr(u), self.ptr(v));
        // After the split the path starts at `u`; an edge means it is exactly [u, v].
        if u != v
            && self.split(u, v)
            && self.tree.node(y).child[0] == x
            && self.tree.node(x).child[1].is_null()
        {
            self.tree.node_mut(x).parent = Ptr::NULL;
            self.tree.node_mut(y).child[0] = Ptr::NULL;
            self.tree.pull_up(y);
            return Ok(());
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(u, v, "cut rejected: no such edge");
        Err(LinkCutError::NoSuchEdge { u, v })
    }

    pub fn vertex_get(&mut self, v: usize) -> P::Key {
        let x = self.ptr(v);
        self.access_ptr(x);
        self.tree.node(x).key
    }

    pub fn vertex_set(&mut self, v: usize, key: P::Key) {
        let x = self.ptr(v);
        self.access_ptr(x);
        self.tree.node_mut(x).key = key;
        self.tree.pull_up(x);
    }

    #[cfg(test)]
    pub(crate) fn assert_consistent(&self)
    where
        P::Agg: PartialEq + std::fmt::Debug,
    {
        self.tree.assert_consistent();
    }
}

impl<P: PathMonoid> DynamicForest for LinkCutTree<P> {
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

impl<P: PathMonoid> VertexOps for LinkCutTree<P> {
    fn vertex_get(&mut self, v: usize) -> Self::Key {
        self.vertex_get(v)
    }

    fn vertex_set(&mut self, v: usize, key: Self::Key) {
        self.vertex_set(v, key)
    }
}

impl<P: PathMonoid> PathOps for LinkCutTree<P> {
    type Agg = P::Agg;

    fn make_root(&mut self, v: usize) {
        self.make_root(v)
    }

    fn find_root(&mut self, v: usize) -> usize {
        self.find_root(v)
    }

    fn path_fold(&mut self, u: usize, v: usize) -> Option<Self::Agg> {
        self.path_fold(u, v)
    }

    fn distance(&mut self, u: usize, v: usize) -> Option<usize> {
        self.distance(u, v)
    }
}
