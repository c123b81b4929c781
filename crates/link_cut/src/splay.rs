//! Arena of splay nodes keyed by position along a preferred path.
//!
//! `parent` doubles as the path-parent pointer: a node whose parent does not
//! list it as a child is the root of its splay tree.

use crate::policy::PathMonoid;

#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Ptr(u32);

impl Ptr {
    pub(crate) const NULL: Self = Self(u32::MAX);

    #[inline(always)]
    pub(crate) fn new(v: usize) -> Self {
        debug_assert!(v < u32::MAX as usize);
        Self(v as u32)
    }

    #[inline(always)]
    pub(crate) fn is_null(self) -> bool {
        self == Self::NULL
    }

    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Node<P: PathMonoid> {
    pub(crate) child: [Ptr; 2],
    pub(crate) parent: Ptr,
    /// Children still owe a reversal; this node's own fields are already flipped.
    pub(crate) flipped: bool,
    pub(crate) size: u32,
    pub(crate) key: P::Key,
    pub(crate) agg: P::Agg,
    pub(crate) agg_rev: P::Agg,
}

impl<P: PathMonoid> Node<P> {
    fn new(key: P::Key) -> Self {
        let agg = P::agg_from_key(&key);
        Self {
            child: [Ptr::NULL; 2],
            parent: Ptr::NULL,
            flipped: false,
            size: 1,
            key,
            agg,
            agg_rev: agg,
        }
    }
}

pub(crate) struct SplayForest<P: PathMonoid> {
    nodes: Vec<Node<P>>,
    path: Vec<Ptr>,
}

impl<P: PathMonoid> SplayForest<P> {
    pub(crate) fn new(keys: &[P::Key]) -> Self {
        debug_assert!(keys.len() < u32::MAX as usize);
        Self {
            nodes: keys.iter().map(|&key| Node::new(key)).collect(),
            path: Vec::with_capacity(keys.len()),
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline(always)]
    pub(crate) fn node(&self, x: Ptr) -> &Node<P> {
        debug_assert!(!x.is_null());
        &self.nodes[x.index()]
    }

    #[inline(always)]
    pub(crate) fn node_mut(&mut self, x: Ptr) -> &mut Node<P> {
        debug_assert!(!x.is_null());
        &mut self.nodes[x.index()]
    }

    #[inline(always)]
    fn size(&self, x: Ptr) -> u32 {
        if x.is_null() { 0 } else { self.node(x).size }
    }

    #[inline(always)]
    fn agg(&self, x: Ptr) -> P::Agg {
        if x.is_null() {
            P::agg_unit()
        } else {
            self.node(x).agg
        }
    }

    #[inline(always)]
    fn agg_rev(&self, x: Ptr) -> P::Agg {
        if x.is_null() {
            P::agg_unit()
        } else {
            self.node(x).agg_rev
        }
    }

    pub(crate) fn is_splay_root(&self, x: Ptr) -> bool {
        let p = self.node(x).parent;
        p.is_null() || !self.node(p).child.contains(&x)
    }

    /// Which side of its splay parent `x` hangs on. `x` must not be a splay root.
    #[inline(always)]
    fn side(&self, x: Ptr) -> usize {
        let p = self.node(x).parent;
        usize::from(self.node(p).child[1] == x)
    }

    /// Reverses the path stored under `x`.
    pub(crate) fn reverse(&mut self, x: Ptr) {
        if x.is_null() {
            return;
        }
        let n = self.node_mut(x);
        n.child.swap(0, 1);
        if !P::REVERSAL_INVARIANT {
            std::mem::swap(&mut n.agg, &mut n.agg_rev);
        }
        n.flipped ^= true;
    }

    pub(crate) fn push_down(&mut self, x: Ptr) {
        if !self.node(x).flipped {
            return;
        }
        let [l, r] = self.node(x).child;
        self.reverse(l);
        self.reverse(r);
        self.node_mut(x).flipped = false;
    }

    pub(crate) fn pull_up(&mut self, x: Ptr) {
        let [l, r] = self.node(x).child;
        let key = self.node(x).key;
        let size = 1 + self.size(l) + self.size(r);
        let agg = P::agg_merge(&self.agg(l), &key, &self.agg(r));
        let agg_rev = if P::REVERSAL_INVARIANT {
            agg
        } else {
            P::agg_merge(&self.agg_rev(r), &key, &self.agg_rev(l))
        };
        let n = self.node_mut(x);
        n.size = size;
        n.agg = agg;
        n.agg_rev = agg_rev;
    }

    /// Pushes every pending flip from the splay root down to `x`.
    fn push_path(&mut self, x: Ptr) {
        let mut path = std::mem::take(&mut self.path);
        path.clear();
        let mut y = x;
        path.push(y);
        while !self.is_splay_root(y) {
            y = self.node(y).parent;
            path.push(y);
        }
        for &y in path.iter().rev() {
            self.push_down(y);
        }
        self.path = path;
    }

    /// Lifts `x` above its parent. Only the demoted parent is pulled.
    fn rotate(&mut self, x: Ptr) {
        let p = self.node(x).parent;
        let g = self.node(p).parent;
        let d = self.side(x);
        let b = self.node(x).child[d ^ 1];

        if !self.is_splay_root(p) {
            let pd = self.side(p);
            self.node_mut(g).child[pd] = x;
        }
        // Either a structural parent or the path-parent of the old splay root.
        self.node_mut(x).parent = g;

        self.node_mut(p).child[d] = b;
        if !b.is_null() {
            self.node_mut(b).parent = p;
        }
        self.node_mut(x).child[d ^ 1] = p;
        self.node_mut(p).parent = x;

        self.pull_up(p);
    }

    pub(crate) fn splay(&mut self, x: Ptr) {
        self.push_path(x);
        while !self.is_splay_root(x) {
            let p = self.node(x).parent;
            if !self.is_splay_root(p) {
                if self.side(x) == self.side(p) {
                    self.rotate(p);
                } else {
                    self.rotate(x);
                }
            }
            self.rotate(x);
        }
        self.pull_up(x);
    }

    /// Checks `size`/`agg` of every node against its children.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self)
    where
        P::Agg: PartialEq + std::fmt::Debug,
    {
        for (i, n) in self.nodes.iter().enumerate() {
            let [l, r] = n.child;
            for c in [l, r] {
                if !c.is_null() {
                    assert_eq!(self.node(c).parent, Ptr::new(i), "child {c:?} of {i}");
                }
            }
            assert_eq!(n.size, 1 + self.size(l) + self.size(r), "size at {i}");
            let (agg, agg_rev) = if n.flipped {
                (
                    P::agg_merge(&self.agg_rev(l), &n.key, &self.agg_rev(r)),
                    P::agg_merge(&self.agg(r), &n.key, &self.agg(l)),
                )
            } else {
                (
                    P::agg_merge(&self.agg(l), &n.key, &self.agg(r)),
                    P::agg_merge(&self.agg_rev(r), &n.key, &self.agg_rev(l)),
                )
            };
            assert_eq!(n.agg, agg, "agg at {i}");
            if !P::REVERSAL_INVARIANT {
                assert_eq!(n.agg_rev, agg_rev, "agg_rev at {i}");
            }
        }
    }

    /// In-order keys of the splay tree rooted at `x`, flips applied.
    #[cfg(test)]
    pub(crate) fn in_order(&self, x: Ptr) -> Vec<usize> {
        fn walk<Q: PathMonoid>(t: &SplayForest<Q>, x: Ptr, flip: bool, out: &mut Vec<usize>) {
            if x.is_null() {
                return;
            }
            let n = t.node(x);
            // A pending flip on `x` reverses its children's contents, not `x.child`.
            let [first, second] = if flip { [n.child[1], n.child[0]] } else { n.child };
            let below = flip ^ n.flipped;
            walk(t, first, below, out);
            out.push(x.index());
            walk(t, second, below, out);
        }
        let mut out = Vec::new();
        walk(self, x, false, &mut out);
        out
    }
}
