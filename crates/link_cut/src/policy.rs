//! Aggregate policies for path queries.
//!
//! A policy describes what each vertex stores and how values along a path
//! combine. Paths are ordered, so `agg_merge` need not be commutative.

/// A monoid over vertex keys, folded along a path.
///
/// `agg_unit()` must be neutral for `agg_merge` on either side.
pub trait PathMonoid {
    type Key: Copy;
    type Agg: Copy;

    /// Whether folding a path backwards gives the same aggregate.
    ///
    /// When `false`, the tree keeps a second, reversed aggregate per node so
    /// that re-rooting stays O(1).
    const REVERSAL_INVARIANT: bool;

    fn agg_unit() -> Self::Agg;
    fn agg_from_key(key: &Self::Key) -> Self::Agg;

    /// Aggregate of the sequence `left + [key] + right`.
    fn agg_merge(left: &Self::Agg, key: &Self::Key, right: &Self::Agg) -> Self::Agg;
}

/// Sum of vertex values (wrapping).
#[derive(Clone, Copy, Debug)]
pub enum VertexSum {}

impl PathMonoid for VertexSum {
    type Key = i64;
    type Agg = i64;

    const REVERSAL_INVARIANT: bool = true;

    #[inline(always)]
    fn agg_unit() -> Self::Agg {
        0
    }

    #[inline(always)]
    fn agg_from_key(key: &Self::Key) -> Self::Agg {
        *key
    }

    #[inline(always)]
    fn agg_merge(left: &Self::Agg, key: &Self::Key, right: &Self::Agg) -> Self::Agg {
        left.wrapping_add(*key).wrapping_add(*right)
    }
}

/// Maximum vertex value on a path.
#[derive(Clone, Copy, Debug)]
pub enum VertexMax {}

impl PathMonoid for VertexMax {
    type Key = i64;
    type Agg = i64;

    const REVERSAL_INVARIANT: bool = true;

    #[inline(always)]
    fn agg_unit() -> Self::Agg {
        i64::MIN
    }

    #[inline(always)]
    fn agg_from_key(key: &Self::Key) -> Self::Agg {
        *key
    }

    #[inline(always)]
    fn agg_merge(left: &Self::Agg, key: &Self::Key, right: &Self::Agg) -> Self::Agg {
        (*left).max(*key).max(*right)
    }
}

/// `(a, b)` stands for `x -> a * x + b`; returns `f ∘ g`.
#[inline(always)]
fn compose(f: (i64, i64), g: (i64, i64)) -> (i64, i64) {
    (
        f.0.wrapping_mul(g.0),
        f.0.wrapping_mul(g.1).wrapping_add(f.1),
    )
}

/// Composition of affine maps along a path.
///
/// Folding the path `u -> ... -> v` yields `f_v ∘ ... ∘ f_u`, so the answer
/// depends on direction.
#[derive(Clone, Copy, Debug)]
pub enum PathComposite {}

impl PathMonoid for PathComposite {
    type Key = (i64, i64);
    type Agg = (i64, i64);

    const REVERSAL_INVARIANT: bool = false;

    #[inline(always)]
    fn agg_unit() -> Self::Agg {
        (1, 0)
    }

    #[inline(always)]
    fn agg_from_key(key: &Self::Key) -> Self::Agg {
        *key
    }

    #[inline(always)]
    fn agg_merge(left: &Self::Agg, key: &Self::Key, right: &Self::Agg) -> Self::Agg {
        compose(*right, compose(*key, *left))
    }
}
