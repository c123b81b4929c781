use std::fmt;

/// Rejected structural update on a dynamic forest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkCutError {
    /// `link(u, v)` would close a cycle (this includes `u == v`).
    AlreadyConnected { u: usize, v: usize },
    /// `cut(u, v)` named a pair that is not joined by an edge.
    NoSuchEdge { u: usize, v: usize },
}

impl fmt::Display for LinkCutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::AlreadyConnected { u, v } => {
                write!(f, "vertices {u} and {v} are already connected")
            }
            Self::NoSuchEdge { u, v } => write!(f, "no edge between {u} and {v}"),
        }
    }
}

impl std::error::Error for LinkCutError {}
