//! Dynamic forests: a splay-based Link-Cut Tree and a naive reference forest.

pub mod policy;
pub mod traits;

mod error;
mod lct;
mod naive;
mod splay;

pub use error::LinkCutError;
pub use lct::LinkCutTree;
pub use naive::NaiveForest;

pub use traits::{DynamicForest, PathOps, VertexOps};
