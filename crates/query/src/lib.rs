//! # Prefixer Query
//!
//! Compiles a flat `name -> dotted.path` mapping into a single batched
//! content-graph query and the extractor that re-flattens the query result.
//!
//! Paths sharing a prefix share one subtree: `{"X":"a.b","Y":"a.c"}`
//! compiles to `{ a { b c } }` rather than two top-level `a` selections.
//! The compiler and extractor are pure; the tree is rebuilt on every call
//! and never cached.

mod compile;
mod tree;

pub use compile::{compile, CompiledQuery, QueryPathMap};
pub use tree::QueryTree;
