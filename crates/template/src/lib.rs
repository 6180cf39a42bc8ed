//! # Prefixer Template
//!
//! Token scanning and interpolation for prefix patterns.
//!
//! A pattern is free text containing zero or more tokens of the form
//! `{{IDENT}}` (e.g. `{{BLOG_SLUG}}/`). Scanning, splitting, and
//! interpolation are pure functions with no shared state; callers re-run
//! them on every edit rather than caching parse results.

mod interpolate;
mod scanner;

pub use interpolate::{
    has_unresolved_keys, interpolate, merge_values, render, Rendered, ValueMap,
};
pub use scanner::{split_segments, template_keys, unbalanced_delimiters, Segment, Token};
