//! # Prefixer Resolver
//!
//! The one async boundary of the pipeline: compiles a query-path map into a
//! single batched content-graph query, submits it over HTTP, and extracts
//! the flat value map from the response. Overlapping attempts supersede
//! each other; a stale response is discarded, never applied.
//!
//! ## Example
//!
//! ```no_run
//! use prefixer_resolver::{HttpFetcher, Resolution, Resolver};
//! use prefixer_template::{merge_values, render};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let global = prefixer_config::parse(r#"{"SITE":"blog"}"#);
//! let query_paths = prefixer_config::parse(r#"{"BLOG_SLUG":"page.slug"}"#);
//!
//! let resolver = Resolver::new(HttpFetcher::new()?);
//! if let Resolution::Completed(outcome) = resolver.resolve(&query_paths, Some("token")).await {
//!     // Interpolation proceeds with whatever resolved, error or not.
//!     let values = merge_values(&global, &outcome.values);
//!     println!("{}", render("{{BLOG_SLUG}}/", &values).output);
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod fetcher;
mod resolver;

pub use error::ResolveError;
pub use fetcher::{
    ContentFetcher, GraphResponse, GraphResponseError, HttpFetcher, DEFAULT_ENDPOINT,
};
pub use resolver::{Resolution, ResolveOutcome, Resolver};

// Re-export the maps callers hand back and forth across the boundary.
pub use prefixer_query::QueryPathMap;
pub use prefixer_template::ValueMap;
