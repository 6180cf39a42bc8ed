use thiserror::Error;

/// Everything that can go wrong while resolving dynamic values. Errors are
/// returned as data; none of them stop the caller from interpolating with
/// whatever values it already has.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no API credential configured")]
    MissingCredential,

    #[error("credential rejected by the content graph (invalid token)")]
    InvalidCredential,

    #[error("credential lacks permission for the requested fields")]
    Forbidden,

    #[error("content graph returned HTTP {0}")]
    Http(u16),

    /// The remote accepted the request but reported query-level errors;
    /// carries all reported messages joined with `"; "`.
    #[error("query failed: {0}")]
    Query(String),

    #[error("could not reach the content graph: {0}")]
    Transport(String),
}
