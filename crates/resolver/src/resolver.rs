use crate::error::ResolveError;
use crate::fetcher::ContentFetcher;
use prefixer_query::{compile, QueryPathMap};
use prefixer_template::ValueMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Result of one completed resolution attempt. `values` and `error` can
/// coexist: a partially failed query still yields the fields that did
/// resolve, alongside the joined error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveOutcome {
    pub values: ValueMap,
    pub error: Option<ResolveError>,
}

impl ResolveOutcome {
    fn failed(error: ResolveError) -> Self {
        Self {
            values: ValueMap::new(),
            error: Some(error),
        }
    }
}

/// What a single `resolve` call produced. `Superseded` means a newer
/// attempt started while this one was in flight; its response has been
/// discarded and must not be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Completed(ResolveOutcome),
    Superseded,
}

impl Resolution {
    /// The outcome, if this attempt was not superseded.
    #[must_use]
    pub fn outcome(self) -> Option<ResolveOutcome> {
        match self {
            Self::Completed(outcome) => Some(outcome),
            Self::Superseded => None,
        }
    }
}

/// Orchestrates query compilation against a live fetch, discarding stale
/// responses when attempts overlap.
///
/// Each `resolve` call takes a new generation from a monotonically
/// increasing counter; after the fetch completes the attempt checks whether
/// it is still the newest one and reports [`Resolution::Superseded`]
/// otherwise. There is no queuing and no retry: a newer attempt simply
/// replaces the older one.
pub struct Resolver<F> {
    fetcher: F,
    generation: AtomicU64,
}

impl<F: ContentFetcher> Resolver<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            generation: AtomicU64::new(0),
        }
    }

    /// The underlying fetch capability.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Compiles `paths` into one batched query, submits it with
    /// `credential`, and extracts the flat value map from the response.
    ///
    /// An empty (or entirely malformed) path map completes immediately with
    /// no values, no error, and no network call. A missing or blank
    /// credential completes with [`ResolveError::MissingCredential`] so the
    /// caller can still interpolate from its static map alone.
    pub async fn resolve(&self, paths: &QueryPathMap, credential: Option<&str>) -> Resolution {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let Some(compiled) = compile(paths) else {
            return Resolution::Completed(ResolveOutcome::default());
        };

        let Some(credential) = credential.filter(|c| !c.trim().is_empty()) else {
            return Resolution::Completed(ResolveOutcome::failed(ResolveError::MissingCredential));
        };

        log::debug!(
            "resolving generation {generation} with query {}",
            compiled.query()
        );
        let result = self.fetcher.fetch(compiled.query(), credential).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            log::debug!("discarding superseded response (generation {generation})");
            return Resolution::Superseded;
        }

        let response = match result {
            Ok(response) => response,
            Err(error) => {
                log::warn!("resolution failed: {error}");
                return Resolution::Completed(ResolveOutcome::failed(error));
            }
        };

        let error = response
            .errors
            .as_deref()
            .filter(|errors| !errors.is_empty())
            .map(|errors| {
                let joined = errors
                    .iter()
                    .map(|err| err.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                log::warn!("content graph reported errors: {joined}");
                ResolveError::Query(joined)
            });

        let values = response
            .data
            .as_ref()
            .map(|data| compiled.extract(data))
            .unwrap_or_default();

        Resolution::Completed(ResolveOutcome { values, error })
    }
}
