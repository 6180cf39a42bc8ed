use crate::error::ResolveError;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default content-graph endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://graphql.datocms.com/";

#[derive(Debug, Serialize)]
struct GraphRequest<'a> {
    query: &'a str,
}

/// Wire envelope of a content-graph response. `data` and `errors` can both
/// be present: partially failed queries still carry the fields that did
/// resolve.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphResponseError>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphResponseError {
    pub message: String,
}

/// The single network capability the resolver needs: submit one compiled
/// query with a credential, get back the response envelope or a categorized
/// error. Tests substitute canned implementations.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, query: &str, credential: &str) -> Result<GraphResponse, ResolveError>;
}

/// reqwest-backed fetcher: one HTTP POST per call, JSON body
/// `{"query": …}`, bearer-token authorization.
pub struct HttpFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpFetcher {
    pub fn new() -> reqwest::Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    async fn fetch(&self, query: &str, credential: &str) -> Result<GraphResponse, ResolveError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(credential)
            .json(&GraphRequest { query })
            .send()
            .await
            .map_err(|err| ResolveError::Transport(err.to_string()))?;

        match response.status() {
            StatusCode::UNAUTHORIZED => return Err(ResolveError::InvalidCredential),
            StatusCode::FORBIDDEN => return Err(ResolveError::Forbidden),
            status if !status.is_success() => return Err(ResolveError::Http(status.as_u16())),
            _ => {}
        }

        response
            .json::<GraphResponse>()
            .await
            .map_err(|err| ResolveError::Transport(format!("invalid response body: {err}")))
    }
}
