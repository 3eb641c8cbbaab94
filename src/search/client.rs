use crate::config::Config;
use crate::schemas::{SearchRequest, SearchResponse};
use crate::search::error::SearchError;
use reqwest::Url;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// HTTP client for the study search service.
///
/// One call per query: `POST <endpoint>` with `{"query": ...}` as JSON. Any
/// non-success status, transport failure, unparseable body or expired
/// deadline comes back as a [`SearchError`].
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl SearchClient {
    pub fn new(config: &Config) -> Result<Self, SearchError> {
        let endpoint = parse_endpoint(&config.endpoint)?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("genesis/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SearchError::from_transport(&e, config.timeout))?;

        Ok(Self {
            http,
            endpoint,
            timeout: config.timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run one search. The whole round trip, body included, is bounded by
    /// the configured timeout.
    pub async fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
        let start = Instant::now();
        debug!(endpoint = %self.endpoint, query, "sending search request");

        let result = match tokio::time::timeout(self.timeout, self.execute(query)).await {
            Ok(result) => result,
            Err(_) => Err(SearchError::Timeout(self.timeout)),
        };

        match &result {
            Ok(response) => info!(
                query,
                records = response.records.len(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "search completed"
            ),
            Err(e) => warn!(query, error = %e, "search failed"),
        }
        result
    }

    async fn execute(&self, query: &str) -> Result<SearchResponse, SearchError> {
        let request = SearchRequest {
            query: query.to_string(),
        };

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| SearchError::from_transport(&e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().map(str::to_string),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SearchError::from_transport(&e, self.timeout))?;

        serde_json::from_slice(&body).map_err(|e| SearchError::Decode(e.to_string()))
    }
}

/// Accept only absolute http(s) URLs.
pub fn parse_endpoint(raw: &str) -> Result<Url, SearchError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| SearchError::InvalidEndpoint(format!("{raw} ({e})")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SearchError::InvalidEndpoint(format!(
            "{raw} (unsupported scheme '{other}')"
        ))),
    }
}
