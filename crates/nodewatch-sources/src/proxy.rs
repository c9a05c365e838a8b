//! HTTP snapshot source reading `GET /api/v1/nodes`.
//!
//! Intended for an API endpoint that is already reachable without client
//! certificates: `kubectl proxy`, or an API server with a bearer token.
//! Requests go direct; `HTTP(S)_PROXY` settings are not applied.

use crate::errors::{fetch_error, SourceError};
use async_trait::async_trait;
use nodewatch_core::errors::Result;
use nodewatch_core::model::parse_node_list;
use nodewatch_core::{NodeState, SnapshotSource};
use nodewatch_core_types::Sensitive;

/// Default address of `kubectl proxy`
pub const DEFAULT_PROXY_URL: &str = "http://127.0.0.1:8001";

const NODES_PATH: &str = "/api/v1/nodes";

#[derive(Debug, Clone)]
pub struct ProxySource {
    client: reqwest::Client,
    url: String,
    token: Option<Sensitive<String>>,
}

impl ProxySource {
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be initialised (e.g. no TLS backend).
    pub fn new(
        base_url: impl AsRef<str>,
        token: Option<Sensitive<String>>,
    ) -> std::result::Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().no_proxy().build()?;
        Ok(Self {
            client,
            url: nodes_url(base_url.as_ref()),
            token,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn list(&self) -> std::result::Result<Vec<NodeState>, SourceError> {
        let mut request = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.expose());
        }

        let request_error = |source| SourceError::Request {
            url: self.url.clone(),
            source,
        };
        let response = request.send().await.map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(request_error)?;
        Ok(parse_node_list(&body)?)
    }
}

fn nodes_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), NODES_PATH)
}

#[async_trait]
impl SnapshotSource for ProxySource {
    type State = NodeState;

    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<NodeState>> {
        let nodes = self
            .list()
            .await
            .map_err(|e| fetch_error(&self.describe(), e))?;
        tracing::debug!(
            component = module_path!(),
            op = "fetch",
            source = %self.url,
            fetched = nodes.len(),
        );
        Ok(nodes)
    }
}
