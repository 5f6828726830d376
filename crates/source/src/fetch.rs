use exn::ResultExt;
use foodsafe_config::Config;
use foodsafe_extract::consts::DEFAULT_ENCODING;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use tracing::instrument;

use crate::error::{ErrorKind, Result};
use crate::{Page, SearchQuery};

/// Runs searches against the inspection results endpoint.
///
/// Each search is a single request. A non-success status is reported as
/// [`ErrorKind::Status`] and never retried.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    endpoint: String,
}
impl Fetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .or_raise(|| ErrorKind::Network("could not build HTTP client".to_string()))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches the results page for `query`.
    ///
    /// The page's encoding is the `charset` declared in the `Content-Type`
    /// response header, falling back to UTF-8.
    #[instrument(skip_all, fields(endpoint = %self.endpoint, status))]
    pub async fn fetch(&self, query: &SearchQuery) -> Result<Page> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&query.pairs())
            .send()
            .await
            .or_raise(|| ErrorKind::Network(format!("request to {} failed", self.endpoint)))?;
        let status = response.status();
        tracing::Span::current().record("status", status.as_u16());
        if !status.is_success() {
            exn::bail!(ErrorKind::Status(status.as_u16()));
        }
        let encoding = declared_charset(response.headers()).unwrap_or(DEFAULT_ENCODING).to_string();
        let content = response
            .bytes()
            .await
            .or_raise(|| ErrorKind::Network("response body was interrupted".to_string()))?;
        tracing::debug!(size = content.len(), encoding = %encoding, "fetched results page");
        Ok(Page::new(content.to_vec(), encoding))
    }
}

fn declared_charset(headers: &HeaderMap) -> Option<&str> {
    headers.get(CONTENT_TYPE).and_then(|value| value.to_str().ok()).and_then(charset)
}

/// The `charset` parameter of a `Content-Type` value.
fn charset(content_type: &str) -> Option<&str> {
    content_type
        .split(';')
        .skip(1)
        .filter_map(|param| param.split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("charset"))
        .map(|(_, value)| value.trim().trim_matches('"'))
        .filter(|value| !value.is_empty())
}
