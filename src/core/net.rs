// src/core/net.rs
// HTTP GET behind a small trait so the pipeline can run against fixtures.

use reqwest::blocking::Client;
use reqwest::redirect::Policy;

use crate::config::consts::MAX_REDIRECTS;
use crate::config::options::ScrapeOptions;
use crate::error::{Error, FetchError};

/// Fetch one URL and return its body. Only 2xx responses count as content.
///
/// `Sync` so one fetcher can be shared by scrape workers.
pub trait Fetch: Sync {
    fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// Blocking reqwest client with timeout, redirect cap and fixed User-Agent.
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(opts: &ScrapeOptions) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(opts.timeout())
            .redirect(Policy::limited(MAX_REDIRECTS))
            .user_agent(opts.user_agent.as_str())
            .gzip(true)
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpClient {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Transport { url: url.to_string(), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: url.to_string(), status: status.as_u16() });
        }

        resp.text()
            .map_err(|source| FetchError::Transport { url: url.to_string(), source })
    }
}
